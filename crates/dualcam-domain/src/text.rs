//! Small text helpers shared by the classifier and the pipelines

/// Keep at most `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, so multi-byte text is never split inside a
/// character.
///
/// # Examples
///
/// ```
/// use dualcam_domain::text::truncate_chars;
///
/// assert_eq!(truncate_chars("héllo", 2), "hé");
/// assert_eq!(truncate_chars("short", 200), "short");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_longer_text() {
        let text = "a".repeat(500);
        assert_eq!(truncate_chars(&text, 200).chars().count(), 200);
    }

    #[test]
    fn test_truncate_shorter_text_is_unchanged() {
        assert_eq!(truncate_chars("dual cam", 200), "dual cam");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("📷📷📷", 2), "📷📷");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn test_truncate_to_zero() {
        assert_eq!(truncate_chars("anything", 0), "");
    }
}
