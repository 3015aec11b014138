//! Outcome of a call to an external collaborator
//!
//! Network failures never propagate past the call site. Instead of an empty
//! value that looks the same whether the API had nothing or the request
//! failed, collaborators return a [`FetchOutcome`] that keeps the reason.

/// Result of a fetch that is allowed to fail softly
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// The request succeeded (the data itself may still be empty)
    Fetched(T),

    /// The request failed; callers treat this as "no data"
    Failed {
        /// Human-readable failure reason
        reason: String,
    },
}

impl<T> FetchOutcome<T> {
    /// Build a failed outcome
    pub fn failed(reason: impl Into<String>) -> Self {
        FetchOutcome::Failed {
            reason: reason.into(),
        }
    }

    /// True if the request failed
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed { .. })
    }

    /// Failure reason, if any
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            FetchOutcome::Fetched(_) => None,
            FetchOutcome::Failed { reason } => Some(reason),
        }
    }

    /// Convert into an `Option`, dropping the failure reason
    pub fn into_option(self) -> Option<T> {
        match self {
            FetchOutcome::Fetched(data) => Some(data),
            FetchOutcome::Failed { .. } => None,
        }
    }

    /// Map the fetched data
    pub fn map<U, F>(self, f: F) -> FetchOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            FetchOutcome::Fetched(data) => FetchOutcome::Fetched(f(data)),
            FetchOutcome::Failed { reason } => FetchOutcome::Failed { reason },
        }
    }
}

impl<T: Default> FetchOutcome<T> {
    /// Fetched data, or the empty value on failure
    pub fn unwrap_or_empty(self) -> T {
        self.into_option().unwrap_or_default()
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for FetchOutcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => FetchOutcome::Fetched(data),
            Err(e) => FetchOutcome::failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetched() {
        let outcome = FetchOutcome::Fetched(vec![1, 2, 3]);
        assert!(!outcome.is_failed());
        assert_eq!(outcome.failure_reason(), None);
        assert_eq!(outcome.unwrap_or_empty(), vec![1, 2, 3]);
    }

    #[test]
    fn test_failed_is_empty() {
        let outcome: FetchOutcome<Vec<u32>> = FetchOutcome::failed("HTTP 503");
        assert!(outcome.is_failed());
        assert_eq!(outcome.failure_reason(), Some("HTTP 503"));
        assert!(outcome.unwrap_or_empty().is_empty());
    }

    #[test]
    fn test_legitimately_empty_is_not_failed() {
        let outcome: FetchOutcome<Vec<u32>> = FetchOutcome::Fetched(Vec::new());
        assert!(!outcome.is_failed());
    }

    #[test]
    fn test_map_keeps_reason() {
        let outcome: FetchOutcome<u32> = FetchOutcome::failed("timeout");
        let mapped = outcome.map(|n| n * 2);
        assert_eq!(mapped, FetchOutcome::failed("timeout"));

        assert_eq!(FetchOutcome::Fetched(2).map(|n| n * 2), FetchOutcome::Fetched(4));
    }

    #[test]
    fn test_from_result() {
        let ok: FetchOutcome<u32> = Ok::<u32, String>(1).into();
        assert_eq!(ok, FetchOutcome::Fetched(1));

        let err: FetchOutcome<u32> = Err::<u32, String>("boom".to_string()).into();
        assert_eq!(err.failure_reason(), Some("boom"));
    }
}
