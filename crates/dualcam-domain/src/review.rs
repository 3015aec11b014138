//! Review records and the classified output written into snapshots

use serde::{Deserialize, Serialize};

/// A single user review from the reviews feed
///
/// The rating is kept as the raw label text; turning it into a number is the
/// classifier's job so that the fallback value stays an explicit rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewRecord {
    /// Raw `im:rating` label, e.g. "4"
    pub rating_label: String,

    /// Review title
    pub title: String,

    /// Review body
    pub content: String,
}

impl ReviewRecord {
    /// Create a review from its three feed labels
    pub fn new(
        rating_label: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            rating_label: rating_label.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A review placed in the complaints bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    /// Parsed star rating
    pub rating: i32,

    /// Review title as written
    pub title: String,

    /// First characters of the review body
    pub snippet: String,
}

/// A review placed in the feature-request or positive-mention bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    /// Parsed star rating
    pub rating: i32,

    /// First characters of the review body
    pub text: String,
}

/// Untruncated bucket sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BucketTotals {
    /// Reviews classified as complaints
    pub complaints: usize,

    /// Reviews classified as feature requests
    pub feature_requests: usize,

    /// Reviews classified as positive mentions
    pub positive_mentions: usize,
}

/// Review analysis attached to the target app by the enricher
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReviewAnalysis {
    /// Number of reviews fetched and classified
    pub total_reviews_analyzed: usize,

    /// Leading complaints, in feed order
    pub complaints: Vec<Complaint>,

    /// Leading feature requests, in feed order
    pub feature_requests: Vec<Mention>,

    /// Leading positive mentions, in feed order
    pub positive_mentions: Vec<Mention>,

    /// Bucket sizes before truncation
    #[serde(default)]
    pub bucket_totals: BucketTotals,
}

/// A post returned by the discussion search API
///
/// Only ever logged; never written into a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiscussionPost {
    /// Post title
    pub title: String,

    /// Post body
    pub selftext: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_new() {
        let review = ReviewRecord::new("5", "Love it", "Works great");
        assert_eq!(review.rating_label, "5");
        assert_eq!(review.title, "Love it");
        assert_eq!(review.content, "Works great");
    }

    #[test]
    fn test_analysis_without_totals_deserializes() {
        let json = r#"{
            "total_reviews_analyzed": 2,
            "complaints": [{"rating": 2, "title": "Crashes", "snippet": "crashes on launch"}],
            "feature_requests": [],
            "positive_mentions": [{"rating": 5, "text": "love it"}]
        }"#;

        let analysis: ReviewAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.total_reviews_analyzed, 2);
        assert_eq!(analysis.complaints[0].title, "Crashes");
        assert_eq!(analysis.positive_mentions[0].rating, 5);
        assert_eq!(analysis.bucket_totals, BucketTotals::default());
    }
}
