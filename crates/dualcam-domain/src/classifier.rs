//! Keyword-based review classifier
//!
//! Maps each review to zero or more of three independent buckets:
//!
//! - **Complaint**: rating at or below `complaint_max_rating`
//! - **Feature request**: text mentions any feature keyword, whatever the rating
//! - **Positive mention**: rating at or above `positive_min_rating` and text
//!   mentions any positive keyword
//!
//! The buckets are not a partition. A three-star "I wish it had 4K" review is
//! both a complaint and a feature request.
//!
//! # Examples
//!
//! ```
//! use dualcam_domain::{ReviewClassifier, ReviewRecord};
//!
//! let classifier = ReviewClassifier::default();
//! let review = ReviewRecord::new("2", "Crashes", "I wish it would stop crashing");
//!
//! let result = classifier.classify(&review);
//! assert_eq!(result.rating, 2);
//! assert!(result.complaint.is_some());
//! assert!(result.feature_request.is_some());
//! assert!(result.positive_mention.is_none());
//! ```

use crate::review::{BucketTotals, Complaint, Mention, ReviewAnalysis, ReviewRecord};
use crate::text::truncate_chars;
use serde::{Deserialize, Serialize};

/// Default keywords that mark a feature request
pub const DEFAULT_FEATURE_KEYWORDS: &[&str] = &[
    "wish",
    "need",
    "should",
    "add",
    "feature",
    "want",
    "would like",
    "missing",
];

/// Default keywords that mark a positive mention
pub const DEFAULT_POSITIVE_KEYWORDS: &[&str] = &[
    "love",
    "great",
    "awesome",
    "best",
    "perfect",
    "amazing",
    "excellent",
];

/// Classification rules
///
/// Every value the classifier relies on lives here, including the rating
/// used when a label is missing or not a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierRules {
    /// Keywords that mark a feature request (matched as lower-case substrings)
    pub feature_keywords: Vec<String>,

    /// Keywords that mark a positive mention (matched as lower-case substrings)
    pub positive_keywords: Vec<String>,

    /// Highest rating that still counts as a complaint
    pub complaint_max_rating: i32,

    /// Lowest rating that can count as a positive mention
    pub positive_min_rating: i32,

    /// Characters of review body kept in bucket entries
    pub snippet_chars: usize,

    /// Rating assumed when the label is missing or malformed
    pub fallback_rating: i32,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            feature_keywords: DEFAULT_FEATURE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            positive_keywords: DEFAULT_POSITIVE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            complaint_max_rating: 3,
            positive_min_rating: 4,
            snippet_chars: 200,
            fallback_rating: 0,
        }
    }
}

impl ClassifierRules {
    /// Parse a rating label, falling back to `fallback_rating`
    pub fn parse_rating(&self, label: &str) -> i32 {
        label.trim().parse().unwrap_or(self.fallback_rating)
    }
}

/// Bucket membership for a single review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Parsed rating
    pub rating: i32,

    /// Set when the review is a complaint
    pub complaint: Option<Complaint>,

    /// Set when the review is a feature request
    pub feature_request: Option<Mention>,

    /// Set when the review is a positive mention
    pub positive_mention: Option<Mention>,
}

impl Classification {
    /// True when the review landed in no bucket
    pub fn is_unclassified(&self) -> bool {
        self.complaint.is_none() && self.feature_request.is_none() && self.positive_mention.is_none()
    }
}

/// Review classifier
#[derive(Debug, Clone, Default)]
pub struct ReviewClassifier {
    rules: ClassifierRules,
}

impl ReviewClassifier {
    /// Create a classifier with explicit rules
    pub fn new(rules: ClassifierRules) -> Self {
        Self { rules }
    }

    /// Rules in use
    pub fn rules(&self) -> &ClassifierRules {
        &self.rules
    }

    /// Classify one review
    ///
    /// Never fails: missing fields are empty strings, a bad rating label
    /// becomes the fallback rating.
    pub fn classify(&self, review: &ReviewRecord) -> Classification {
        let rating = self.rules.parse_rating(&review.rating_label);
        let search_text = format!(
            "{} {}",
            review.title.to_lowercase(),
            review.content.to_lowercase()
        );
        let snippet = truncate_chars(&review.content, self.rules.snippet_chars);

        let complaint = (rating <= self.rules.complaint_max_rating).then(|| Complaint {
            rating,
            title: review.title.clone(),
            snippet: snippet.clone(),
        });

        let feature_request = contains_any(&search_text, &self.rules.feature_keywords).then(|| {
            Mention {
                rating,
                text: snippet.clone(),
            }
        });

        let positive_mention = (rating >= self.rules.positive_min_rating
            && contains_any(&search_text, &self.rules.positive_keywords))
        .then(|| Mention {
            rating,
            text: snippet,
        });

        Classification {
            rating,
            complaint,
            feature_request,
            positive_mention,
        }
    }

    /// Classify a batch of reviews into a [`ReviewAnalysis`]
    ///
    /// Each bucket keeps its first `bucket_limit` entries in input order;
    /// `bucket_totals` carries the full counts.
    pub fn analyze<'a, I>(&self, reviews: I, bucket_limit: usize) -> ReviewAnalysis
    where
        I: IntoIterator<Item = &'a ReviewRecord>,
    {
        let mut analysis = ReviewAnalysis::default();
        let mut totals = BucketTotals::default();

        for review in reviews {
            analysis.total_reviews_analyzed += 1;
            let classification = self.classify(review);

            if let Some(complaint) = classification.complaint {
                totals.complaints += 1;
                if analysis.complaints.len() < bucket_limit {
                    analysis.complaints.push(complaint);
                }
            }
            if let Some(request) = classification.feature_request {
                totals.feature_requests += 1;
                if analysis.feature_requests.len() < bucket_limit {
                    analysis.feature_requests.push(request);
                }
            }
            if let Some(mention) = classification.positive_mention {
                totals.positive_mentions += 1;
                if analysis.positive_mentions.len() < bucket_limit {
                    analysis.positive_mentions.push(mention);
                }
            }
        }

        analysis.bucket_totals = totals;
        analysis
    }
}

fn contains_any(haystack: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|keyword| haystack.contains(keyword.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(rating: &str, title: &str, content: &str) -> Classification {
        ReviewClassifier::default().classify(&ReviewRecord::new(rating, title, content))
    }

    #[test]
    fn test_low_rating_is_complaint() {
        let result = classify("3", "Okay", "It records.");
        let complaint = result.complaint.unwrap();
        assert_eq!(complaint.rating, 3);
        assert_eq!(complaint.title, "Okay");
        assert_eq!(complaint.snippet, "It records.");
        assert!(result.feature_request.is_none());
        assert!(result.positive_mention.is_none());
    }

    #[test]
    fn test_four_stars_is_not_complaint() {
        assert!(classify("4", "Fine", "Does the job").complaint.is_none());
    }

    #[test]
    fn test_feature_keyword_in_title() {
        let result = classify("5", "Please ADD 4K", "otherwise fine");
        assert!(result.feature_request.is_some());
    }

    #[test]
    fn test_multi_word_keyword() {
        let result = classify("5", "", "I would like a landscape mode");
        assert!(result.feature_request.is_some());
    }

    #[test]
    fn test_positive_requires_rating() {
        let high = classify("5", "Amazing", "Love the split screen");
        assert!(high.positive_mention.is_some());

        let low = classify("3", "Amazing idea", "but it crashes");
        assert!(low.positive_mention.is_none());
        assert!(low.complaint.is_some());
    }

    #[test]
    fn test_review_in_several_buckets() {
        let result = classify("5", "Best app", "I wish it had a timer");
        assert!(result.feature_request.is_some());
        assert!(result.positive_mention.is_some());
        assert!(result.complaint.is_none());
    }

    #[test]
    fn test_malformed_rating_falls_back() {
        let result = classify("five", "Hmm", "no keywords here");
        assert_eq!(result.rating, 0);
        assert!(result.complaint.is_some());

        let result = classify("", "", "");
        assert_eq!(result.rating, 0);
        assert!(result.complaint.is_some());
    }

    #[test]
    fn test_fallback_rating_is_configurable() {
        let rules = ClassifierRules {
            fallback_rating: 5,
            ..Default::default()
        };
        let classifier = ReviewClassifier::new(rules);
        let result = classifier.classify(&ReviewRecord::new("", "", "nothing"));
        assert_eq!(result.rating, 5);
        assert!(result.is_unclassified());
    }

    #[test]
    fn test_rating_label_whitespace() {
        assert_eq!(classify(" 4 ", "", "").rating, 4);
    }

    #[test]
    fn test_snippet_truncated_to_200_chars() {
        let content = "x".repeat(500);
        let result = classify("1", "Long", &content);
        let complaint = result.complaint.unwrap();
        assert_eq!(complaint.snippet, content[..200]);
    }

    #[test]
    fn test_snippet_keeps_case() {
        let result = classify("2", "Bad", "Crashes On iPhone 15");
        assert_eq!(result.complaint.unwrap().snippet, "Crashes On iPhone 15");
    }

    #[test]
    fn test_analyze_limits_buckets_and_counts_totals() {
        let reviews: Vec<ReviewRecord> = (0..15)
            .map(|i| ReviewRecord::new("1", format!("Review {}", i), "I want more"))
            .collect();

        let analysis = ReviewClassifier::default().analyze(&reviews, 10);
        assert_eq!(analysis.total_reviews_analyzed, 15);
        assert_eq!(analysis.complaints.len(), 10);
        assert_eq!(analysis.feature_requests.len(), 10);
        assert!(analysis.positive_mentions.is_empty());
        assert_eq!(analysis.bucket_totals.complaints, 15);
        assert_eq!(analysis.bucket_totals.feature_requests, 15);
        assert_eq!(analysis.complaints[0].title, "Review 0");
        assert_eq!(analysis.complaints[9].title, "Review 9");
    }

    #[test]
    fn test_analyze_empty() {
        let reviews: Vec<ReviewRecord> = Vec::new();
        let analysis = ReviewClassifier::default().analyze(&reviews, 10);
        assert_eq!(analysis, ReviewAnalysis::default());
    }

    #[test]
    fn test_rules_from_partial_toml_like_json() {
        let rules: ClassifierRules =
            serde_json::from_str(r#"{"snippet_chars": 80}"#).unwrap();
        assert_eq!(rules.snippet_chars, 80);
        assert_eq!(rules.complaint_max_rating, 3);
        assert_eq!(rules.feature_keywords.len(), DEFAULT_FEATURE_KEYWORDS.len());
    }
}
