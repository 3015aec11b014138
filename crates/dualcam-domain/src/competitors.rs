//! Competitor aggregation: deduplicate, rank, truncate

use crate::app::{AppId, AppRecord};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Default number of competitors kept
pub const DEFAULT_COMPETITOR_LIMIT: usize = 10;

/// Default rating assumed for unrated apps when ranking
pub const DEFAULT_MISSING_RATING: f64 = 0.0;

/// Turns raw search results from several queries into a ranked competitor list
///
/// - First occurrence of each numeric id wins; later duplicates are dropped
/// - Records without an id are dropped
/// - Ranking is descending by (rating, rating_count), stable on exact ties
/// - Only the first `limit` entries survive
///
/// # Examples
///
/// ```
/// use dualcam_domain::{AppId, AppRecord, CompetitorAggregator};
///
/// let app = |id: u64, rating: f64| AppRecord {
///     numeric_id: Some(AppId(id)),
///     rating: Some(rating),
///     ..Default::default()
/// };
///
/// let ranked = CompetitorAggregator::default().aggregate(vec![app(1, 3.0), app(2, 4.5), app(1, 5.0)]);
/// let ids: Vec<u64> = ranked.iter().map(|a| a.numeric_id.unwrap().get()).collect();
/// assert_eq!(ids, vec![2, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompetitorAggregator {
    limit: usize,
    missing_rating: f64,
}

impl Default for CompetitorAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_COMPETITOR_LIMIT, DEFAULT_MISSING_RATING)
    }
}

impl CompetitorAggregator {
    /// Create an aggregator keeping `limit` entries and ranking unrated apps at `missing_rating`
    pub fn new(limit: usize, missing_rating: f64) -> Self {
        Self {
            limit,
            missing_rating,
        }
    }

    /// Maximum number of competitors kept
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Deduplicate, rank and truncate
    pub fn aggregate<I>(&self, candidates: I) -> Vec<AppRecord>
    where
        I: IntoIterator<Item = AppRecord>,
    {
        let mut ranked = dedup_by_id(candidates);
        // sort_by is stable, so exact ties keep insertion order
        ranked.sort_by(|a, b| self.compare(b, a));
        ranked.truncate(self.limit);
        ranked
    }

    /// Ascending comparison on (rating, rating_count)
    fn compare(&self, a: &AppRecord, b: &AppRecord) -> Ordering {
        a.rating_or(self.missing_rating)
            .total_cmp(&b.rating_or(self.missing_rating))
            .then(a.rating_count.cmp(&b.rating_count))
    }
}

/// Keep the first record seen for each id, preserving order
pub fn dedup_by_id<I>(candidates: I) -> Vec<AppRecord>
where
    I: IntoIterator<Item = AppRecord>,
{
    let mut seen: HashSet<AppId> = HashSet::new();
    candidates
        .into_iter()
        .filter(|app| match app.numeric_id {
            Some(id) => seen.insert(id),
            None => false,
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn candidate() -> impl Strategy<Value = AppRecord> {
        (0u64..30, proptest::option::of(0.0f64..5.0), 0u64..1000).prop_map(|(id, rating, count)| {
            AppRecord {
                numeric_id: Some(AppId(id)),
                rating,
                rating_count: count,
                ..Default::default()
            }
        })
    }

    proptest! {
        #[test]
        fn output_ids_are_unique(candidates in proptest::collection::vec(candidate(), 0..60)) {
            let result = CompetitorAggregator::default().aggregate(candidates);
            let ids: HashSet<AppId> = result.iter().filter_map(|a| a.numeric_id).collect();
            prop_assert_eq!(ids.len(), result.len());
            prop_assert!(result.len() <= DEFAULT_COMPETITOR_LIMIT);
        }

        #[test]
        fn output_is_sorted_descending(candidates in proptest::collection::vec(candidate(), 0..60)) {
            let aggregator = CompetitorAggregator::default();
            let result = aggregator.aggregate(candidates);
            for pair in result.windows(2) {
                prop_assert_ne!(aggregator.compare(&pair[0], &pair[1]), Ordering::Less);
            }
        }

        #[test]
        fn kept_records_are_first_occurrences(candidates in proptest::collection::vec(candidate(), 0..60)) {
            let result = CompetitorAggregator::default().aggregate(candidates.clone());
            for kept in &result {
                let first = candidates
                    .iter()
                    .find(|c| c.numeric_id == kept.numeric_id)
                    .unwrap();
                prop_assert_eq!(first, kept);
            }
        }
    }
}
