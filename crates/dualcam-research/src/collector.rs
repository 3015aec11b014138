//! Collector pipeline: target discovery, competitor ranking, discussion survey
//!
//! Every request runs in sequence with a fixed pause after it. A failed
//! request is logged by the client, counted here, and treated as empty.

use crate::config::CollectorConfig;
use crate::pause;
use crate::stats::{RequestKind, RunStats};
use dualcam_domain::text::truncate_chars;
use dualcam_domain::traits::{AppStore, DiscussionSource};
use dualcam_domain::{AppId, AppRecord, CompetitorAggregator, ResearchDocument, TargetApp};
use std::collections::HashSet;
use tracing::{debug, info};

/// Collector pipeline
///
/// # Examples
///
/// ```
/// use dualcam_client::{MockAppStore, MockDiscussions};
/// use dualcam_research::{CollectorConfig, Collector};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let config = CollectorConfig {
///     search_delay_ms: 0,
///     discussion_delay_ms: 0,
///     ..Default::default()
/// };
/// let mut collector = Collector::new(MockAppStore::default(), MockDiscussions::default(), config);
///
/// let doc = collector.run("October 24, 2025").await;
/// assert!(doc.target_app.is_none());
/// assert!(doc.competitors.is_empty());
/// # });
/// ```
pub struct Collector<S, D> {
    store: S,
    discussions: D,
    config: CollectorConfig,
    aggregator: CompetitorAggregator,
    stats: RunStats,
}

impl<S: AppStore, D: DiscussionSource> Collector<S, D> {
    /// Create a collector over the given collaborators
    pub fn new(store: S, discussions: D, config: CollectorConfig) -> Self {
        let aggregator = CompetitorAggregator::new(config.competitor_limit, config.missing_rating);
        Self {
            store,
            discussions,
            config,
            aggregator,
            stats: RunStats::new(),
        }
    }

    /// Requests made so far
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Run the whole pipeline and return the new snapshot
    pub async fn run(&mut self, research_date: impl Into<String>) -> ResearchDocument {
        let mut doc = ResearchDocument::new(research_date);
        info!("Starting collection for {}", doc.research_date);

        doc.target_app = self.find_target().await.map(TargetApp::from);

        let candidates = self.collect_candidates().await;
        doc.competitors = self.aggregator.aggregate(candidates);
        info!(
            "Ranked {} competitors (limit {})",
            doc.competitors.len(),
            self.aggregator.limit()
        );

        self.survey_discussions().await;

        info!("{}", self.stats.summary());
        doc
    }

    /// Search for the target app, falling back to a lookup by id
    pub async fn find_target(&mut self) -> Option<AppRecord> {
        info!("Searching for target app: {}", self.config.target_query);

        let outcome = self.store.search_apps(&self.config.target_query).await;
        self.stats.record(RequestKind::Search, &outcome);
        let found = outcome
            .unwrap_or_empty()
            .into_iter()
            .find(|app| app.name_contains(&self.config.target_marker));

        let found = match (found, self.config.target_app_id) {
            (Some(app), _) => Some(app),
            (None, Some(id)) => {
                debug!("Target not in search results, looking up id {}", id);
                let outcome = self.store.lookup_app(AppId(id)).await;
                self.stats.record(RequestKind::Lookup, &outcome);
                outcome.unwrap_or_empty()
            }
            (None, None) => None,
        };

        match found {
            Some(app) => {
                info!(
                    "Found target: {} by {} (rating {}, {} ratings)",
                    app.display_name(),
                    app.developer.as_deref().unwrap_or("unknown developer"),
                    app.rating.map_or_else(|| "n/a".to_string(), |r| r.to_string()),
                    app.rating_count
                );
                Some(app.with_description_cap(self.config.target_description_chars))
            }
            None => {
                info!("Target app not found");
                None
            }
        }
    }

    /// Run every competitor query and gather all results, duplicates included
    pub async fn collect_candidates(&mut self) -> Vec<AppRecord> {
        let mut candidates = Vec::new();
        let mut seen: HashSet<AppId> = HashSet::new();

        for query in &self.config.competitor_queries {
            info!("Searching competitors: {}", query);
            let outcome = self.store.search_apps(query).await;
            self.stats.record(RequestKind::Search, &outcome);

            for app in outcome.unwrap_or_empty() {
                let app = app.with_description_cap(self.config.competitor_description_chars);
                if let Some(id) = app.numeric_id {
                    if seen.insert(id) {
                        info!(
                            "  {} ({})",
                            app.display_name(),
                            app.formatted_price.as_deref().unwrap_or("price unknown")
                        );
                    }
                }
                candidates.push(app);
            }

            pause(self.config.search_delay()).await;
        }

        debug!("Collected {} candidate records", candidates.len());
        candidates
    }

    /// Search discussions and log a few titles per query
    ///
    /// Returns the number of posts seen. Nothing is kept.
    pub async fn survey_discussions(&mut self) -> usize {
        let mut total = 0;

        for query in &self.config.discussion_queries {
            info!("Searching discussions: {}", query);
            let outcome = self.discussions.search_posts(query).await;
            self.stats.record(RequestKind::Discussion, &outcome);

            let posts = outcome.unwrap_or_empty();
            for post in posts.iter().take(self.config.discussion_posts_shown) {
                info!("  - {}", truncate_chars(&post.title, self.config.discussion_title_chars));
            }
            total += posts.len();

            pause(self.config.discussion_delay()).await;
        }

        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualcam_client::{MockAppStore, MockDiscussions};
    use dualcam_domain::DiscussionPost;

    fn quick_config() -> CollectorConfig {
        CollectorConfig {
            search_delay_ms: 0,
            discussion_delay_ms: 0,
            ..Default::default()
        }
    }

    fn app(id: u64, name: &str, rating: Option<f64>, count: u64) -> AppRecord {
        AppRecord {
            numeric_id: Some(AppId(id)),
            name: Some(name.to_string()),
            rating,
            rating_count: count,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_find_target_by_marker() {
        let mut store = MockAppStore::default();
        store.add_search(
            "mixcam dual camera",
            vec![
                app(1, "Dual Camera Pro", Some(4.0), 10),
                AppRecord {
                    description: "x".repeat(800),
                    ..app(2, "MixCam - Dual Camera", Some(4.6), 500)
                },
            ],
        );
        let mut collector = Collector::new(store, MockDiscussions::default(), quick_config());

        let target = collector.find_target().await.unwrap();
        assert_eq!(target.numeric_id, Some(AppId(2)));
        assert_eq!(target.description.chars().count(), 500);
    }

    #[tokio::test]
    async fn test_find_target_falls_back_to_lookup() {
        let mut store = MockAppStore::default();
        store.add_lookup(app(99, "MixCam", None, 0));
        let config = CollectorConfig {
            target_app_id: Some(99),
            ..quick_config()
        };
        let mut collector = Collector::new(store.clone(), MockDiscussions::default(), config);

        let target = collector.find_target().await.unwrap();
        assert_eq!(target.numeric_id, Some(AppId(99)));
        assert_eq!(store.calls(), vec!["search:mixcam dual camera", "lookup:99"]);
        assert_eq!(collector.stats().issued_for(RequestKind::Lookup), 1);
    }

    #[tokio::test]
    async fn test_find_target_missing_without_lookup() {
        let store = MockAppStore::default();
        let mut collector = Collector::new(store.clone(), MockDiscussions::default(), quick_config());

        assert!(collector.find_target().await.is_none());
        assert_eq!(store.call_count(), 1);
    }

    #[tokio::test]
    async fn test_candidates_keep_duplicates_and_cap_descriptions() {
        let mut store = MockAppStore::default();
        store.add_search(
            "dual camera recording",
            vec![AppRecord {
                description: "d".repeat(300),
                ..app(1, "A", Some(4.0), 1)
            }],
        );
        store.add_search("double camera video", vec![app(1, "A again", Some(4.0), 1)]);
        store.add_search_error("multicam recording iOS", "HTTP 503");
        let mut collector = Collector::new(store, MockDiscussions::default(), quick_config());

        let candidates = collector.collect_candidates().await;
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].description.chars().count(), 200);
        assert_eq!(collector.stats().issued_for(RequestKind::Search), 4);
        assert_eq!(collector.stats().failed_for(RequestKind::Search), 1);
    }

    #[tokio::test]
    async fn test_survey_discussions_counts_posts() {
        let mut discussions = MockDiscussions::default();
        discussions.add_posts(
            "mixcam app review",
            (0..5)
                .map(|i| DiscussionPost {
                    title: format!("Post {}", i),
                    selftext: String::new(),
                })
                .collect(),
        );
        discussions.add_error("best dual camera recording app", "HTTP 429");
        let mut collector = Collector::new(MockAppStore::default(), discussions.clone(), quick_config());

        assert_eq!(collector.survey_discussions().await, 5);
        assert_eq!(discussions.queries().len(), 3);
        assert_eq!(collector.stats().failed_for(RequestKind::Discussion), 1);
    }

    #[tokio::test]
    async fn test_run_ranks_competitors() {
        let mut store = MockAppStore::default();
        store.add_search(
            "dual camera recording",
            vec![app(1, "app1", Some(3.5), 100), app(2, "app2", Some(4.8), 50)],
        );
        store.add_search("front back camera simultaneous", vec![app(3, "app3", Some(4.8), 200)]);
        let mut collector = Collector::new(store, MockDiscussions::default(), quick_config());

        let doc = collector.run("October 24, 2025").await;
        let names: Vec<&str> = doc.competitors.iter().map(|a| a.display_name()).collect();
        assert_eq!(names, vec!["app3", "app2", "app1"]);
        assert_eq!(doc.research_date, "October 24, 2025");
        assert_eq!(doc.market_insights.len(), 5);
    }
}
