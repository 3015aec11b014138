//! Enricher pipeline: review analysis, competitor spotlight, catalog merge

use crate::catalog;
use crate::config::EnricherConfig;
use crate::error::{ResearchError, Result};
use crate::pause;
use crate::stats::{RequestKind, RunStats};
use dualcam_domain::traits::AppStore;
use dualcam_domain::{AppId, AppRecord, ClassifierRules, ResearchDocument, ReviewClassifier, ReviewRecord};
use tracing::{debug, info};

/// Enricher pipeline
///
/// Takes the collector's snapshot, classifies the target's recent reviews
/// and fills in the reference taxonomies.
pub struct Enricher<S> {
    store: S,
    config: EnricherConfig,
    classifier: ReviewClassifier,
    stats: RunStats,
}

impl<S: AppStore> Enricher<S> {
    /// Create an enricher over the given store
    pub fn new(store: S, config: EnricherConfig, rules: ClassifierRules) -> Self {
        Self {
            store,
            config,
            classifier: ReviewClassifier::new(rules),
            stats: RunStats::new(),
        }
    }

    /// Requests made so far
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Enrich a snapshot
    ///
    /// Fails with [`ResearchError::MissingTargetApp`] before any request when
    /// the snapshot has no target identifier.
    pub async fn run(&mut self, mut doc: ResearchDocument) -> Result<ResearchDocument> {
        let id = doc.target_id().ok_or(ResearchError::MissingTargetApp)?;
        info!("Enriching research from {} (target {})", doc.research_date, id);

        let reviews = self.fetch_reviews(id).await;
        let analysis = self.classifier.analyze(&reviews, self.config.bucket_limit);
        info!(
            "Analyzed {} reviews: {} complaints, {} feature requests, {} positive mentions",
            analysis.total_reviews_analyzed,
            analysis.bucket_totals.complaints,
            analysis.bucket_totals.feature_requests,
            analysis.bucket_totals.positive_mentions
        );

        let spotlight = self.spotlight(&doc.competitors);
        if spotlight.is_empty() {
            info!("No dual-camera competitors among the top {}", self.config.spotlight_window);
        }
        for app in spotlight {
            info!(
                "Dual-camera competitor: {} (rating {})",
                app.display_name(),
                app.rating.map_or_else(|| "n/a".to_string(), |r| r.to_string())
            );
        }

        catalog::merge_into(&mut doc)?;

        if let Some(target) = doc.target_app.as_mut() {
            target.review_analysis = Some(analysis);
        }

        info!("{}", self.stats.summary());
        Ok(doc)
    }

    /// Fetch every configured review page in order
    ///
    /// A failed page contributes nothing and paging continues.
    pub async fn fetch_reviews(&mut self, id: AppId) -> Vec<ReviewRecord> {
        let mut reviews = Vec::new();

        for page in 1..=self.config.review_pages {
            let outcome = self.store.review_page(id, page).await;
            self.stats.record(RequestKind::Reviews, &outcome);

            let batch = outcome.unwrap_or_empty();
            debug!("Page {}: {} reviews", page, batch.len());
            reviews.extend(batch);

            pause(self.config.page_delay()).await;
        }

        info!("Fetched {} reviews", reviews.len());
        reviews
    }

    /// Leading competitors whose name carries a dual-camera marker
    pub fn spotlight<'a>(&self, competitors: &'a [AppRecord]) -> Vec<&'a AppRecord> {
        competitors
            .iter()
            .take(self.config.spotlight_window)
            .filter(|app| {
                let name = app.display_name();
                self.config
                    .spotlight_markers
                    .iter()
                    .any(|marker| name.contains(marker.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualcam_client::MockAppStore;
    use dualcam_domain::TargetApp;

    fn quick_config() -> EnricherConfig {
        EnricherConfig {
            page_delay_ms: 0,
            ..Default::default()
        }
    }

    fn named(name: &str) -> AppRecord {
        AppRecord {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn snapshot(id: Option<u64>) -> ResearchDocument {
        let mut doc = ResearchDocument::new("October 24, 2025");
        doc.target_app = Some(TargetApp::from(AppRecord {
            name: Some("MixCam".to_string()),
            numeric_id: id.map(AppId),
            ..Default::default()
        }));
        doc
    }

    #[test]
    fn test_spotlight_window_and_markers() {
        let enricher = Enricher::new(MockAppStore::default(), quick_config(), ClassifierRules::default());
        let competitors = vec![
            named("Dual Camera Pro"),
            named("DoubleTake"),
            named("Fotee CamFusion"),
            named("dual lowercase"),
            named("Plain Camera"),
            named("Dual Beyond Window"),
        ];

        let names: Vec<&str> = enricher
            .spotlight(&competitors)
            .iter()
            .map(|a| a.display_name())
            .collect();
        assert_eq!(names, vec!["Dual Camera Pro", "Fotee CamFusion"]);
    }

    #[tokio::test]
    async fn test_fetch_reviews_skips_failed_page() {
        let mut store = MockAppStore::default();
        store.add_review_page(AppId(5), 1, vec![ReviewRecord::new("5", "a", "b")]);
        store.add_review_error(AppId(5), 2, "HTTP 500");
        store.add_review_page(AppId(5), 3, vec![ReviewRecord::new("1", "c", "d")]);
        let mut enricher = Enricher::new(store.clone(), quick_config(), ClassifierRules::default());

        let reviews = enricher.fetch_reviews(AppId(5)).await;
        assert_eq!(reviews.len(), 2);
        assert_eq!(store.call_count(), 5);
        assert_eq!(enricher.stats().failed_for(RequestKind::Reviews), 1);
    }

    #[tokio::test]
    async fn test_run_without_target_id_fails() {
        let store = MockAppStore::default();
        let mut enricher = Enricher::new(store.clone(), quick_config(), ClassifierRules::default());

        let result = enricher.run(snapshot(None)).await;
        assert!(matches!(result, Err(ResearchError::MissingTargetApp)));
        assert_eq!(store.call_count(), 0);

        let result = enricher.run(ResearchDocument::new("today")).await;
        assert!(matches!(result, Err(ResearchError::MissingTargetApp)));
    }

    #[tokio::test]
    async fn test_run_attaches_analysis_and_catalog() {
        let mut store = MockAppStore::default();
        store.add_review_page(
            AppId(8),
            1,
            vec![
                ReviewRecord::new("2", "Crashes", "Crashes every time I record"),
                ReviewRecord::new("5", "Great", "I love the layouts but I wish it had 4K"),
            ],
        );
        let mut enricher = Enricher::new(store, quick_config(), ClassifierRules::default());

        let doc = enricher.run(snapshot(Some(8))).await.unwrap();
        let analysis = doc.target_app.as_ref().unwrap().review_analysis.as_ref().unwrap();
        assert_eq!(analysis.total_reviews_analyzed, 2);
        assert_eq!(analysis.complaints.len(), 1);
        assert_eq!(analysis.feature_requests.len(), 1);
        assert_eq!(analysis.positive_mentions.len(), 1);
        assert!(doc.market_insights[catalog::PRICING_MODELS].is_object());
    }
}
