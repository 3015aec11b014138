//! The research snapshot written by each pipeline stage

use crate::app::{AppId, AppRecord};
use crate::review::ReviewAnalysis;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Taxonomy keys the collector seeds with empty lists
pub const SEEDED_INSIGHT_KEYS: &[&str] = &[
    "standard_features",
    "innovative_features",
    "user_complaints",
    "pricing_models",
    "ui_trends",
];

/// The app whose reviews are analysed, plus its analysis once enriched
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetApp {
    /// Store record
    #[serde(flatten)]
    pub app: AppRecord,

    /// Review analysis, absent until the enricher runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_analysis: Option<ReviewAnalysis>,
}

impl From<AppRecord> for TargetApp {
    fn from(app: AppRecord) -> Self {
        Self {
            app,
            review_analysis: None,
        }
    }
}

/// Snapshot of one research run
///
/// Created by the collector, loaded and extended by the enricher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchDocument {
    /// Human-readable date of the run, e.g. "October 24, 2025"
    pub research_date: String,

    /// Target app, absent if the collector could not find it
    #[serde(default)]
    pub target_app: Option<TargetApp>,

    /// Ranked competitors (unique ids, bounded length)
    #[serde(default)]
    pub competitors: Vec<AppRecord>,

    /// Taxonomy name to taxonomy content
    #[serde(default)]
    pub market_insights: BTreeMap<String, Value>,
}

impl ResearchDocument {
    /// Create an empty document with the seeded insight keys
    pub fn new(research_date: impl Into<String>) -> Self {
        let market_insights = SEEDED_INSIGHT_KEYS
            .iter()
            .map(|key| (key.to_string(), Value::Array(Vec::new())))
            .collect();

        Self {
            research_date: research_date.into(),
            target_app: None,
            competitors: Vec::new(),
            market_insights,
        }
    }

    /// Identifier of the target app, if known
    pub fn target_id(&self) -> Option<AppId> {
        self.target_app.as_ref().and_then(|t| t.app.numeric_id)
    }

    /// Insert or replace a taxonomy
    pub fn set_insight(&mut self, name: impl Into<String>, content: Value) {
        self.market_insights.insert(name.into(), content);
    }
}
