//! Configuration for the research pipelines
//!
//! Every value has a compiled-in default, so both binaries run with no
//! arguments. A TOML file can override any subset of fields.
//!
//! # Examples
//!
//! ```
//! use dualcam_research::ResearchConfig;
//!
//! let config = ResearchConfig::default();
//! assert_eq!(config.enricher.review_pages, 5);
//! assert_eq!(config.collector.competitor_queries.len(), 4);
//!
//! let config = ResearchConfig::from_toml(r#"
//!     [enricher]
//!     review_pages = 2
//! "#).unwrap();
//! assert_eq!(config.enricher.review_pages, 2);
//! assert_eq!(config.enricher.bucket_limit, 10);
//! ```

use crate::error::{ResearchError, Result};
use dualcam_client::ClientConfig;
use dualcam_domain::ClassifierRules;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory name under the home directory holding the snapshots
pub const DEFAULT_DATA_DIR_NAME: &str = ".research_files";

/// Collector output / enricher input
pub const DEFAULT_SNAPSHOT_FILE: &str = "app_store_data.json";

/// Enricher output
pub const DEFAULT_ENRICHED_FILE: &str = "comprehensive_research.json";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchConfig {
    /// Fixed research date; today's date when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_date: Option<String>,

    /// API client settings
    pub client: ClientConfig,

    /// Collector settings
    pub collector: CollectorConfig,

    /// Enricher settings
    pub enricher: EnricherConfig,

    /// Review classification rules
    pub classifier: ClassifierRules,

    /// Snapshot locations
    pub paths: PathsConfig,
}

/// Collector pipeline settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Search term used to find the target app
    pub target_query: String,

    /// Case-insensitive name fragment identifying the target in results
    pub target_marker: String,

    /// Lookup fallback when the search does not surface the target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_app_id: Option<u64>,

    /// Competitor search terms, run in order
    pub competitor_queries: Vec<String>,

    /// Discussion search terms, run in order
    pub discussion_queries: Vec<String>,

    /// Competitors kept after ranking
    pub competitor_limit: usize,

    /// Rating assumed for unrated competitors when ranking
    pub missing_rating: f64,

    /// Description characters kept for the target app
    pub target_description_chars: usize,

    /// Description characters kept for competitors
    pub competitor_description_chars: usize,

    /// Pause after each competitor search (milliseconds)
    pub search_delay_ms: u64,

    /// Pause after each discussion search (milliseconds)
    pub discussion_delay_ms: u64,

    /// Posts logged per discussion query
    pub discussion_posts_shown: usize,

    /// Title characters logged per post
    pub discussion_title_chars: usize,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            target_query: "mixcam dual camera".to_string(),
            target_marker: "mixcam".to_string(),
            target_app_id: None,
            competitor_queries: vec![
                "dual camera recording".to_string(),
                "front back camera simultaneous".to_string(),
                "double camera video".to_string(),
                "multicam recording iOS".to_string(),
            ],
            discussion_queries: vec![
                "dual camera app iOS 2025".to_string(),
                "mixcam app review".to_string(),
                "best dual camera recording app".to_string(),
            ],
            competitor_limit: 10,
            missing_rating: 0.0,
            target_description_chars: 500,
            competitor_description_chars: 200,
            search_delay_ms: 500,
            discussion_delay_ms: 1000,
            discussion_posts_shown: 3,
            discussion_title_chars: 80,
        }
    }
}

impl CollectorConfig {
    /// Pause after each competitor search
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    /// Pause after each discussion search
    pub fn discussion_delay(&self) -> Duration {
        Duration::from_millis(self.discussion_delay_ms)
    }
}

/// Enricher pipeline settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnricherConfig {
    /// Review pages fetched for the target app
    pub review_pages: u32,

    /// Pause after each review page (milliseconds)
    pub page_delay_ms: u64,

    /// Entries kept per review bucket
    pub bucket_limit: usize,

    /// Leading competitors checked for dual-camera markers
    pub spotlight_window: usize,

    /// Name fragments marking a dual-camera competitor (case-sensitive)
    pub spotlight_markers: Vec<String>,
}

impl Default for EnricherConfig {
    fn default() -> Self {
        Self {
            review_pages: 5,
            page_delay_ms: 500,
            bucket_limit: 10,
            spotlight_window: 5,
            spotlight_markers: vec!["Dual".to_string(), "2Cam".to_string(), "Fotee".to_string()],
        }
    }
}

impl EnricherConfig {
    /// Pause after each review page
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }
}

/// Snapshot file locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding both snapshots; `~/.research_files` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Collector output file name
    pub snapshot_file: String,

    /// Enricher output file name
    pub enriched_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            snapshot_file: DEFAULT_SNAPSHOT_FILE.to_string(),
            enriched_file: DEFAULT_ENRICHED_FILE.to_string(),
        }
    }
}

impl PathsConfig {
    /// Resolved data directory
    ///
    /// Falls back to a relative `.research_files` if no home directory exists.
    pub fn data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::home_dir()
                .unwrap_or_default()
                .join(DEFAULT_DATA_DIR_NAME),
        }
    }

    /// Collector output / enricher input
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir().join(&self.snapshot_file)
    }

    /// Enricher output
    pub fn enriched_path(&self) -> PathBuf {
        self.data_dir().join(&self.enriched_file)
    }
}

impl ResearchConfig {
    /// Load configuration from a TOML file and validate it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string and validate it
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: ResearchConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the compiled-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ResearchError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Research date to stamp on a new document
    pub fn research_date(&self) -> String {
        self.research_date
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format("%B %-d, %Y").to_string())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.client.validate().map_err(ResearchError::Config)?;

        if self.collector.target_query.trim().is_empty() {
            return Err(ResearchError::Config("collector.target_query must not be empty".into()));
        }
        if self.collector.competitor_queries.is_empty() {
            return Err(ResearchError::Config(
                "collector.competitor_queries must not be empty".into(),
            ));
        }
        if self.collector.competitor_limit == 0 {
            return Err(ResearchError::Config(
                "collector.competitor_limit must be greater than 0".into(),
            ));
        }
        if self.enricher.review_pages == 0 {
            return Err(ResearchError::Config(
                "enricher.review_pages must be greater than 0".into(),
            ));
        }
        if self.enricher.bucket_limit == 0 {
            return Err(ResearchError::Config(
                "enricher.bucket_limit must be greater than 0".into(),
            ));
        }
        if self.classifier.snippet_chars == 0 {
            return Err(ResearchError::Config(
                "classifier.snippet_chars must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ResearchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.collector.target_query, "mixcam dual camera");
        assert_eq!(config.collector.competitor_limit, 10);
        assert_eq!(config.collector.search_delay(), Duration::from_millis(500));
        assert_eq!(config.collector.discussion_delay(), Duration::from_secs(1));
        assert_eq!(config.enricher.page_delay(), Duration::from_millis(500));
        assert_eq!(config.client.timeout_secs, 10);
    }

    #[test]
    fn test_default_paths() {
        let paths = PathsConfig::default();
        assert!(paths.snapshot_path().ends_with(".research_files/app_store_data.json"));
        assert!(paths.enriched_path().ends_with(".research_files/comprehensive_research.json"));
    }

    #[test]
    fn test_custom_data_dir() {
        let paths = PathsConfig {
            data_dir: Some(PathBuf::from("/tmp/dualcam")),
            ..Default::default()
        };
        assert_eq!(paths.snapshot_path(), PathBuf::from("/tmp/dualcam/app_store_data.json"));
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            research_date = "October 24, 2025"

            [client]
            country = "GB"
            timeout_secs = 5

            [collector]
            competitor_queries = ["pip camera"]
            target_app_id = 1478000000
            search_delay_ms = 0

            [classifier]
            fallback_rating = 1

            [paths]
            data_dir = "/var/lib/dualcam"
        "#;

        let config = ResearchConfig::from_toml(toml).unwrap();
        assert_eq!(config.research_date(), "October 24, 2025");
        assert_eq!(config.client.country, "GB");
        assert_eq!(config.client.timeout_secs, 5);
        assert_eq!(config.client.storefront, "us");
        assert_eq!(config.collector.competitor_queries, vec!["pip camera"]);
        assert_eq!(config.collector.target_app_id, Some(1_478_000_000));
        assert_eq!(config.collector.discussion_queries.len(), 3);
        assert_eq!(config.classifier.fallback_rating, 1);
        assert_eq!(config.classifier.snippet_chars, 200);
        assert_eq!(config.paths.data_dir(), PathBuf::from("/var/lib/dualcam"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(ResearchConfig::from_toml("[enricher]\nreview_pages = 0").is_err());
        assert!(ResearchConfig::from_toml("[enricher]\nbucket_limit = 0").is_err());
        assert!(ResearchConfig::from_toml("[collector]\ncompetitor_queries = []").is_err());
        assert!(ResearchConfig::from_toml("[client]\ntimeout_secs = 0").is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = ResearchConfig::from_toml("[collector\nbroken");
        assert!(matches!(result, Err(ResearchError::Toml(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ResearchConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ResearchConfig::from_toml(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = ResearchConfig::load(None).unwrap();
        assert_eq!(config, ResearchConfig::default());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = ResearchConfig::load(Some(Path::new("/nonexistent/dualcam.toml")));
        assert!(matches!(result, Err(ResearchError::ConfigRead(_))));
    }

    #[test]
    fn test_generated_research_date() {
        let date = ResearchConfig::default().research_date();
        assert!(!date.is_empty());
        assert!(date.contains(", "));
    }
}
