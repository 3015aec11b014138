//! Endpoint and request settings for the API clients

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default app-store API base URL
pub const DEFAULT_STORE_BASE_URL: &str = "https://itunes.apple.com";

/// Default discussion API base URL
pub const DEFAULT_DISCUSSION_BASE_URL: &str = "https://www.reddit.com";

/// Default request timeout (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Identifying header sent to the discussion API
pub const DEFAULT_USER_AGENT: &str = "DualCameraResearch/1.0";

/// Settings shared by the API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// App-store API base URL (search, lookup and reviews feed)
    pub store_base_url: String,

    /// Discussion API base URL
    pub discussion_base_url: String,

    /// Country code for search and lookup, e.g. "US"
    pub country: String,

    /// Storefront path segment for the reviews feed, e.g. "us"
    pub storefront: String,

    /// Search entity type
    pub entity: String,

    /// Maximum results per search
    pub search_limit: u32,

    /// Maximum posts per discussion search
    pub discussion_limit: u32,

    /// Discussion result ordering
    pub discussion_sort: String,

    /// Discussion time window
    pub discussion_window: String,

    /// User-Agent header for the discussion API
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            store_base_url: DEFAULT_STORE_BASE_URL.to_string(),
            discussion_base_url: DEFAULT_DISCUSSION_BASE_URL.to_string(),
            country: "US".to_string(),
            storefront: "us".to_string(),
            entity: "software".to_string(),
            search_limit: 25,
            discussion_limit: 10,
            discussion_sort: "relevance".to_string(),
            discussion_window: "year".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Point both clients at one base URL (used against local mock servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.store_base_url = base_url.clone();
        self.discussion_base_url = base_url;
        self
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.search_limit == 0 {
            return Err("search_limit must be greater than 0".to_string());
        }
        if self.store_base_url.is_empty() || self.discussion_base_url.is_empty() {
            return Err("base URLs must not be empty".to_string());
        }
        Ok(())
    }

    pub(crate) fn store_url(&self, path: &str) -> String {
        format!("{}/{}", self.store_base_url.trim_end_matches('/'), path)
    }

    pub(crate) fn discussion_url(&self, path: &str) -> String {
        format!("{}/{}", self.discussion_base_url.trim_end_matches('/'), path)
    }
}
