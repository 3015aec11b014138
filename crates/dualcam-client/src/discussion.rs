//! Discussion-forum search client

use crate::config::ClientConfig;
use crate::http::JsonHttp;
use crate::parse::parse_discussion_listing;
use crate::ClientError;
use dualcam_domain::traits::DiscussionSource;
use dualcam_domain::{DiscussionPost, FetchOutcome};
use reqwest::header::USER_AGENT;
use tracing::warn;

/// Discussion search API client
///
/// Sends the configured identifying `User-Agent` with every request; the API
/// rejects anonymous default agents.
#[derive(Debug, Clone)]
pub struct DiscussionClient {
    config: ClientConfig,
    http: JsonHttp,
}

impl DiscussionClient {
    /// Create a client from its configuration
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = JsonHttp::new(&config)?;
        Ok(Self { config, http })
    }

    /// Search posts
    pub async fn search(&self, query: &str) -> Result<Vec<DiscussionPost>, ClientError> {
        let limit = self.config.discussion_limit.to_string();
        let request = self
            .http
            .get(&self.config.discussion_url("search.json"))
            .header(USER_AGENT, self.config.user_agent.as_str())
            .query(&[
                ("q", query),
                ("limit", limit.as_str()),
                ("sort", self.config.discussion_sort.as_str()),
                ("t", self.config.discussion_window.as_str()),
            ]);

        let body = self.http.send_json(request).await?;
        Ok(parse_discussion_listing(&body))
    }
}

impl DiscussionSource for DiscussionClient {
    async fn search_posts(&self, query: &str) -> FetchOutcome<Vec<DiscussionPost>> {
        let outcome = FetchOutcome::from(self.search(query).await);
        if let Some(reason) = outcome.failure_reason() {
            warn!(query, "Discussion search error: {}", reason);
        }
        outcome
    }
}
