//! App-store client: search, lookup and the customer-reviews feed
//!
//! # Examples
//!
//! ```no_run
//! use dualcam_client::{ClientConfig, StoreClient};
//!
//! # async fn example() -> Result<(), dualcam_client::ClientError> {
//! let client = StoreClient::new(ClientConfig::default())?;
//! let apps = client.search("dual camera recording").await?;
//! println!("{} apps", apps.len());
//! # Ok(())
//! # }
//! ```

use crate::config::ClientConfig;
use crate::http::JsonHttp;
use crate::parse::{parse_app_results, parse_review_feed};
use crate::ClientError;
use dualcam_domain::traits::AppStore;
use dualcam_domain::{AppId, AppRecord, FetchOutcome, ReviewRecord};
use tracing::{debug, warn};

/// App-store API client
#[derive(Debug, Clone)]
pub struct StoreClient {
    config: ClientConfig,
    http: JsonHttp,
}

impl StoreClient {
    /// Create a client from its configuration
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Setup` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = JsonHttp::new(&config)?;
        Ok(Self { config, http })
    }

    /// Search apps by term
    pub async fn search(&self, term: &str) -> Result<Vec<AppRecord>, ClientError> {
        let limit = self.config.search_limit.to_string();
        let request = self.http.get(&self.config.store_url("search")).query(&[
            ("term", term),
            ("country", self.config.country.as_str()),
            ("entity", self.config.entity.as_str()),
            ("limit", limit.as_str()),
        ]);

        let body = self.http.send_json(request).await?;
        let apps = parse_app_results(&body);
        debug!(term, count = apps.len(), "search complete");
        Ok(apps)
    }

    /// Look up one app by id
    pub async fn lookup(&self, id: AppId) -> Result<Option<AppRecord>, ClientError> {
        let id = id.to_string();
        let request = self
            .http
            .get(&self.config.store_url("lookup"))
            .query(&[("id", id.as_str()), ("country", self.config.country.as_str())]);

        let body = self.http.send_json(request).await?;
        Ok(parse_app_results(&body).into_iter().next())
    }

    /// Fetch one page of the most recent reviews
    pub async fn reviews(&self, id: AppId, page: u32) -> Result<Vec<ReviewRecord>, ClientError> {
        let path = format!(
            "{}/rss/customerreviews/id={}/sortby=mostrecent/page={}/json",
            self.config.storefront, id, page
        );
        let request = self.http.get(&self.config.store_url(&path));

        let body = self.http.send_json(request).await?;
        Ok(parse_review_feed(&body))
    }
}

impl AppStore for StoreClient {
    async fn search_apps(&self, term: &str) -> FetchOutcome<Vec<AppRecord>> {
        let outcome = FetchOutcome::from(self.search(term).await);
        if let Some(reason) = outcome.failure_reason() {
            warn!(term, "App Store search error: {}", reason);
        }
        outcome
    }

    async fn lookup_app(&self, id: AppId) -> FetchOutcome<Option<AppRecord>> {
        let outcome = FetchOutcome::from(self.lookup(id).await);
        if let Some(reason) = outcome.failure_reason() {
            warn!(%id, "App details error: {}", reason);
        }
        outcome
    }

    async fn review_page(&self, id: AppId, page: u32) -> FetchOutcome<Vec<ReviewRecord>> {
        let outcome = FetchOutcome::from(self.reviews(id, page).await);
        if let Some(reason) = outcome.failure_reason() {
            warn!(%id, page, "Error fetching reviews: {}", reason);
        }
        outcome
    }
}
