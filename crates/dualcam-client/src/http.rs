//! Thin JSON-over-GET wrapper around reqwest

use crate::config::ClientConfig;
use crate::ClientError;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

/// Shared HTTP plumbing: one reqwest client with the configured timeout
#[derive(Debug, Clone)]
pub(crate) struct JsonHttp {
    client: reqwest::Client,
}

impl JsonHttp {
    pub(crate) fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;

        Ok(Self { client })
    }

    /// Start a GET request
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url)
    }

    /// Send a request and parse the body as JSON
    ///
    /// Anything but 200 OK is an error, matching how the APIs signal data.
    pub(crate) async fn send_json(&self, request: reqwest::RequestBuilder) -> Result<Value, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        debug!(%url, status = status.as_u16(), "response received");

        if status != StatusCode::OK {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
