//! Dualcam API Client Layer
//!
//! Implementations of the collaborator traits from `dualcam-domain`.
//!
//! # Clients
//!
//! - `StoreClient`: app-store search, lookup and customer-reviews feed
//! - `DiscussionClient`: discussion-forum search
//! - `MockAppStore` / `MockDiscussions`: canned responses for testing
//!
//! Every request is a single GET with a fixed timeout. There is no retry:
//! a failed request is logged and surfaces as
//! [`FetchOutcome::Failed`](dualcam_domain::FetchOutcome::Failed).
//!
//! # Examples
//!
//! ```
//! use dualcam_client::MockAppStore;
//! use dualcam_domain::traits::AppStore;
//! use dualcam_domain::{AppId, AppRecord};
//!
//! # async fn example() {
//! let mut store = MockAppStore::default();
//! store.add_search("dual camera", vec![AppRecord {
//!     numeric_id: Some(AppId(1)),
//!     ..Default::default()
//! }]);
//!
//! let apps = store.search_apps("dual camera").await.unwrap_or_empty();
//! assert_eq!(apps.len(), 1);
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod discussion;
mod http;
pub mod mock;
pub mod parse;
pub mod store;

use thiserror::Error;

pub use config::ClientConfig;
pub use discussion::DiscussionClient;
pub use mock::{MockAppStore, MockDiscussions};
pub use store::StoreClient;

/// Errors that can occur while talking to an external API
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network, DNS, TLS or timeout failure
    #[error("Request failed: {0}")]
    Transport(String),

    /// The API answered with something other than 200 OK
    #[error("HTTP {status} from {url}")]
    Status {
        /// Response status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The body was not the JSON we expected
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The HTTP client could not be constructed
    #[error("Client setup failed: {0}")]
    Setup(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::InvalidResponse(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::InvalidResponse(format!("JSON parse error: {}", e))
    }
}
