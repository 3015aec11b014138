//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the research pipelines and the
//! network. Implementations live in the infrastructure layer (dualcam-client).
//!
//! Failures are reported through [`FetchOutcome`], never as errors: a failed
//! request is logged where it happens and the pipeline carries on.

// The pipelines are generic over these traits and never need `dyn` or `Send`
#![allow(async_fn_in_trait)]

use crate::app::{AppId, AppRecord};
use crate::outcome::FetchOutcome;
use crate::review::{DiscussionPost, ReviewRecord};

/// App-store search, lookup and reviews feed
///
/// Implemented by the infrastructure layer (dualcam-client)
pub trait AppStore {
    /// Search apps by free-text term
    async fn search_apps(&self, term: &str) -> FetchOutcome<Vec<AppRecord>>;

    /// Look up a single app by id
    async fn lookup_app(&self, id: AppId) -> FetchOutcome<Option<AppRecord>>;

    /// Fetch one page (1-based) of the most recent reviews for an app
    async fn review_page(&self, id: AppId, page: u32) -> FetchOutcome<Vec<ReviewRecord>>;
}

/// Discussion-forum search
///
/// Implemented by the infrastructure layer (dualcam-client)
pub trait DiscussionSource {
    /// Search posts by free-text query
    async fn search_posts(&self, query: &str) -> FetchOutcome<Vec<DiscussionPost>>;
}
