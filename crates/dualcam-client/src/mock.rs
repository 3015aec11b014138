//! Mock collaborators for deterministic testing
//!
//! These return pre-configured outcomes without any network calls and record
//! every call so tests can assert on request order.

use dualcam_domain::traits::{AppStore, DiscussionSource};
use dualcam_domain::{AppId, AppRecord, DiscussionPost, FetchOutcome, ReviewRecord};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Mock app store
///
/// Unknown search terms return an empty, successful result; unknown review
/// pages return an empty page.
///
/// # Examples
///
/// ```
/// use dualcam_client::MockAppStore;
/// use dualcam_domain::{AppId, ReviewRecord};
///
/// let mut store = MockAppStore::default();
/// store.add_review_page(AppId(7), 1, vec![ReviewRecord::new("5", "Great", "Love it")]);
/// store.add_search_error("broken query", "HTTP 503");
/// assert_eq!(store.call_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockAppStore {
    searches: HashMap<String, FetchOutcome<Vec<AppRecord>>>,
    lookups: HashMap<AppId, FetchOutcome<Option<AppRecord>>>,
    reviews: HashMap<(AppId, u32), FetchOutcome<Vec<ReviewRecord>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAppStore {
    /// Add search results for a term
    pub fn add_search(&mut self, term: impl Into<String>, apps: Vec<AppRecord>) {
        self.searches.insert(term.into(), FetchOutcome::Fetched(apps));
    }

    /// Make a search term fail
    pub fn add_search_error(&mut self, term: impl Into<String>, reason: impl Into<String>) {
        self.searches.insert(term.into(), FetchOutcome::failed(reason));
    }

    /// Add a lookup result
    pub fn add_lookup(&mut self, app: AppRecord) {
        if let Some(id) = app.numeric_id {
            self.lookups.insert(id, FetchOutcome::Fetched(Some(app)));
        }
    }

    /// Add one page of reviews
    pub fn add_review_page(&mut self, id: AppId, page: u32, reviews: Vec<ReviewRecord>) {
        self.reviews.insert((id, page), FetchOutcome::Fetched(reviews));
    }

    /// Make a review page fail
    pub fn add_review_error(&mut self, id: AppId, page: u32, reason: impl Into<String>) {
        self.reviews.insert((id, page), FetchOutcome::failed(reason));
    }

    /// Calls made so far, as "search:<term>", "lookup:<id>", "reviews:<id>:<page>"
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    /// Number of calls made so far
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    fn record(&self, call: String) {
        lock(&self.calls).push(call);
    }
}

impl AppStore for MockAppStore {
    async fn search_apps(&self, term: &str) -> FetchOutcome<Vec<AppRecord>> {
        self.record(format!("search:{}", term));
        self.searches
            .get(term)
            .cloned()
            .unwrap_or(FetchOutcome::Fetched(Vec::new()))
    }

    async fn lookup_app(&self, id: AppId) -> FetchOutcome<Option<AppRecord>> {
        self.record(format!("lookup:{}", id));
        self.lookups
            .get(&id)
            .cloned()
            .unwrap_or(FetchOutcome::Fetched(None))
    }

    async fn review_page(&self, id: AppId, page: u32) -> FetchOutcome<Vec<ReviewRecord>> {
        self.record(format!("reviews:{}:{}", id, page));
        self.reviews
            .get(&(id, page))
            .cloned()
            .unwrap_or(FetchOutcome::Fetched(Vec::new()))
    }
}

/// Mock discussion source
#[derive(Debug, Clone, Default)]
pub struct MockDiscussions {
    results: HashMap<String, FetchOutcome<Vec<DiscussionPost>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockDiscussions {
    /// Add posts for a query
    pub fn add_posts(&mut self, query: impl Into<String>, posts: Vec<DiscussionPost>) {
        self.results.insert(query.into(), FetchOutcome::Fetched(posts));
    }

    /// Make a query fail
    pub fn add_error(&mut self, query: impl Into<String>, reason: impl Into<String>) {
        self.results.insert(query.into(), FetchOutcome::failed(reason));
    }

    /// Queries searched so far, in order
    pub fn queries(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}

impl DiscussionSource for MockDiscussions {
    async fn search_posts(&self, query: &str) -> FetchOutcome<Vec<DiscussionPost>> {
        lock(&self.calls).push(query.to_string());
        self.results
            .get(query)
            .cloned()
            .unwrap_or(FetchOutcome::Fetched(Vec::new()))
    }
}
