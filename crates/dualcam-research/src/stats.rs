//! Request counters for one pipeline run

use dualcam_domain::FetchOutcome;
use std::collections::BTreeMap;
use std::fmt;

/// Endpoint a request went to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequestKind {
    /// App search
    Search,
    /// App lookup by id
    Lookup,
    /// Review feed page
    Reviews,
    /// Discussion search
    Discussion,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestKind::Search => "search",
            RequestKind::Lookup => "lookup",
            RequestKind::Reviews => "reviews",
            RequestKind::Discussion => "discussion",
        };
        f.write_str(name)
    }
}

/// Requests issued and failed per endpoint kind
///
/// Failures never stop a pipeline, so this is the only place they add up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    /// Requests issued per kind
    pub issued: BTreeMap<RequestKind, usize>,

    /// Requests that failed per kind
    pub failed: BTreeMap<RequestKind, usize>,
}

impl RunStats {
    /// Create empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one request
    pub fn record<T>(&mut self, kind: RequestKind, outcome: &FetchOutcome<T>) {
        *self.issued.entry(kind).or_insert(0) += 1;
        if outcome.is_failed() {
            *self.failed.entry(kind).or_insert(0) += 1;
        }
    }

    /// Requests issued for one kind
    pub fn issued_for(&self, kind: RequestKind) -> usize {
        self.issued.get(&kind).copied().unwrap_or(0)
    }

    /// Failed requests for one kind
    pub fn failed_for(&self, kind: RequestKind) -> usize {
        self.failed.get(&kind).copied().unwrap_or(0)
    }

    /// Total requests issued
    pub fn total_issued(&self) -> usize {
        self.issued.values().sum()
    }

    /// Total failed requests
    pub fn total_failed(&self) -> usize {
        self.failed.values().sum()
    }

    /// One line per kind plus a total
    pub fn summary(&self) -> String {
        let mut lines = vec!["Requests:".to_string()];
        for (kind, issued) in &self.issued {
            lines.push(format!(
                "  {}: {} issued, {} failed",
                kind,
                issued,
                self.failed_for(*kind)
            ));
        }
        lines.push(format!(
            "  Total: {} issued, {} failed",
            self.total_issued(),
            self.total_failed()
        ));
        lines.join("\n")
    }
}
