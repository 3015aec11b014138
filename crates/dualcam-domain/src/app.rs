//! App module - applications as reported by the app-store APIs

use crate::text::truncate_chars;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric app-store identifier (the search API's `trackId`)
///
/// This is the identity key of an [`AppRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub u64);

impl AppId {
    /// Get the raw numeric value
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AppId {
    fn from(id: u64) -> Self {
        AppId(id)
    }
}

/// An application record as fetched from the search or lookup API
///
/// Immutable once fetched; the pipelines only ever cap the description.
/// Fields the API omitted are stored as `None` and written as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppRecord {
    /// Display name (`trackName`)
    #[serde(default)]
    pub name: Option<String>,

    /// Publisher (`artistName`)
    #[serde(default)]
    pub developer: Option<String>,

    /// Localised price label, e.g. "Free" or "$4.99"
    #[serde(default)]
    pub formatted_price: Option<String>,

    /// Average user rating, absent for unrated apps
    #[serde(default)]
    pub rating: Option<f64>,

    /// Number of user ratings
    #[serde(default)]
    pub rating_count: u64,

    /// Current version string
    #[serde(default)]
    pub version: Option<String>,

    /// Release date of the current version
    #[serde(default)]
    pub release_date: Option<String>,

    /// Store description, capped by the collector
    #[serde(default)]
    pub description: String,

    /// Identity key
    #[serde(default)]
    pub numeric_id: Option<AppId>,

    /// Bundle identifier
    #[serde(default)]
    pub bundle_id: Option<String>,

    /// Download size in bytes, as reported (the API sends it as text)
    #[serde(default)]
    pub size: Option<String>,

    /// Minimum OS version
    #[serde(default)]
    pub minimum_os_version: Option<String>,

    /// Store genres, in API order
    #[serde(default)]
    pub categories: Vec<String>,
}

impl AppRecord {
    /// Return the record with its description capped at `max_chars` characters
    pub fn with_description_cap(mut self, max_chars: usize) -> Self {
        self.description = truncate_chars(&self.description, max_chars);
        self
    }

    /// Display name, or an empty string if the API omitted it
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Rating used for ordering, falling back to `default` when absent
    pub fn rating_or(&self, default: f64) -> f64 {
        self.rating.unwrap_or(default)
    }

    /// Case-insensitive check whether the name contains `needle`
    pub fn name_contains(&self, needle: &str) -> bool {
        self.display_name()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}
