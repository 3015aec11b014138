//! Dualcam Domain Layer
//!
//! This crate contains the core logic and data model for the dual-camera
//! market research toolkit. It knows nothing about HTTP or files; it defines
//! the records that flow through the pipelines, the two pieces of actual
//! analysis, and the trait interfaces the infrastructure layer implements.
//!
//! ## Key Concepts
//!
//! - **AppRecord**: One application as reported by the app-store search API
//! - **ReviewRecord**: One user review, consumed only during classification
//! - **Bucket**: A non-exclusive review category (complaint, feature request, positive mention)
//! - **ResearchDocument**: The snapshot written by each pipeline stage
//!
//! ## Architecture
//!
//! - Pure logic only: classification and competitor ranking are functions of their input
//! - Every default (fallback rating, thresholds, limits) is an explicit config value
//! - External collaborators are expressed as traits in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod classifier;
pub mod competitors;
pub mod document;
pub mod outcome;
pub mod review;
pub mod text;
pub mod traits;

// Re-exports for convenience
pub use app::{AppId, AppRecord};
pub use classifier::{ClassifierRules, Classification, ReviewClassifier};
pub use competitors::CompetitorAggregator;
pub use document::{ResearchDocument, TargetApp};
pub use outcome::FetchOutcome;
pub use review::{BucketTotals, Complaint, DiscussionPost, Mention, ReviewAnalysis, ReviewRecord};
