//! Error types for the research pipelines

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for research operations
pub type Result<T> = std::result::Result<T, ResearchError>;

/// Errors that stop a pipeline
///
/// Network failures are not here: they are logged and treated as empty
/// results. Only file, configuration and input-shape problems are fatal.
#[derive(Debug, Error)]
pub enum ResearchError {
    /// Snapshot could not be read
    #[error("Failed to read snapshot {path}: {source}")]
    SnapshotRead {
        /// Snapshot path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Snapshot is not a valid research document
    #[error("Failed to parse snapshot {path}: {source}")]
    SnapshotParse {
        /// Snapshot path
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Snapshot could not be written
    #[error("Failed to write snapshot {path}: {source}")]
    SnapshotWrite {
        /// Snapshot path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// TOML parsing error
    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// API client could not be set up
    #[error("Client error: {0}")]
    Client(#[from] dualcam_client::ClientError),

    /// The snapshot has no target app identifier to enrich
    #[error("Snapshot has no target app id; run the collector first")]
    MissingTargetApp,
}
