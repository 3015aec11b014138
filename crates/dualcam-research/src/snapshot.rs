//! Reading and writing research snapshots on disk

use crate::error::{ResearchError, Result};
use dualcam_domain::ResearchDocument;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write a document as pretty-printed JSON, replacing any existing file
///
/// Missing parent directories are created.
pub fn save(path: &Path, doc: &ResearchDocument) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ResearchError::SnapshotWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(doc)?;
    fs::write(path, json).map_err(|source| ResearchError::SnapshotWrite {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote snapshot to {}", path.display());
    Ok(())
}

/// Read a document written by [`save`]
pub fn load(path: &Path) -> Result<ResearchDocument> {
    let contents = fs::read_to_string(path).map_err(|source| ResearchError::SnapshotRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ResearchError::SnapshotParse {
        path: path.to_path_buf(),
        source,
    })
}
