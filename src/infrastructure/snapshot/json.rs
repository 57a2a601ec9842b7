//! JSON Snapshot Loader
//!
//! Reads a `BuildSnapshot` that an out-of-process bundler serialized after
//! emission.

use std::path::Path;

use tracing::debug;

use crate::domain::entities::BuildSnapshot;
use crate::error::{AssetMapError, AssetMapResult};

/// Loads build snapshots from JSON files
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSnapshotLoader;

impl JsonSnapshotLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse `path`.
    ///
    /// A relative (or missing) `outputPath` is taken relative to the directory
    /// holding the snapshot file, so snapshots stay valid wherever the CLI runs.
    pub fn load(&self, path: &Path) -> AssetMapResult<BuildSnapshot> {
        let content = std::fs::read_to_string(path)?;
        let mut snapshot = self.parse(&content, path)?;

        if snapshot.output_path.is_relative() {
            snapshot.output_path = snapshot_dir(path).join(&snapshot.output_path);
        }

        debug!(
            snapshot = %path.display(),
            output = %snapshot.output_path.display(),
            entrypoints = snapshot.entrypoints.len(),
            assets = snapshot.assets_info.len(),
            "loaded build snapshot"
        );
        Ok(snapshot)
    }

    /// Parse snapshot JSON; `origin` is only used for error messages.
    pub fn parse(&self, content: &str, origin: &Path) -> AssetMapResult<BuildSnapshot> {
        serde_json::from_str(content).map_err(|e| AssetMapError::InvalidSnapshot {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Directory holding `path`; `.` for a bare file name
fn snapshot_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}
