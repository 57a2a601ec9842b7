//! Emit result types

use std::path::PathBuf;

use crate::domain::entities::ManifestResult;
use crate::domain::services::CleanReport;

/// Result of an emit operation
#[derive(Debug, Clone, Default)]
pub struct EmitReport {
    /// Where the manifest was written
    pub output: PathBuf,
    /// Number of bytes written
    pub bytes_written: usize,
    /// Number of entry points in the manifest
    pub entrypoint_count: usize,
    /// Number of source assets (0 when the section is disabled)
    pub asset_count: usize,
    /// Number of auxiliary files (0 when the section is disabled)
    pub auxiliary_count: usize,
    /// Cleanup outcome, when cleanup ran
    pub clean: Option<CleanReport>,
}

impl EmitReport {
    pub(crate) fn new(output: PathBuf, manifest: &ManifestResult, bytes_written: usize) -> Self {
        Self {
            output,
            bytes_written,
            entrypoint_count: manifest.entrypoints.len(),
            asset_count: manifest.assets.as_ref().map_or(0, |a| a.len()),
            auxiliary_count: manifest.auxiliary_files.as_ref().map_or(0, |a| a.len()),
            clean: None,
        }
    }

    /// Files removed by cleanup
    pub fn deleted(&self) -> &[PathBuf] {
        match &self.clean {
            Some(report) => &report.deleted,
            None => &[],
        }
    }
}
