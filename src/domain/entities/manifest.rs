//! Manifest entity - the record written after every build
//!
//! Pure data. Formatting and persistence are handled by the `Formatter`
//! port and the emit use case.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Manifest sections that can be switched off by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestSection {
    Assets,
    AuxiliaryFiles,
    Dependencies,
}

/// Mapping of entry points and source assets to emitted paths
///
/// Paths are relative to the configured root and always use `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestResult {
    /// Entry point name → files to load, dependencies first
    pub entrypoints: IndexMap<String, Vec<String>>,
    /// Original source filename → emitted path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<IndexMap<String, String>>,
    /// Emitted files without a source filename
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary_files: Option<Vec<String>>,
    /// Entry point name → declared dependency names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<IndexMap<String, Vec<String>>>,
}

impl ManifestResult {
    /// Fresh result with every section present and empty
    pub fn new() -> Self {
        Self {
            entrypoints: IndexMap::new(),
            assets: Some(IndexMap::new()),
            auxiliary_files: Some(Vec::new()),
            dependencies: Some(IndexMap::new()),
        }
    }

    /// Remove a section so it is omitted from the serialized output
    pub fn strip(&mut self, section: ManifestSection) {
        match section {
            ManifestSection::Assets => self.assets = None,
            ManifestSection::AuxiliaryFiles => self.auxiliary_files = None,
            ManifestSection::Dependencies => self.dependencies = None,
        }
    }

    /// Every relative path the manifest references, entry points first
    pub fn referenced_paths(&self) -> impl Iterator<Item = &str> {
        let entry_files = self.entrypoints.values().flatten();
        let asset_files = self.assets.iter().flat_map(|assets| assets.values());
        let auxiliary = self.auxiliary_files.iter().flatten();

        entry_files
            .chain(asset_files)
            .chain(auxiliary)
            .map(String::as_str)
    }

    /// Total number of references (duplicates counted)
    pub fn reference_count(&self) -> usize {
        self.referenced_paths().count()
    }
}
