//! Build snapshot entity - the host's finished-build context as plain data
//!
//! A snapshot is captured once when the host signals that emission finished.
//! It holds no references back into the host; everything is owned.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A unit of emitted output associated with one or more entry points
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Emitted file paths, relative to the compiler output directory
    #[serde(default)]
    pub files: Vec<String>,
}

impl Chunk {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

/// A named root of the dependency graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    pub name: String,
    /// Names of entry points whose files are loaded before this one
    #[serde(default)]
    pub depend_on: Vec<String>,
    #[serde(default)]
    pub chunks: Vec<Chunk>,
}

impl EntryPoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            depend_on: Vec::new(),
            chunks: Vec::new(),
        }
    }

    pub fn with_dependency(mut self, name: impl Into<String>) -> Self {
        self.depend_on.push(name.into());
        self
    }

    pub fn with_chunk(mut self, chunk: Chunk) -> Self {
        self.chunks.push(chunk);
        self
    }

    /// All files of all chunks, in chunk order
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.chunks
            .iter()
            .flat_map(|chunk| chunk.files.iter().map(String::as_str))
    }
}

/// Metadata the host attaches to an emitted file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    /// Original, pre-processed asset path. Absent for generated files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_filename: Option<String>,
}

impl AssetInfo {
    pub fn with_source(source_filename: impl Into<String>) -> Self {
        Self {
            source_filename: Some(source_filename.into()),
        }
    }

    pub fn auxiliary() -> Self {
        Self::default()
    }
}

/// Read-only view of a completed build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSnapshot {
    /// Compiler output directory all emitted paths are relative to
    #[serde(default)]
    pub output_path: PathBuf,
    #[serde(default)]
    pub entrypoints: Vec<EntryPoint>,
    /// Emitted file path → metadata, in emission order
    #[serde(default)]
    pub assets_info: IndexMap<String, AssetInfo>,
}

impl BuildSnapshot {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn with_entrypoint(mut self, entrypoint: EntryPoint) -> Self {
        self.entrypoints.push(entrypoint);
        self
    }

    pub fn with_asset(mut self, file: impl Into<String>, info: AssetInfo) -> Self {
        self.assets_info.insert(file.into(), info);
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Look up an entry point by name
    pub fn entrypoint(&self, name: &str) -> Option<&EntryPoint> {
        self.entrypoints.iter().find(|ep| ep.name == name)
    }
}
