//! Error types for assetmap
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for assetmap operations
pub type AssetMapResult<T> = Result<T, AssetMapError>;

/// Main error type for assetmap operations
#[derive(Error, Debug)]
pub enum AssetMapError {
    /// An entry point declares a dependency on an entry point the build does not have
    #[error("entry point '{entrypoint}' depends on unknown entry point '{dependency}'")]
    UnknownDependency {
        entrypoint: String,
        dependency: String,
    },

    /// Path could not be resolved to its real location
    #[error("cannot resolve {path}: {source}")]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory listing failed during cleanup
    #[error("cannot list directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stale file deletion failed during cleanup
    #[error("cannot remove {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file could not be written
    #[error("cannot write manifest {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Formatter refused the manifest
    #[error("cannot format manifest: {0}")]
    Format(String),

    /// Build snapshot is malformed
    #[error("invalid build snapshot {path}: {message}")]
    InvalidSnapshot { path: PathBuf, message: String },

    /// Configuration file is malformed
    #[error("invalid configuration {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for AssetMapError {
    fn from(err: serde_json::Error) -> Self {
        AssetMapError::Format(err.to_string())
    }
}
