//! assetmap - asset manifest writer for bundler output
//!
//! After a build is emitted, assetmap maps every entry point to the files it
//! needs (dependency entry points first) and every original source asset to
//! the file it was emitted as, then writes that map as one manifest file.
//! It can also remove stale files left next to the files the manifest
//! references.
//!
//! Hosts hand over the finished build as a [`BuildSnapshot`], either in
//! process through [`AfterEmitHook`] or as JSON through the `assetmap` CLI.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod plugin;

// Re-exports for convenience
pub use application::{EmitReport, EmitUseCase};
pub use config::{ManifestConfig, ManifestOptions, OptionOverrides};
pub use domain::entities::{AssetInfo, BuildSnapshot, Chunk, EntryPoint, ManifestResult};
pub use domain::ports::{FileSystem, Formatter};
pub use domain::services::{relative_path, CleanReport};
pub use error::{AssetMapError, AssetMapResult};
pub use infrastructure::{JsonFormatter, JsonSnapshotLoader, LocalFs};
pub use plugin::{AfterEmitHook, AppliedAssetsMapPlugin, AssetsMapPlugin, BoxedFormatter};
