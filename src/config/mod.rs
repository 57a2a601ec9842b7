//! Configuration module for assetmap
//!
//! Options are layered, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (ASSETMAP_*)
//! 3. Config file (`--config`, or `assetmap.toml` in the working directory)
//! 4. Built-in defaults
//!
//! The merged `ManifestOptions` are then finalized into an immutable
//! `ManifestConfig` once the compiler output directory is known.

mod loader;
mod types;

pub use loader::{apply_env, load_or_default, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{ManifestConfig, ManifestOptions, OptionOverrides, DEFAULT_OUTPUT};
