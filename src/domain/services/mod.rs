//! Domain Services
//!
//! Business logic over snapshots and manifests. All file access goes
//! through the `FileSystem` port.

mod manifest_builder;
mod path_resolver;
mod stale_cleaner;

pub use manifest_builder::ManifestBuilder;
pub use path_resolver::{relative_path, PathResolver};
pub use stale_cleaner::{CleanReport, StaleFileCleaner};
