//! Domain Entities
//!
//! - `BuildSnapshot` - The host's finished-build context (entry points, chunks, asset info)
//! - `ManifestResult` - The manifest produced from a snapshot

mod manifest;
mod snapshot;

pub use manifest::{ManifestResult, ManifestSection};
pub use snapshot::{AssetInfo, BuildSnapshot, Chunk, EntryPoint};
