//! Snapshot loading for out-of-process hosts

mod json;

pub use json::JsonSnapshotLoader;
