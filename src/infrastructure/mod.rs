//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (Local)
//! - `formatters/` - Manifest encodings (JSON)
//! - `snapshot/` - Build snapshot loading (JSON)

pub mod formatters;
pub mod fs;
pub mod snapshot;

// Re-export for convenience
pub use formatters::JsonFormatter;
pub use fs::LocalFs;
pub use snapshot::JsonSnapshotLoader;
