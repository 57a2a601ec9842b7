//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod formatter;

pub use file_system::{DirEntryInfo, FileSystem};
pub use formatter::Formatter;
