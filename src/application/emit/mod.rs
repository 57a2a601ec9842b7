//! Emit Use Case
//!
//! Runs once per completed build:
//! - Building the manifest from the snapshot
//! - Removing stale files next to referenced files (when enabled)
//! - Stripping disabled sections, formatting, and writing the manifest

mod result;
mod use_case;

pub use result::EmitReport;
pub use use_case::EmitUseCase;
