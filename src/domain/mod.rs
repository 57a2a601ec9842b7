//! Domain Layer
//!
//! The manifest logic itself, independent of how the host hands over the
//! build or where the manifest ends up.
//!
//! ## Structure
//!
//! - `entities/` - Build snapshot and manifest records
//! - `services/` - Path resolution, manifest building, stale file cleanup
//! - `ports/` - Interface definitions for infrastructure (file system, formatter)

pub mod entities;
pub mod ports;
pub mod services;
