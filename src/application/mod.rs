//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `EmitUseCase` - Build, clean, format and write the manifest

pub mod emit;

pub use emit::{EmitReport, EmitUseCase};
