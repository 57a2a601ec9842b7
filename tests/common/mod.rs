//! Common test utilities for assetmap CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus CLI runner
//! - Fixtures: build snapshot JSON constants

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
