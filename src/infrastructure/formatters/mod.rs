//! Formatter Implementations
//!
//! Concrete implementations of the Formatter port.

mod json;

pub use json::JsonFormatter;
