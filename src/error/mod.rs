//! Error handling module
//!
//! Defines the error type returned by every conversion

pub mod types;

pub use types::*;
