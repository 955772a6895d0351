//! Operations module
//!
//! Dispatches operations to the conversion library and renders their results

pub mod dispatch;
pub mod output;

pub use dispatch::*;
pub use output::*;
