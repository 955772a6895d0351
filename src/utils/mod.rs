//! Utility functions for value parsing

pub mod parse;
