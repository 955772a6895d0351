//! Custom error types for mask conversions

use thiserror::Error;

/// Main error type for subnetcalc conversions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MaskError {
    /// Invalid Argument - the value is malformed or out of range
    #[error("{message}")]
    InvalidArgument { message: String },
}

impl MaskError {
    /// Create an invalid argument error
    #[inline]
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Human-readable message without any prefix
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument { message } => message,
        }
    }
}

/// Result alias used by the conversion library
pub type MaskResult<T> = Result<T, MaskError>;
