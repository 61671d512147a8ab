//! Error types for Galaxy3D camera rigs
//!
//! This module defines the error types used by the dolly, the clock and
//! the stage that drives behaviours.

use std::fmt;

/// Result type for Galaxy3D dolly operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D dolly errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter (non-finite speed/amplitude, bad clock delta, etc.)
    InvalidParameter(String),

    /// Stage object key does not refer to a live object
    InvalidObject(String),

    /// Internal failure (poisoned lock, etc.)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidObject(msg) => write!(f, "Invalid object: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
