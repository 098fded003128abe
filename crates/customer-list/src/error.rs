//! Error types for customer-list.
//!
//! This module defines all error types used throughout the crate, from the
//! list's allocation failure to configuration problems in the CLI.

use std::collections::TryReserveError;

use thiserror::Error;

/// The main error type for customer-list operations.
#[derive(Error, Debug)]
pub enum Error {
    // === List Errors ===
    /// Storage for a new list node could not be obtained.
    #[error("fatal: could not allocate {requested} bytes for a new list node: {source}")]
    AllocationFailure {
        /// Size of the node storage that was requested.
        requested: usize,
        /// The underlying allocation error.
        #[source]
        source: TryReserveError,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Reading menu input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for customer-list operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error is an allocation failure.
    ///
    /// Allocation failures are unrecoverable: callers should stop their
    /// operation sequence rather than retry.
    #[must_use]
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::AllocationFailure { .. })
    }
}
