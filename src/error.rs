//! Error types and handling infrastructure for uplift.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling with context.
//!
//! There is no recovery path inside the core: the data is static and compile-time
//! fixed, so the only runtime failures are a resource id that does not resolve
//! against a bundled table, a malformed bundle, or a terminal-layer fault. All of
//! them are fatal and surface through the crate-wide [`Result`] alias.

use thiserror::Error;

/// The main error type for uplift operations.
#[derive(Error, Debug)]
pub enum UpliftError {
    /// A resource id does not resolve against its bundled table
    #[error("Resource lookup failed: {message}")]
    Resource { message: String },

    /// A bundled string table failed to parse
    #[error("String table error: {message}")]
    StringTable { message: String },

    /// Configuration file related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for uplift operations.
pub type Result<T> = std::result::Result<T, UpliftError>;

impl UpliftError {
    /// Create a Resource error with a descriptive message
    pub fn resource(message: impl Into<String>) -> Self {
        Self::Resource {
            message: message.into(),
        }
    }

    /// Create a StringTable error with a descriptive message
    pub fn string_table(message: impl Into<String>) -> Self {
        Self::StringTable {
            message: message.into(),
        }
    }

    /// Create a Config error with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

// Terminal setup/teardown and draw calls report io::Error; wrap them as UI faults.
impl From<std::io::Error> for UpliftError {
    fn from(err: std::io::Error) -> Self {
        Self::UIError {
            message: "Terminal IO failed".to_string(),
            source: err,
        }
    }
}
