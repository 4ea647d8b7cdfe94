//! Unified error types for the roster workspace.
//!
//! Each higher-level crate defines its own domain-specific error enum that
//! wraps these common variants when appropriate.

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, RosterError>;
