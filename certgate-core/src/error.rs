//! Error types for certgate.
//!
//! This module provides the error hierarchy using `thiserror`.
//! Query-layer errors never reach HTTP clients (they are normalized to
//! `not-certified` by the handler); they exist for internal logging and
//! for the CLI.

use thiserror::Error;

/// Result type alias using `CertgateError`.
pub type Result<T> = std::result::Result<T, CertgateError>;

/// Main error type for all certgate operations.
#[derive(Debug, Error)]
pub enum CertgateError {
    // ═══════════════════════════════════════════════════════════════════════════
    // QUERY ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The node-query script exited with a non-zero status.
    #[error("Query script failed: {0}")]
    QueryFailed(String),

    /// The node-query script did not finish within the configured timeout.
    #[error("Query script timed out after {seconds}s")]
    QueryTimeout {
        /// Timeout that was exceeded, in seconds.
        seconds: u64,
    },

    /// The script could not be spawned or its output could not be read.
    #[error("Query script IO error: {0}")]
    Io(#[from] std::io::Error),

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Missing or invalid process configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}
