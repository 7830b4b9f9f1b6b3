//! # Pienkuu Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout Pienkuu. Every fatal
//! condition of a packaging run is one variant of `PienkuuError`; all of them
//! bubble up to `main`, which logs the failure and exits with a non-zero status
//! before any archive is written.
//!
//! ## Architecture
//!
//! The error system consists of two components:
//! - `PienkuuError`: A custom error enum using `thiserror` for the domain failures
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible propagation
//!
//! The variants cover:
//! - Folder configuration errors (missing or malformed `pienkuu.json`)
//! - Filesystem read errors while staging or copying
//! - Action errors (unknown names, bad options)
//! - Network errors from the `download` action
//! - Invalid glob patterns and dependency cycles
//!
//! ## Examples
//!
//! ```rust
//! // Raise a domain error
//! anyhow::bail!(PienkuuError::UnknownAction {
//!     folder: "addon".into(),
//!     name: "explode".into(),
//! });
//!
//! // Inspect a propagated error
//! if let Some(PienkuuError::ConfigMalformed { path, .. }) = err.downcast_ref::<PienkuuError>() {
//!     eprintln!("fix {}", path);
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for Pienkuu.
#[derive(Error, Debug)]
pub enum PienkuuError {
    #[error("Could not read '{path}': {reason}")]
    ConfigMissing { path: String, reason: String },

    #[error("Invalid JSON in '{path}': {reason}")]
    ConfigMalformed { path: String, reason: String },

    #[error("Failed to read file '{path}': {reason}")]
    FileRead { path: String, reason: String },

    #[error("Unknown action '{name}' in folder '{folder}'")]
    UnknownAction { folder: String, name: String },

    #[error("Invalid options for action '{name}' in folder '{folder}': {reason}")]
    InvalidActionOptions {
        folder: String,
        name: String,
        reason: String,
    },

    #[error("Failed to download '{url}': {reason}")]
    Network { url: String, reason: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Dependency cycle detected: {chain}")]
    DependencyCycle { chain: String },

    #[error("Archive error: {0}")]
    Archive(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let missing = PienkuuError::ConfigMissing {
            path: "addon/pienkuu.json".into(),
            reason: "No such file or directory".into(),
        };
        assert_eq!(
            missing.to_string(),
            "Could not read 'addon/pienkuu.json': No such file or directory"
        );

        let unknown = PienkuuError::UnknownAction {
            folder: "addon".into(),
            name: "explode".into(),
        };
        assert_eq!(
            unknown.to_string(),
            "Unknown action 'explode' in folder 'addon'"
        );

        let cycle = PienkuuError::DependencyCycle {
            chain: "a -> b -> a".into(),
        };
        assert_eq!(cycle.to_string(), "Dependency cycle detected: a -> b -> a");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = anyhow::anyhow!(PienkuuError::Network {
            url: "http://localhost/x".into(),
            reason: "HTTP 404".into(),
        })
        .context("Action 'download' failed");
        assert!(matches!(
            err.downcast_ref::<PienkuuError>(),
            Some(PienkuuError::Network { .. })
        ));
    }
}
