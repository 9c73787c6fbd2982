//! Error types for devstrap operations.
//!
//! This module defines [`DevstrapError`], the error type used by the
//! building blocks of the tool, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Components return `DevstrapError` internally
//! - The orchestrator-facing operations convert errors into outcome values
//!   (see [`crate::installer::InstallOutcome`], [`crate::health::HealthOutcome`])
//!   so a failing step never aborts the remaining ones
//! - Only configuration loading can fail the whole run

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devstrap operations.
#[derive(Debug, Error)]
pub enum DevstrapError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A command could not be spawned at all (usually: not on PATH).
    #[error("Failed to run '{command}': {message}")]
    CommandSpawn { command: String, message: String },

    /// A command ran longer than its allotted time and was killed.
    #[error("Command timed out after {seconds}s: {command}")]
    CommandTimeout { command: String, seconds: u64 },

    /// HTTP client error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for devstrap operations.
pub type Result<T> = std::result::Result<T, DevstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = DevstrapError::ConfigNotFound {
            path: PathBuf::from("/foo/.devstrap.yml"),
        };
        assert!(err.to_string().contains("/foo/.devstrap.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = DevstrapError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn command_spawn_displays_command_and_message() {
        let err = DevstrapError::CommandSpawn {
            command: "node --version".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("node --version"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn command_timeout_displays_seconds() {
        let err = DevstrapError::CommandTimeout {
            command: "npm install".into(),
            seconds: 30,
        };
        let msg = err.to_string();
        assert!(msg.contains("npm install"));
        assert!(msg.contains("30s"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DevstrapError = io_err.into();
        assert!(matches!(err, DevstrapError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: DevstrapError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
