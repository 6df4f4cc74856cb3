/*!
 * Error types for the glossboard application.
 *
 * Term parsing itself never fails, so the errors here cover the pieces
 * around it: backup documents and configuration. Application plumbing
 * wraps these with anyhow context. Defined with the thiserror crate.
 */

use thiserror::Error;

/// Errors that can occur when reading or writing backup documents
#[derive(Error, Debug)]
pub enum BackupError {
    /// The document parsed as JSON but lacks the required sections
    #[error("Invalid backup document: {0}")]
    InvalidDocument(String),

    /// The document is not valid JSON
    #[error("Failed to parse backup JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required field is blank
    #[error("Configuration field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// A field holds a value outside the accepted set
    #[error("Invalid value for '{field}': {value}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// Offending value
        value: String,
    },
}
