//! Error types for StoryNest onboarding operations.
//!
//! This module defines [`StorynestError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `StorynestError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `StorynestError::Other`) for unexpected errors
//! - The progress evaluator never returns errors; only persistence,
//!   configuration and CLI input can fail

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for StoryNest operations.
#[derive(Debug, Error)]
pub enum StorynestError {
    /// A field name that is not part of the onboarding record.
    #[error("Unknown field: {name}")]
    UnknownField { name: String },

    /// A step identifier that is not in the registry.
    #[error("Unknown step: {path}")]
    UnknownStep { path: String },

    /// A value that cannot be stored in the given field.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Persisted onboarding data could not be parsed.
    #[error("Failed to parse onboarding data at {path}: {message}")]
    RecordParse { path: PathBuf, message: String },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The step registry breaks one of its ordering rules.
    #[error("Invalid step registry: {message}")]
    InvalidRegistry { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for StoryNest operations.
pub type Result<T> = std::result::Result<T, StorynestError>;
