//! Error types for the datasheet library.
//!
//! A missing tag is not an error: it is reported as a [`MissingField`]
//! diagnostic on the rendered datasheet. Everything here comes from the
//! registry side.
//!
//! [`MissingField`]: crate::tags::MissingField

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for datasheet operations.
#[derive(Debug, Error)]
pub enum DatasheetError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure saving or loading a registry record.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Model name is empty, too long, or contains unsupported characters.
    #[error("Invalid model name '{0}': use letters, digits, '.', '_' or '-', starting with a letter or digit")]
    InvalidModelName(String),

    /// A `key=value` tag assignment could not be parsed.
    #[error("Invalid tag '{0}': expected key=value")]
    InvalidTag(String),

    /// No model with this name has been registered.
    #[error("Model not found: {name}")]
    ModelNotFound { name: String },

    /// The model exists but not at this version.
    #[error("Model '{name}' has no version {version}")]
    VersionNotFound { name: String, version: u32 },

    /// The artifact path given at registration does not exist.
    #[error("Model path does not exist: {}", path.display())]
    ModelPath { path: PathBuf },

    /// Any other registry backend failure.
    #[error("Registry error: {0}")]
    Registry(String),
}

/// Result type alias for datasheet operations.
pub type Result<T> = std::result::Result<T, DatasheetError>;
