//! Core error types for echobloom-core.
//!
//! Validation failures never reach the backend; client failures are
//! collapsed to "not ok" by the activity orchestrators and only logged.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for echobloom-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend client errors
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home directory could not be resolved or created
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the persistence client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network-level failure (connection refused, DNS, reset...)
    #[error("Request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-2xx status
    #[error("Backend rejected {path}: HTTP {status}")]
    Status { path: String, status: u16 },

    /// Base URL could not be parsed or joined
    #[error("Invalid backend URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Another submission for this session is still outstanding
    #[error("A save is already in progress")]
    SaveInProgress,
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty after trimming
    #[error("Field '{0}' must not be empty")]
    EmptyField(String),

    /// Collection is at capacity
    #[error("{collection} already holds {capacity} entries")]
    CapacityReached { collection: String, capacity: usize },

    /// Referenced entry does not exist
    #[error("No entry with id {0}")]
    UnknownEntry(String),

    /// Category name does not match any catalog entry
    #[error("Unknown journal category: {0}")]
    UnknownCategory(String),

    /// Operation not allowed in the current session state
    #[error("{0}")]
    NotReady(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
