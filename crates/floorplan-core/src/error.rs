//! Error types for the floorplan analysis pipeline.
//!
//! Errors are organized by stage so that a failure names what was being
//! attempted and, where applicable, the file involved. Nothing is retried
//! or recovered locally; errors propagate unchanged to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for floorplan operations.
#[derive(Error, Debug)]
pub enum FloorplanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Per-file analysis errors
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Analysis errors, organized by stage. The first one encountered aborts
/// the whole run.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Directory traversal failed
    #[error("Failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },

    /// Reading image bytes from disk failed
    #[error("Failed to read file {path}: {message}")]
    ReadImage { path: PathBuf, message: String },

    /// Submitting the prediction request failed
    #[error("Failed to create prediction: {message}")]
    Submit {
        message: String,
        status_code: Option<u16>,
    },

    /// Waiting for the prediction to reach a terminal state failed
    #[error("Failed to wait for prediction {id}: {message}")]
    Await { id: String, message: String },

    /// The prediction finished in a failed terminal state
    #[error("Prediction {id} failed remotely: {message}")]
    RemoteFailed { id: String, message: String },

    /// The prediction output was not the expected sequence of text fragments
    #[error("Unexpected prediction output shape: {payload}")]
    OutputShape { payload: String },

    /// The concatenated output text was not valid JSON for the schema
    #[error("Failed to decode prediction output: {message}; raw output: {raw}")]
    Decode { message: String, raw: String },
}

/// Convenience type alias for floorplan results.
pub type Result<T> = std::result::Result<T, FloorplanError>;

/// Convenience type alias for analysis-stage results.
pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
