use std::io;

use thiserror::Error;

/// Library-wide error type for wosum operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required column is absent from the source table.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Source table file does not exist.
    #[error("Source table not found: {0}")]
    TableNotFound(String),

    /// CSV decoding failed.
    #[error("Failed to read table: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration value is out of range or empty.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file passed on the command line does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Artifact serialization failed.
    #[error("Failed to serialize artifact: {0}")]
    Json(#[from] serde_json::Error),

    /// Prompt template could not be rendered.
    #[error("Failed to render prompt template '{template}': {reason}")]
    PromptRender { template: String, reason: String },

    /// Rendered prompt exceeds the configured size limit.
    #[error("Prompt for {scope} is {chars} characters, exceeding the limit of {limit}")]
    PromptTooLarge { scope: String, chars: usize, limit: usize },

    /// The external summarizer could not produce a response.
    #[error("Summarizer ({backend}) failed: {details}")]
    Summarizer { backend: String, details: String },

    /// Embedded asset missing or malformed.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    pub(crate) fn summarizer<B: Into<String>, D: Into<String>>(backend: B, details: D) -> Self {
        AppError::Summarizer { backend: backend.into(), details: details.into() }
    }
}
