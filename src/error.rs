//! Error types for document ingestion.
//!
//! This module provides structured error types using thiserror. Only
//! ingestion can fail; queries return empty results instead of errors.

use crate::types::DocumentId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a location into raw text.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch '{location}': {source}")]
    Http {
        location: String,
        source: reqwest::Error,
    },

    /// Any non-2xx response. The body of an error page is never ingested as
    /// document text, so a 404 page cannot enter the corpus.
    #[error("Fetching '{location}' returned HTTP status {status}")]
    Status { location: String, status: u16 },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid location '{location}': {reason}")]
    InvalidLocation { location: String, reason: String },

    #[error("Failed to initialize HTTP client: {reason}")]
    ClientInit { reason: String },
}

impl FetchError {
    /// The location that failed, when one is known.
    pub fn location(&self) -> Option<String> {
        match self {
            Self::Http { location, .. }
            | Self::Status { location, .. }
            | Self::InvalidLocation { location, .. } => Some(location.clone()),
            Self::FileRead { path, .. } => Some(path.display().to_string()),
            Self::ClientInit { .. } => None,
        }
    }
}

/// Main error type for corpus operations
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The document was not added; the corpus is unchanged.
    #[error("Ingestion aborted: {0}")]
    Fetch(#[from] FetchError),

    #[error("Document {id} not found in corpus")]
    DocumentNotFound { id: DocumentId },

    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },

    #[error("{0}")]
    General(String),
}

impl CorpusError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in JSON responses
    /// for programmatic error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::Fetch(FetchError::Http { .. }) => "FETCH_ERROR",
            Self::Fetch(FetchError::Status { .. }) => "FETCH_STATUS_ERROR",
            Self::Fetch(FetchError::FileRead { .. }) => "FILE_READ_ERROR",
            Self::Fetch(FetchError::InvalidLocation { .. }) => "INVALID_LOCATION",
            Self::Fetch(FetchError::ClientInit { .. }) => "CLIENT_INIT_ERROR",
            Self::DocumentNotFound { .. } => "DOCUMENT_NOT_FOUND",
            Self::ConfigError { .. } => "CONFIG_ERROR",
            Self::General(_) => "GENERAL_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::Fetch(FetchError::Http { .. }) => vec![
                "Check network connectivity and the URL",
                "Set fetch.proxy in .winston/settings.toml if a proxy is required",
                "Increase fetch.timeout_secs for slow servers",
            ],
            Self::Fetch(FetchError::Status { .. }) => {
                vec!["Verify the URL is correct and publicly reachable"]
            }
            Self::Fetch(FetchError::FileRead { .. }) => vec![
                "Check that the file exists and you have read permissions",
                "Local files must contain UTF-8 text",
            ],
            Self::Fetch(FetchError::InvalidLocation { .. }) => {
                vec!["Use an http(s):// URL, a file:// URL, or a filesystem path"]
            }
            Self::ConfigError { .. } => vec![
                "Run 'winston config' to inspect the effective settings",
                "Run 'winston init --force' to regenerate the configuration",
            ],
            _ => vec![],
        }
    }
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type alias for corpus operations
pub type CorpusResult<T> = Result<T, CorpusError>;
