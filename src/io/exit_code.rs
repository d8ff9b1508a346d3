//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - operation completed, results found
//! - `1`: General error - unspecified failure
//! - `2`: Blocking error - nothing can be ingested with the current setup
//! - `3-125`: Specific recoverable errors
//! - `126-255`: Reserved by shell

use crate::error::{CorpusError, FetchError};

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Critical error that should halt automation (code 2)
    BlockingError = 2,

    /// Query ran but matched nothing (code 3)
    NotFound = 3,

    /// A location could not be fetched (code 4)
    FetchError = 4,

    /// Local file I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

impl ExitCode {
    /// Convert a `CorpusError` to the appropriate exit code.
    pub fn from_error(error: &CorpusError) -> Self {
        match error {
            CorpusError::Fetch(FetchError::ClientInit { .. }) => ExitCode::BlockingError,
            CorpusError::Fetch(FetchError::FileRead { .. }) => ExitCode::IoError,
            CorpusError::Fetch(_) => ExitCode::FetchError,
            CorpusError::DocumentNotFound { .. } => ExitCode::NotFound,
            CorpusError::ConfigError { .. } => ExitCode::ConfigError,
            CorpusError::General(_) => ExitCode::GeneralError,
        }
    }
}
