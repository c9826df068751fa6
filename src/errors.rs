use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Network request failed (connection, TLS, timeout, body decoding)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Source answered with a non-success HTTP status
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },
    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    UrlError(String),
    /// Invalid input format (flags, config values, source lists)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
    /// Every source failed or none of them contained an ASN token
    #[error("No ASN identifiers collected from {attempted} source(s) ({failed} failed)")]
    NoDataCollected { attempted: usize, failed: usize },
    /// The result artifact could not be persisted
    #[error("Failed to write output file {}: {reason}", path.display())]
    OutputWriteFailure { path: PathBuf, reason: String },
}

impl AppError {
    /// Whether the error only concerns a single source and must not abort the run.
    pub fn is_source_failure(&self) -> bool {
        matches!(self, AppError::NetworkError(_) | AppError::HttpStatus { .. })
    }
}

// Conversion implementations for common errors
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
