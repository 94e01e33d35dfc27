//! Custom error types for the linkscan threat-report mockup.
//!
//! Provides a structured error hierarchy so callers can tell a rejected
//! input apart from a scan that failed after it started.

use std::path::PathBuf;

/// Shown when the input is blank.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a URL to scan.";

/// Shown when the input is not an absolute http(s) URL.
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL (e.g., https://example.com)";

/// Shown to the user when a scan fails after validation.
pub const SCAN_FAILED_MESSAGE: &str = "An error occurred during scanning. Please try again.";

/// The main error type for linkscan operations.
#[derive(Debug, thiserror::Error)]
pub enum LinkScanError {
    /// The input was rejected before any report was generated
    #[error("{message}")]
    InvalidInput { input: String, message: String },

    /// The scan started but produced no report
    #[error("Report generation failed: {0}")]
    Generation(String),

    /// Settings that cannot be honoured together
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O error (export file write, terminal read, etc.)
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal rendering error
    #[error("UI error: {0}")]
    Ui(String),
}

/// Result type alias using LinkScanError
pub type LinkScanResult<T> = Result<T, LinkScanError>;

impl LinkScanError {
    /// Rejection for blank input
    pub fn empty_input() -> Self {
        Self::InvalidInput {
            input: String::new(),
            message: EMPTY_INPUT_MESSAGE.to_string(),
        }
    }

    /// Rejection for anything that is not an absolute http(s) URL
    pub fn invalid_url(input: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            message: INVALID_URL_MESSAGE.to_string(),
        }
    }

    /// Create an I/O error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Message suitable for showing next to the input prompt.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { message, .. } => message.clone(),
            Self::Generation(_) => SCAN_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Convert from raw I/O errors (without path context)
impl From<std::io::Error> for LinkScanError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = LinkScanError::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            Some(PathBuf::from("/test/path")),
        );
        assert!(err.to_string().contains("/test/path"));
    }

    #[test]
    fn test_invalid_input_messages() {
        assert_eq!(LinkScanError::empty_input().to_string(), EMPTY_INPUT_MESSAGE);

        let err = LinkScanError::invalid_url("ftp://example.com");
        assert!(err.is_invalid_input());
        assert_eq!(err.user_message(), INVALID_URL_MESSAGE);
    }

    #[test]
    fn test_generation_failure_uses_generic_message() {
        let err = LinkScanError::Generation("scan aborted".to_string());
        assert!(!err.is_invalid_input());
        assert_eq!(err.user_message(), SCAN_FAILED_MESSAGE);
        assert!(err.to_string().contains("scan aborted"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LinkScanError = io_err.into();
        assert!(matches!(err, LinkScanError::Io { path: None, .. }));
    }
}
