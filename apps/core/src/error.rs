use thiserror::Error;

/// Application-wide error type.
///
/// The normalizer itself never produces one of these: its parsers are
/// total. Errors only come from transport, configuration and caller input.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents invalid caller input (e.g., empty message context, malformed URL).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents transport failures: connection errors, non-2xx statuses, unreadable bodies.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Represents an error reported by the backend itself through its `error` field.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Message generation was requested before any analysis completed.
    #[error("No brand analysis found. Please run an analysis first.")]
    NoAnalysis,

    /// Represents errors specific to the actor system, such as closed channels.
    #[error("Actor error: {0}")]
    Actor(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Http(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Validation(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(format!("HTTP request timed out: {}", err))
        } else {
            AppError::Http(err.to_string())
        }
    }
}
