use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Context unavailable: {0}")]
    ContextUnavailable(String),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Cancelled: {0}")]
    Cancelled(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl AppError {
    /// Wiring and configuration errors: these abort instead of degrading to a
    /// loading state.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::ContextUnavailable(_) | AppError::MissingConfiguration(_)
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::NetworkFailure("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::NetworkFailure("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            AppError::from_status(status.as_u16(), &err.to_string())
        } else if err.is_decode() {
            AppError::NetworkFailure(format!("Malformed response body: {}", err))
        } else {
            AppError::NetworkFailure(err.to_string())
        }
    }
}

impl AppError {
    /// Map a non-success HTTP status onto the error taxonomy.
    pub fn from_status(status: u16, detail: &str) -> Self {
        match status {
            429 => AppError::RateLimitError(detail.to_string()),
            404 => AppError::NotFound(detail.to_string()),
            401 | 403 => AppError::Unauthorized(detail.to_string()),
            _ => AppError::NetworkFailure(format!("HTTP {}: {}", status, detail)),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidInput(format!("Invalid number: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<base64::DecodeError> for AppError {
    fn from(err: base64::DecodeError) -> Self {
        AppError::InvalidInput(format!("Invalid base64 payload: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
