use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input")]
    Invalid,

    #[error("Invalid day key: {0}")]
    InvalidDayKey(String),

    #[error("Internal server error")]
    InternalServerError,

    /// Credentials for the completion service are missing.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Authorization rejected by completion service: {0}")]
    AuthError(String),

    #[error("Completion service rate limit exceeded")]
    RateLimitError,

    #[error("Completion service unavailable: {0}")]
    ServiceError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    /// The completion response did not have the expected envelope.
    #[error("Unexpected completion response: {0}")]
    ProtocolError(String),

    /// The completion text could not be recovered as JSON.
    #[error("Expected JSON, got unparseable text: {0}")]
    FormatError(String),
}
