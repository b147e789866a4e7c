use thiserror::Error;

/// Failure of one assistant call. Never fatal; callers degrade to a
/// fallback message or a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistError {
    /// The request did not complete: connection failure or timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("Network error: HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The request completed but the body lacked the expected fields.
    #[error("Unexpected response shape: {0}")]
    ResponseShape(String),
}

impl AssistError {
    /// Whether another attempt could plausibly succeed: transport
    /// failures, rate limiting, and server errors.
    pub fn is_retryable(&self) -> bool {
        match self {
            AssistError::Network(_) => true,
            AssistError::Status { status, .. } => *status == 429 || (500..600).contains(status),
            AssistError::ResponseShape(_) => false,
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for AssistError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AssistError::ResponseShape(e.to_string())
        } else {
            AssistError::Network(e.to_string())
        }
    }
}
