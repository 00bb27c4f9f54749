//! Provider error taxonomy shared by every HTTP adapter.
//!
//! All transport-level failures collapse into [`ProviderError`]; the
//! aggregator treats any variant as "this source is unavailable" and
//! degrades that slice of the result instead of propagating.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Request timed out")]
    Timeout,

    #[error("Provider returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(reqwest::Error),
}

impl ProviderError {
    /// User-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Timeout => "The data provider took too long to respond. Please try again.",
            Self::Status { status, .. } if *status >= 500 => {
                "The data provider is experiencing issues. Please try again later."
            }
            Self::Status { .. } => "The data provider rejected the request. Please try again.",
            Self::InvalidResponse(_) => "Received an unexpected response from the data provider.",
            Self::Network(_) => "Unable to connect. Check your internet connection.",
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }
}
