//! Fatal aggregation errors.
//!
//! Downstream provider failures never appear here; they surface as
//! [`crate::SourceFailures`] flags inside a successful result.

use thiserror::Error;

use cityscope_core::ProviderError;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("Query is empty")]
    InvalidQuery,

    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    #[error("Geocoding failed: {0}")]
    Geocoding(#[from] ProviderError),
}

impl AggregateError {
    /// User-friendly message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidQuery => "Please enter a city name.".to_string(),
            Self::PlaceNotFound(name) => {
                format!("Could not find \"{}\". Check the spelling and try again.", name)
            }
            Self::Geocoding(e) => e.user_message().to_string(),
        }
    }
}
