//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// API request failed
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status returned by the provider
        status: u16,
        /// Provider supplied message, or the raw body
        message: String,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded. Retry after {retry_after:?} seconds")]
    RateLimitError {
        /// Value of the `Retry-After` header, when present
        retry_after: Option<u64>,
    },

    /// Daily or project quota exhausted
    #[error("Quota exceeded: {message}")]
    QuotaExceededError {
        /// Provider supplied message
        message: String,
    },

    /// Credentials rejected by the provider
    #[error("Authentication failed: {message}")]
    AuthenticationError {
        /// Provider supplied message
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        /// Underlying transport failure
        message: String,
    },

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// What was wrong with the body
        message: String,
    },

    /// Request timeout
    #[error("Request timeout")]
    TimeoutError,

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Which setting is wrong
        message: String,
    },

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_detail() {
        let err = TranslationError::ApiError {
            status: 400,
            message: "Invalid Value".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 400 - Invalid Value");

        let err = TranslationError::RateLimitError { retry_after: Some(7) };
        assert!(err.to_string().contains("Some(7)"));

        assert_eq!(TranslationError::TimeoutError.to_string(), "Request timeout");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: TranslationError = parse.unwrap_err().into();
        assert!(matches!(err, TranslationError::JsonError(_)));
    }
}
