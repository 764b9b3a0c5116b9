//! Error types for the Weir client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Weir client
///
/// A structured rejection of a pipeline (HTTP 200 with `success: false`) is
/// not a `ClientError`; it travels as a regular
/// [`PipelineOperationStatus`](weir_core::dto::status::PipelineOperationStatus).
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class_helpers() {
        let rejected = ClientError::api_error(422, "unprocessable");
        assert!(rejected.is_client_error());
        assert!(!rejected.is_server_error());

        let broken = ClientError::api_error(502, "bad gateway");
        assert!(broken.is_server_error());
        assert!(!broken.is_client_error());

        let parse = ClientError::ParseError("truncated body".to_string());
        assert!(!parse.is_client_error());
        assert!(!parse.is_server_error());
    }
}
