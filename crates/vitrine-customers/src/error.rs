//! Customer-service client errors.

use thiserror::Error;

/// Errors from forwarding a request to the customer-record service.
#[derive(Error, Debug)]
pub enum CustomerServiceError {
    /// The request could not be sent.
    #[error("Request failed: {0}")]
    Request(String),

    /// The service answered with a non-2xx status.
    #[error("Customer service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be parsed.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// JSON serialization of the forwarded payload failed.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for CustomerServiceError {
    fn from(e: serde_json::Error) -> Self {
        CustomerServiceError::Json(e.to_string())
    }
}
