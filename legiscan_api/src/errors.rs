//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API answered with `"status": "ERROR"` and an alert message.
    #[error("API error: {message}")]
    Api { message: String },
    /// The response body was not the expected shape for the operation.
    #[error("Failed to decode {operation} response: {message}")]
    Decode { operation: String, message: String },
}
