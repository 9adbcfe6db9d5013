//! Error taxonomy for the profile service client.
//!
//! Classification happens exactly once, at the HTTP boundary. Callers store
//! the rendered message and never re-interpret status codes, so the `Display`
//! strings here are the user-facing text.

use thiserror::Error;

/// Errors surfaced by `HttpClient` and the typed API layer above it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response was received at all: connectivity loss, timeout expiry,
    /// DNS failure, connection refused.
    #[error("Network error. Check your connection.")]
    Network,

    /// The server answered with status 404.
    #[error("Resource not found.")]
    NotFound,

    /// The server answered with a status of 500 or above.
    #[error("Server error. Please try again later.")]
    Server {
        /// Original status code, kept for logging.
        status: u16,
    },

    /// Any other non-2xx response, passed through with the original status
    /// and body untouched.
    #[error("HTTP {status}: {body}")]
    Client {
        /// Original status code.
        status: u16,
        /// Original response body, unmodified.
        body: String,
    },

    /// A 2xx response whose body could not be deserialized into the
    /// expected type. Not part of the HTTP classification order.
    #[error("Malformed response from server.")]
    Decode(String),
}
