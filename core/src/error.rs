//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers distinguish "the item
//! is gone" from "the server returned an unexpected status". All other
//! non-2xx responses land in `HttpError` with the raw status and body.
//! `Transport` covers failures before any response arrived.

use thiserror::Error;

/// Errors produced while building, executing, or parsing a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connect, timeout, I/O).
    #[error("transport failed: {0}")]
    Transport(String),
}
