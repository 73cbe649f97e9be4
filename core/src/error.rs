//! Error types for the request client.
//!
//! # Design
//! Only failures the client itself can detect get a variant: a malformed
//! base URL, a body that will not serialize, or a transport that never
//! produced a response. HTTP error statuses are deliberately absent —
//! a 401 or 500 is a completed exchange, returned as a `Response` for the
//! caller to interpret against its API's own error schema.

use std::fmt;

/// Errors returned by `Client` construction and request methods.
#[derive(Debug)]
pub enum ClientError {
    /// The base URL is not a syntactically valid absolute URL.
    InvalidBaseUrl(String),

    /// The request body could not be serialized to JSON. Reported before
    /// any transport activity.
    Serialization(String),

    /// The transport failed to complete the exchange. The message is the
    /// transport's own diagnostic, preserved verbatim.
    Transport(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidBaseUrl(msg) => {
                write!(f, "invalid base URL: {msg}")
            }
            ClientError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ClientError::Transport(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ClientError {}
