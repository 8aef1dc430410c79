// src/error.rs
//! Error type surfaced by every client operation

use thiserror::Error;

pub const TIMEOUT_MESSAGE: &str =
    "Request timed out. The server took too long to respond. Please try again.";

pub const NETWORK_MESSAGE: &str =
    "Unable to connect to the server. Please check your connection and try again.";

/// A failed client call. Every variant renders as one human-readable sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Caller input was rejected before any request was issued.
    #[error("{0}")]
    Validation(String),

    /// The request did not complete within the configured timeout.
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,

    /// The service answered with a non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// No usable response was obtained (unreachable host, undecodable body).
    #[error("{}", NETWORK_MESSAGE)]
    Network,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status of the failed response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
