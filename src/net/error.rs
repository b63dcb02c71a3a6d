//! Failure classification for auth round trips and session writes.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::util::storage::StorageError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Transport fault before any HTTP status was received.
    #[error("network error: {0}")]
    Network(String),
    /// The server refused the request and said why (bad credentials,
    /// duplicate email, expired refresh token).
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Non-success status with no usable message in the body.
    #[error("request failed: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("session storage error: {0}")]
    Storage(String),
    /// Another login/register is still waiting on the server.
    #[error("a sign-in request is already in progress")]
    Busy,
    /// Logout happened while the request was in flight; its result was dropped.
    #[error("session ended before the request completed")]
    Superseded,
    #[error("no stored session")]
    NoSession,
    #[error("not available outside the browser")]
    Unavailable,
}

impl AuthError {
    /// Server-supplied text, if the failure carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Text suitable for a form banner: the server's words, or `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

impl From<StorageError> for AuthError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}
