//! API error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Authorization and authentication failures are handled globally (session
//! reset plus guard redirect); everything else is returned to the caller,
//! which converts it into a local human-readable message rather than letting
//! it escape the view-model boundary.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::types::ErrorBody;
use crate::util::authz::Privilege;

/// Failure modes of an API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Pre-flight privilege check failed; raised before any network call.
    #[error("{0} access required")]
    Authorization(Privilege),
    /// 401 response; the session has already been reset by the interceptor.
    #[error("unauthenticated")]
    Unauthenticated,
    /// 403 response; logged, no forced logout.
    #[error("forbidden: {message}")]
    Forbidden { message: String },
    /// 422 response; validation details are the caller's to handle.
    #[error("validation failed: {message}")]
    Validation { message: String },
    /// 5xx response.
    #[error("server error: status {status}")]
    Server { status: u16 },
    /// Any other non-success status.
    #[error("request failed: status {status}")]
    Status { status: u16, message: String },
    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),
    /// Response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Requests are only dispatched in the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// The backend-provided message when one exists, otherwise `fallback`.
    /// Mirrors how screens show `err.data.message || "..."` style text.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        let message = match self {
            Self::Forbidden { message } | Self::Validation { message } | Self::Status { message, .. } => {
                Some(message.as_str())
            }
            _ => None,
        };
        match message {
            Some(m) if !m.is_empty() => m.to_owned(),
            _ => fallback.to_owned(),
        }
    }
}

/// Pull the `message` field out of a raw error body, if present.
#[must_use]
pub fn extract_message(raw: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(raw).ok()?.message
}
