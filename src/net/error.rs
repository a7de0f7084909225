//! Typed failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! The gateway and session store return these instead of throwing past
//! their boundary. Views display `to_string()` inline; only `Unauthorized`
//! is handled globally (session teardown + redirect) and never shown as a
//! recoverable error.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server rejected the bearer token. The gateway has already torn
    /// the session down by the time a caller sees this.
    #[error("session expired, please sign in again")]
    Unauthorized,
    /// Any non-401 error status, carrying the server's message when it
    /// provided one.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// A 2xx body that did not match the expected schema.
    #[error("unexpected response from the server")]
    Decode,
}

impl ApiError {
    /// Build the `Api` variant for a non-401 error status.
    pub(crate) fn failure(status: u16, body: &serde_json::Value) -> Self {
        Self::Api { status, message: failure_message(status, body) }
    }

    /// HTTP status for response-derived failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Api { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode => None,
        }
    }
}

/// Extract the display message for an error response: the server's
/// `message` (then `error`) field verbatim, or a generic fallback.
fn failure_message(status: u16, body: &serde_json::Value) -> String {
    let provided = body
        .get("message")
        .and_then(|v| v.as_str())
        .or_else(|| body.get("error").and_then(|v| v.as_str()));
    if let Some(message) = provided {
        return message.to_owned();
    }
    if status >= 500 {
        format!("server error: {status}")
    } else {
        format!("request failed: {status}")
    }
}
