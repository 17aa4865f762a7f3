//! API failure shapes and user-facing message extraction
//!
//! The backend reports errors in several shapes: `{ "error": "..." }`,
//! `{ "message": "..." }`, a bare HTTP status line, or a transport-level
//! failure with no response at all. [`ApiFailure::failure_message`] walks
//! those in a fixed priority order so every caller surfaces the same text.

use serde_json::Value;

/// Default when no usable message can be extracted
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// A failed call to the backend
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiFailure {
    /// The server answered with a non-success status
    #[error("http {status}: {status_text}")]
    Response {
        /// HTTP status code
        status: u16,
        /// HTTP status text (may be empty on malformed responses)
        status_text: String,
        /// Parsed response body, if any
        body: Option<Value>,
    },

    /// The request never produced a response
    #[error("transport failure: {}", .message.as_deref().unwrap_or("unknown"))]
    Transport {
        /// Structured top-level error field, if the client produced one
        error: Option<String>,
        /// Raw failure message
        message: Option<String>,
    },
}

impl ApiFailure {
    /// Response failure constructor
    #[inline]
    #[must_use]
    pub fn response(status: u16, status_text: impl Into<String>, body: Option<Value>) -> Self {
        Self::Response {
            status,
            status_text: status_text.into(),
            body,
        }
    }

    /// Transport failure with only a raw message
    #[inline]
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            error: None,
            message: Some(message.into()),
        }
    }

    /// HTTP status of the response, when one arrived
    #[inline]
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }

    /// Extract the user-facing message
    ///
    /// Priority for a response: structured `error` field, then `message`
    /// field, then non-empty status text. For a transport failure: the
    /// top-level `error`, then the raw message. Anything else falls back to
    /// [`UNKNOWN_ERROR_MESSAGE`].
    #[must_use]
    pub fn failure_message(&self) -> String {
        match self {
            Self::Response {
                status_text, body, ..
            } => body
                .as_ref()
                .and_then(|b| string_field(b, "error").or_else(|| string_field(b, "message")))
                .or_else(|| {
                    let text = status_text.trim();
                    (!text.is_empty()).then(|| text.to_string())
                })
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
            Self::Transport { error, message } => error
                .clone()
                .or_else(|| message.clone())
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
        }
    }

    /// Payload stored into reducer `error` state on rejection
    ///
    /// The server body when one exists, otherwise the extracted message.
    #[must_use]
    pub fn rejection_payload(&self) -> String {
        match self {
            Self::Response {
                body: Some(body), ..
            } => body.to_string(),
            _ => self.failure_message(),
        }
    }
}

fn string_field(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
}
