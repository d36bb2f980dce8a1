//! API error taxonomy.

use thiserror::Error;

/// Failures surfaced by the REST layer.
///
/// None of these propagate past the call site into the render loop:
/// read failures become empty states, mutation failures become toasts
/// with the triggering dialog left open for retry.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` comes from the server's error body
    /// when present, otherwise from the HTTP status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Connection, DNS, or timeout failure before a response arrived.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx response whose envelope carried `data: null` where a value
    /// was required.
    #[error("response carried no data")]
    MissingData,
}

impl ApiError {
    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Status { status: 403, .. })
    }

    /// Message shown to the user in a toast, preferring the server's
    /// own wording over transport details.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Status { status, .. } => format!("Request failed ({status})"),
            ApiError::Transport(_) => "Could not reach the server".to_string(),
            ApiError::MissingData => "Server returned an empty response".to_string(),
        }
    }
}
