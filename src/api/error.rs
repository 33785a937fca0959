//! Errors raised while talking to the posts service.

use thiserror::Error;

/// Longest response body excerpt kept in a status error.
const MAX_MESSAGE_LEN: usize = 200;

/// Errors that can occur during a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Configured base URL cannot address the posts collection
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request never produced a response
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-2xx status
    #[error("Server responded with {status}{}", format_message(.message))]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request could not be handed to the request worker
    #[error("Request not sent: {0}")]
    Dispatch(String),
}

impl ApiError {
    pub(crate) fn status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = match body.char_indices().nth(MAX_MESSAGE_LEN) {
            Some((cut, _)) => format!("{}...", &body[..cut]),
            None => body.to_string(),
        };
        ApiError::Status { status, message }
    }

    /// HTTP status of the failed response, if the backend answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn format_message(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {}", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_is_truncated() {
        let long = "x".repeat(500);
        let err = ApiError::status(500, &long);
        match &err {
            ApiError::Status { message, .. } => {
                assert_eq!(message.chars().count(), MAX_MESSAGE_LEN + 3);
                assert!(message.ends_with("..."));
            }
            other => panic!("expected Status, got {:?}", other),
        }
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn status_display_omits_empty_body() {
        assert_eq!(ApiError::status(404, "  ").to_string(), "Server responded with 404");
        assert_eq!(
            ApiError::status(500, "boom").to_string(),
            "Server responded with 500: boom"
        );
    }
}
