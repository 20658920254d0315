//! Error types for resource-manager API calls
//!
//! Every transport failure and non-success HTTP status surfaces to the
//! caller unchanged; this layer never retries or swallows errors.

use serde_json::Value;

/// Errors returned by the SDK
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or missing arguments, caught before any request is sent
    #[error("invalid request: {0}")]
    Validation(String),

    /// Server returned 404
    #[error("not found: {0}")]
    NotFound(String),

    /// Server returned 409 (e.g. duplicate name)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other non-2xx response
    #[error("API request failed: {status} - {message}")]
    Api { status: u16, message: String },

    /// Network-level failure or undecodable response
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Map a non-success HTTP status and response body to an error variant.
    ///
    /// The server's message is preserved verbatim so callers can diagnose
    /// failures precisely.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        match status {
            404 => Error::NotFound(message),
            409 => Error::Conflict(message),
            _ => Error::Api { status, message },
        }
    }

    /// HTTP status associated with this error, when one exists
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::NotFound(_) => Some(404),
            Error::Conflict(_) => Some(409),
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Servers answer with `{"message": ...}` or `{"error": {"message": ...}}`
/// depending on the endpoint; fall back to the raw body when neither fits.
fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("message").and_then(|v| v.as_str()) {
            return message.to_string();
        }
        if let Some(message) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
        {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "(no response body)".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_maps_to_not_found() {
        let err = Error::from_status(404, r#"{"message": "label l1 does not exist"}"#);
        assert!(matches!(err, Error::NotFound(ref m) if m == "label l1 does not exist"));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn status_409_maps_to_conflict() {
        let err = Error::from_status(409, r#"{"message": "duplicate name"}"#);
        assert!(matches!(err, Error::Conflict(ref m) if m == "duplicate name"));
    }

    #[test]
    fn other_statuses_map_to_api() {
        let err = Error::from_status(400, r#"{"error": {"message": "bad field"}}"#);
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "bad field");
            },
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_kept_raw() {
        let err = Error::from_status(502, "upstream exploded");
        match err {
            Error::Api { message, .. } => assert_eq!(message, "upstream exploded"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn empty_body_gets_placeholder() {
        let err = Error::from_status(500, "");
        match err {
            Error::Api { message, .. } => assert_eq!(message, "(no response body)"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
