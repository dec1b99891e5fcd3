//! Error types for the mining-operations API client.
//!
//! # Design
//! Backend-reported failures and transport-level failures are distinct
//! variants: the UI renders backend messages verbatim, while transport
//! failures (unreachable host, aborted request) carry no backend envelope.
//! `NotFound` and `Unauthorized` get dedicated variants because callers
//! route them differently — a missing row is rendered inline, a 401 is
//! handled by the auth redirect collaborator.

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by every service operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the addressed resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 401 — the access token is absent or expired.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-2xx response, with the backend's own message. The
    /// message is forwarded unchanged; this layer never re-validates or
    /// rewrites backend errors.
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (network unreachable, DNS
    /// failure, connection reset).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

/// Error envelope sent by the backend on non-2xx responses.
///
/// `message` is a string for most errors but an array of strings for
/// field-level validation failures, so it is kept as a raw value and
/// flattened in `flatten_message`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: Option<serde_json::Value>,
}

impl ApiError {
    /// Map a non-2xx status plus raw response body to the matching variant.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        match status {
            404 => ApiError::NotFound,
            401 => ApiError::Unauthorized,
            _ => ApiError::Api {
                status,
                message: extract_message(body),
            },
        }
    }
}

/// Pull the human-readable message out of the envelope, falling back to the
/// raw body when the envelope is absent or malformed.
fn extract_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope {
            message: Some(message),
        }) => flatten_message(&message),
        _ => body.to_string(),
    }
}

fn flatten_message(message: &serde_json::Value) -> String {
    match message {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_maps_to_not_found() {
        let err = ApiError::from_status(404, "");
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn status_401_maps_to_unauthorized() {
        let err = ApiError::from_status(401, r#"{"message":"token expired"}"#);
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[test]
    fn envelope_message_is_forwarded_verbatim() {
        let err = ApiError::from_status(
            400,
            r#"{"statusCode":400,"message":"month must be between 1 and 12"}"#,
        );
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "month must be between 1 and 12");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn validation_message_array_is_joined() {
        let err = ApiError::from_status(
            400,
            r#"{"statusCode":400,"message":["firstName should not be empty","lastName should not be empty"]}"#,
        );
        match err {
            ApiError::Api { message, .. } => {
                assert_eq!(
                    message,
                    "firstName should not be empty; lastName should not be empty"
                );
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_used_as_is() {
        let err = ApiError::from_status(502, "Bad Gateway");
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }
}
