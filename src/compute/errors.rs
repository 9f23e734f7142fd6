//! Compute API error types
//!
//! Maps failed API responses into structured errors carrying the provider's
//! status code and message.

use serde::Deserialize;
use thiserror::Error;

/// Error returned by the compute API.
///
/// Two errors are equal when status code and message both match; identity
/// never enters into it. The message is the provider's own text, surfaced
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("compute API error {code}: {message}")]
pub struct ApiError {
    /// HTTP status code of the failed response
    pub code: u16,
    /// Provider's error message
    pub message: String,
}

/// Coarse classification of an [`ApiError`], derived from the status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Server,
    Other,
}

/// Wire shape of an error reply: `{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Deserialize)]
struct ErrorReply {
    error: ErrorStatus,
}

#[derive(Debug, Deserialize)]
struct ErrorStatus {
    #[serde(default)]
    message: String,
}

impl ApiError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Build an error from a failed response body.
    ///
    /// Extracts the message from the provider's structured error reply;
    /// falls back to the raw body when the reply has some other shape.
    pub fn from_body(code: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorReply>(body) {
            Ok(reply) => reply.error.message,
            Err(_) => body.trim().to_string(),
        };
        Self { code, message }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.code {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::Other,
        }
    }
}

/// Failure of a compute API call: either the provider rejected the request
/// or the request never produced a response at all.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_parses_structured_reply() {
        let err = ApiError::from_body(404, r#"{"error": {"code": 404, "message": "boom!"}}"#);
        assert_eq!(err, ApiError::new(404, "boom!"));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_from_body_falls_back_to_raw_body() {
        let err = ApiError::from_body(502, "upstream connect error\n");
        assert_eq!(err.message, "upstream connect error");
        assert_eq!(err.kind(), ErrorKind::Server);
    }

    #[test]
    fn test_from_body_tolerates_missing_message() {
        let err = ApiError::from_body(409, r#"{"error": {"code": 409}}"#);
        assert_eq!(err.message, "");
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_equal_code_and_message_compare_equal() {
        assert_eq!(ApiError::new(404, "boom!"), ApiError::new(404, "boom!"));
    }

    #[test]
    fn test_differing_code_or_message_compare_unequal() {
        assert_ne!(ApiError::new(404, "boom!"), ApiError::new(409, "boom!"));
        assert_ne!(ApiError::new(404, "boom!"), ApiError::new(404, "bang!"));
    }

    #[test]
    fn test_kind_buckets() {
        assert_eq!(ApiError::new(400, "").kind(), ErrorKind::BadRequest);
        assert_eq!(ApiError::new(401, "").kind(), ErrorKind::Unauthorized);
        assert_eq!(ApiError::new(403, "").kind(), ErrorKind::Forbidden);
        assert_eq!(ApiError::new(503, "").kind(), ErrorKind::Server);
        assert_eq!(ApiError::new(418, "").kind(), ErrorKind::Other);
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = ApiError::new(409, "already exists");
        assert_eq!(err.to_string(), "compute API error 409: already exists");
    }
}
