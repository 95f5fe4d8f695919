//! Error type for the Ticket Desk transport layer
//!
//! Every failure below the services (network, status, decoding) is
//! normalized into one [`ApiError`] carrying a human-readable message.

use serde::Deserialize;
use thiserror::Error;

/// Fallback message when neither the server nor the transport said anything
pub const GENERIC_MESSAGE: &str = "Request failed";

/// What went wrong underneath the normalized error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Connection could not be made or was interrupted
    Network,
    /// The request exceeded the configured timeout
    Timeout,
    /// The server answered with a non-2xx status
    Status,
    /// The response body did not decode into the expected shape
    Decode,
    /// The request body could not be serialized
    Encode,
}

/// Normalized transport error
///
/// `Display` is the message only, so it can be shown to a user as is.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    status: Option<u16>,
}

/// Error body the service sends alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Creates an error of `kind`, falling back to the generic message
    /// if `message` is blank
    #[must_use]
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind,
            message: if message.trim().is_empty() {
                GENERIC_MESSAGE.to_string()
            } else {
                message
            },
            status: None,
        }
    }

    /// Network failure
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    /// Request timed out
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Timeout, message)
    }

    /// Response body did not decode
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Decode, message)
    }

    /// Request body did not encode
    #[must_use]
    pub fn encode(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Encode, message)
    }

    /// Non-2xx response
    ///
    /// The message is taken from the body's `message` field when present,
    /// otherwise `fallback` (usually the transport's own description of the
    /// status), otherwise the generic message.
    #[must_use]
    pub fn from_status(status: u16, body: &str, fallback: &str) -> Self {
        let server_message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());

        let mut error = Self::new(
            ApiErrorKind::Status,
            server_message.unwrap_or_else(|| fallback.to_string()),
        );
        error.status = Some(status);
        error
    }

    /// Human-readable message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Failure category
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// HTTP status, if the server answered
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Whether the server rejected the request as unauthenticated
    ///
    /// Nothing acts on this yet; it is where session handling plugs in.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self.status, Some(401))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins() {
        let error = ApiError::from_status(
            404,
            r#"{"message":"Ticket not found","statusCode":404}"#,
            "404 Not Found",
        );
        assert_eq!(error.to_string(), "Ticket not found");
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.kind(), ApiErrorKind::Status);
    }

    #[test]
    fn transport_message_when_body_has_none() {
        let error = ApiError::from_status(500, "<html>oops</html>", "500 Internal Server Error");
        assert_eq!(error.message(), "500 Internal Server Error");

        let error = ApiError::from_status(500, r#"{"error":"boom"}"#, "500 Internal Server Error");
        assert_eq!(error.message(), "500 Internal Server Error");
    }

    #[test]
    fn generic_message_as_last_resort() {
        let error = ApiError::from_status(502, "", "");
        assert_eq!(error.message(), GENERIC_MESSAGE);
        assert_eq!(ApiError::network("  ").message(), GENERIC_MESSAGE);
    }

    #[test]
    fn unauthorized_is_distinguishable() {
        assert!(ApiError::from_status(401, "{}", "401 Unauthorized").is_unauthorized());
        assert!(!ApiError::from_status(403, "{}", "403 Forbidden").is_unauthorized());
        assert!(!ApiError::network("network down").is_unauthorized());
    }
}
