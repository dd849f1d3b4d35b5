//! Error types returned by Tactill client operations.
//!
//! Every client operation returns [`TactillError`]. Failures are never
//! swallowed: they either surface immediately or, for read timeouts only,
//! after the bounded retries of the [`RetryPolicy`](crate::clients::RetryPolicy).
//!
//! # Error Handling
//!
//! - [`TactillError::Authentication`]: the account lookup at construction failed
//! - [`TactillError::Response`]: the server answered with an unexpected status
//! - [`TactillError::Network`]: a transport failure, including exhausted read timeouts
//! - [`TactillError::Decode`]: a success body did not match the expected record
//! - [`TactillError::InvalidRequest`]: a request could not be shaped before sending
//! - [`TactillError::MissingScope`]: the account carries no company, shop or node
//! - [`TactillError::Validation`]: a client-side field constraint was violated
//!
//! # Example
//!
//! ```rust,ignore
//! use tactill::TactillError;
//!
//! match client.get_article(&id).await {
//!     Ok(article) => println!("{:?}", article.name),
//!     Err(e) if e.is_not_found() => println!("gone"),
//!     Err(TactillError::Response(e)) => {
//!         if let Some(envelope) = e.envelope() {
//!             println!("{} {}: {}", envelope.status_code, envelope.error, envelope.message);
//!         }
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::http_request::HttpMethod;
use crate::error::ValidationError;
use crate::rest::resources::TactillResponse;

/// The body of a failed response.
#[derive(Debug)]
pub enum ResponsePayload {
    /// The body parsed as the acknowledgement envelope.
    Envelope(TactillResponse),
    /// The body was not a valid envelope; the parse failure is kept as is.
    Unparseable(serde_json::Error),
}

/// A response whose status code did not match the one the call expected.
///
/// The raw body is kept next to the parsed payload so no information is
/// lost when the server sends something that is not an envelope.
#[derive(Debug, Error)]
#[error("{}", display_response_error(.code, .payload, .body))]
pub struct ResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// The normalized payload.
    pub payload: ResponsePayload,
}

fn display_response_error(code: &u16, payload: &ResponsePayload, body: &str) -> String {
    match payload {
        ResponsePayload::Envelope(envelope) => {
            format!("{code} {}: {}", envelope.error, envelope.message)
        }
        ResponsePayload::Unparseable(_) => format!("{code}: {body}"),
    }
}

impl ResponseError {
    /// Builds the error from a status code and raw body, parsing the body
    /// as an acknowledgement envelope when possible.
    #[must_use]
    pub fn from_body(code: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let payload = match serde_json::from_str::<TactillResponse>(&body) {
            Ok(envelope) => ResponsePayload::Envelope(envelope),
            Err(e) => ResponsePayload::Unparseable(e),
        };
        Self {
            code,
            body,
            payload,
        }
    }

    /// Returns the parsed envelope, if the body was one.
    #[must_use]
    pub const fn envelope(&self) -> Option<&TactillResponse> {
        match &self.payload {
            ResponsePayload::Envelope(envelope) => Some(envelope),
            ResponsePayload::Unparseable(_) => None,
        }
    }
}

/// Errors raised while shaping a request before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// A POST or PUT request was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: HttpMethod,
    },

    /// A creation payload did not serialize to a JSON object, so the owning
    /// scope identifier cannot be injected.
    #[error("{resource} creation payload must serialize to a JSON object")]
    BodyNotObject {
        /// The resource being created.
        resource: &'static str,
    },

    /// A payload could not be serialized to JSON.
    #[error("Failed to serialize {resource} payload: {reason}")]
    Unserializable {
        /// The resource the payload belongs to.
        resource: &'static str,
        /// The serializer's message.
        reason: String,
    },
}

/// Unified error type for every Tactill client operation.
#[derive(Debug, Error)]
pub enum TactillError {
    /// The account lookup performed at construction did not succeed.
    #[error("Authentication failed: {0}")]
    Authentication(#[source] ResponseError),

    /// The server answered with an unexpected status code.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response did not match the expected record shape.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// The resource being decoded.
        resource: &'static str,
        /// The underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Request shaping failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// The account lists no identifier for a scope the client needs.
    #[error("Account has no {scope} to use as default scope")]
    MissingScope {
        /// The empty scope list (`companies`, `shops` or `nodes`).
        scope: &'static str,
    },

    /// A client-side field constraint was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl TactillError {
    /// Returns the underlying response error for `Authentication` and
    /// `Response` failures.
    #[must_use]
    pub const fn response(&self) -> Option<&ResponseError> {
        match self {
            Self::Authentication(e) | Self::Response(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status code, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response().map(|e| e.code)
    }

    /// Returns the server's acknowledgement envelope, if one was parsed.
    #[must_use]
    pub fn envelope(&self) -> Option<&TactillResponse> {
        self.response().and_then(ResponseError::envelope)
    }

    /// Returns `true` when the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOT_FOUND_BODY: &str = r#"{"statusCode":404,"error":"Not Found","message":"\"article_id\" specified in \"params\" could not be found"}"#;

    #[test]
    fn test_from_body_parses_envelope() {
        let error = ResponseError::from_body(404, NOT_FOUND_BODY);

        let envelope = error.envelope().unwrap();
        assert_eq!(envelope.status_code, 404);
        assert_eq!(envelope.error, "Not Found");
        assert!(envelope.message.contains("article_id"));
    }

    #[test]
    fn test_from_body_keeps_parse_failure_for_malformed_body() {
        let error = ResponseError::from_body(502, "<html>Bad Gateway</html>");

        assert!(error.envelope().is_none());
        assert!(matches!(error.payload, ResponsePayload::Unparseable(_)));
        assert_eq!(error.body, "<html>Bad Gateway</html>");
        assert_eq!(error.to_string(), "502: <html>Bad Gateway</html>");
    }

    #[test]
    fn test_response_error_display_uses_envelope() {
        let error = ResponseError::from_body(404, NOT_FOUND_BODY);
        let message = error.to_string();
        assert!(message.starts_with("404 Not Found:"));
    }

    #[test]
    fn test_tactill_error_accessors() {
        let error = TactillError::Response(ResponseError::from_body(404, NOT_FOUND_BODY));
        assert_eq!(error.status(), Some(404));
        assert!(error.is_not_found());
        assert_eq!(error.envelope().unwrap().error, "Not Found");

        let error = TactillError::MissingScope { scope: "nodes" };
        assert_eq!(error.status(), None);
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_authentication_error_exposes_status() {
        let body = r#"{"statusCode":401,"error":"Unauthorized","message":"Invalid API key"}"#;
        let error = TactillError::Authentication(ResponseError::from_body(401, body));

        assert_eq!(error.status(), Some(401));
        assert!(error.to_string().contains("Authentication failed"));
    }

    #[test]
    fn test_invalid_request_error_messages() {
        let error = InvalidRequestError::MissingBody {
            method: HttpMethod::Put,
        };
        assert_eq!(error.to_string(), "Cannot use PUT without specifying data.");

        let error = InvalidRequestError::BodyNotObject { resource: "Tax" };
        assert!(error.to_string().contains("Tax"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &ResponseError::from_body(400, "{}");
        let _ = response_error;

        let tactill_error: &dyn std::error::Error = &TactillError::MissingScope { scope: "shops" };
        let _ = tactill_error;
    }
}
