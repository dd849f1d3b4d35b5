//! HTTP request types for the Tactill SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder. A request
//! carries the status code the call site expects on success; any other
//! status is turned into a [`ResponseError`](crate::clients::ResponseError).

use std::fmt;

use reqwest::StatusCode;

use crate::clients::errors::InvalidRequestError;

/// HTTP methods used by the Tactill API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// List or read resources.
    Get,
    /// Create a resource.
    Post,
    /// Apply a partial update.
    Put,
    /// Delete a resource.
    Delete,
}

impl HttpMethod {
    pub(crate) const fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request to be sent to the Tactill API.
///
/// # Example
///
/// ```rust
/// use reqwest::StatusCode;
/// use serde_json::json;
/// use tactill::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Post, "catalog/taxes")
///     .expect(StatusCode::CREATED)
///     .body(json!({"name": "TVA 20%", "rate": 20.0}))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.expected_status, StatusCode::CREATED);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the API root (e.g. `catalog/articles`).
    pub path: String,
    /// The status code that signals success for this call.
    pub expected_status: StatusCode,
    /// Query parameters, in the order they are appended to the URL.
    pub query: Vec<(String, String)>,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a new builder. The expected status defaults to `200 OK`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::MissingBody`] for a POST or PUT
    /// request without a body.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidRequestError::MissingBody {
                method: self.http_method,
            });
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    expected_status: StatusCode,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            expected_status: StatusCode::OK,
            query: Vec::new(),
            body: None,
        }
    }

    /// Sets the status code that signals success.
    #[must_use]
    pub const fn expect(mut self, status: StatusCode) -> Self {
        self.expected_status = status;
        self
    }

    /// Replaces all query parameters.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            expected_status: self.expected_status,
            query: self.query,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_builder_defaults_to_ok() {
        let request = HttpRequest::builder(HttpMethod::Get, "catalog/articles")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "catalog/articles");
        assert_eq!(request.expected_status, StatusCode::OK);
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_verify_requires_body_for_post_and_put() {
        let result = HttpRequest::builder(HttpMethod::Post, "catalog/taxes").build();
        assert!(matches!(
            result,
            Err(InvalidRequestError::MissingBody {
                method: HttpMethod::Post
            })
        ));

        let result = HttpRequest::builder(HttpMethod::Put, "catalog/taxes/1").build();
        assert!(matches!(
            result,
            Err(InvalidRequestError::MissingBody {
                method: HttpMethod::Put
            })
        ));
    }

    #[test]
    fn test_delete_needs_no_body() {
        assert!(HttpRequest::builder(HttpMethod::Delete, "catalog/taxes/1")
            .build()
            .is_ok());
    }

    #[test]
    fn test_query_params_keep_insertion_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "catalog/articles")
            .query_param("node_id", "5d70d4e5be8f9f001195ccc1")
            .query_param("limit", "100")
            .query_param("skip", "5")
            .build()
            .unwrap();

        let keys: Vec<&str> = request.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["node_id", "limit", "skip"]);
    }

    #[test]
    fn test_builder_with_body_and_expected_status() {
        let request = HttpRequest::builder(HttpMethod::Post, "stock/movements")
            .expect(StatusCode::CREATED)
            .body(json!({"type": "in"}))
            .build()
            .unwrap();

        assert_eq!(request.expected_status, StatusCode::CREATED);
        assert_eq!(request.body, Some(json!({"type": "in"})));
    }
}
