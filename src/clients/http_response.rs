//! HTTP response type for the Tactill SDK.

use serde::de::DeserializeOwned;

use crate::clients::errors::TactillError;

/// A successful response from the Tactill API.
///
/// The body is kept as text so it can be decoded into whichever record the
/// call site expects.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(code: u16, body: impl Into<String>) -> Self {
        Self {
            code,
            body: body.into(),
        }
    }

    /// Decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self, resource: &'static str) -> Result<T, TactillError> {
        serde_json::from_str(&self.body).map_err(|source| TactillError::Decode { resource, source })
    }
}
