//! HTTP client for Tactill API communication.
//!
//! This module provides the [`HttpClient`] type, the single place where
//! requests are sent, status codes are checked and transient failures are
//! retried.

use std::collections::HashMap;

use crate::clients::errors::{ResponseError, TactillError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::retry::RetryPolicy;
use crate::config::{BaseUrl, TactillConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for making requests to the Tactill API.
///
/// The client handles:
/// - URL construction from the configured API root
/// - Default headers, including the `x-api-key` header
/// - The per-request timeout
/// - Retries of transient transport failures, as allowed by the [`RetryPolicy`]
/// - Comparison of the response status with the status the call expects
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// API root, e.g. `https://api4.tactill.com/v1`.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Retry policy for transport failures.
    retry_policy: RetryPolicy,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Network`] if the underlying reqwest client
    /// cannot be created (e.g. TLS initialization failure).
    pub fn new(config: &TactillConfig) -> Result<Self, TactillError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Tactill Rust Library v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.api_key().as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
            retry_policy: *config.retry_policy(),
        })
    }

    /// Returns the API root for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the retry policy for this client.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Sends a request and checks the response status.
    ///
    /// Transport failures accepted by the retry policy are retried after the
    /// policy's backoff. Once retries are exhausted the last transport error
    /// is returned unchanged. A response with any status other than
    /// `request.expected_status` is returned as [`TactillError::Response`]
    /// without retrying.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A transport error occurs and is not retried (`Network`)
    /// - The status code differs from the expected one (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TactillError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                attempt,
                "Sending request to Tactill API"
            );

            let response = match self.send_once(&url, &request).await {
                Ok(response) => response,
                Err(error) if self.retry_policy.should_retry(&error, attempt) => {
                    let delay = self.retry_policy.backoff(attempt - 1);
                    tracing::warn!(
                        "Request to Tactill API at {} failed on attempt {}: {}. Retrying in {:?}",
                        request.path,
                        attempt,
                        error,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }
                Err(error) => return Err(TactillError::Network(error)),
            };

            if response.code != request.expected_status.as_u16() {
                tracing::debug!(
                    "Unexpected status {} from Tactill API at {} (expected {})",
                    response.code,
                    request.path,
                    request.expected_status.as_u16()
                );
                return Err(ResponseError::from_body(response.code, response.body).into());
            }

            return Ok(response);
        }
    }

    /// Performs a single HTTP exchange, reading the whole body.
    async fn send_once(
        &self,
        url: &str,
        request: &HttpRequest,
    ) -> Result<HttpResponse, reqwest::Error> {
        let mut req_builder = self
            .client
            .request(request.http_method.as_reqwest(), url);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let body = res.text().await?;

        Ok(HttpResponse::new(code, body))
    }
}
