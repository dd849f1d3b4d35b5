//! Configuration types for the Tactill SDK.
//!
//! This module provides the configuration used to construct a
//! [`TactillClient`](crate::TactillClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`TactillConfig`]: The configuration struct holding all client settings
//! - [`TactillConfigBuilder`]: A builder for constructing [`TactillConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`TactillId`]: A validated 24 character hexadecimal identifier
//! - [`BaseUrl`]: A validated API root URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use tactill::{ApiKey, TactillConfig};
//!
//! let config = TactillConfig::builder()
//!     .api_key(ApiKey::new("0123456789abcdef01234567").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), tactill::API_URL);
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl, TactillId};

use std::time::Duration;

use crate::clients::RetryPolicy;
use crate::error::ValidationError;

/// The production API root.
pub const API_URL: &str = "https://api4.tactill.com/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for a [`TactillClient`](crate::TactillClient).
///
/// Configuration is fixed once the client is constructed; the client never
/// mutates or refreshes it.
///
/// # Thread Safety
///
/// `TactillConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct TactillConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    timeout: Duration,
    retry_policy: RetryPolicy,
    user_agent_prefix: Option<String>,
}

impl TactillConfig {
    /// Creates a new builder for constructing a `TactillConfig`.
    #[must_use]
    pub fn builder() -> TactillConfigBuilder {
        TactillConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API root every resource path is joined onto.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the retry policy applied to transient transport failures.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify TactillConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TactillConfig>();
};

/// Builder for constructing [`TactillConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: [`API_URL`]
/// - `timeout`: [`DEFAULT_TIMEOUT`]
/// - `retry_policy`: [`RetryPolicy::default`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct TactillConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    retry_policy: Option<RetryPolicy>,
    user_agent_prefix: Option<String>,
}

impl TactillConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Overrides the API root, e.g. to target a staging or mock server.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`TactillConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<TactillConfig, ValidationError> {
        let api_key = self
            .api_key
            .ok_or(ValidationError::MissingRequiredField { field: "api_key" })?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(API_URL)?,
        };

        Ok(TactillConfig {
            api_key,
            base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            retry_policy: self.retry_policy.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
