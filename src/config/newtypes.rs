//! Validated newtype wrappers for identifiers and configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ValidationError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of every Tactill identifier.
const ID_LENGTH: usize = 24;

fn is_tactill_id(value: &str) -> bool {
    value.len() == ID_LENGTH && value.chars().all(|c| c.is_ascii_hexdigit())
}

/// A validated Tactill identifier.
///
/// Companies, shops, nodes and every catalog record are identified by a
/// 24 character hexadecimal string. Case is preserved as given.
///
/// # Example
///
/// ```rust
/// use tactill::TactillId;
///
/// let id = TactillId::new("5d70d4e5be8f9f001195ccc1").unwrap();
/// assert_eq!(id.as_ref(), "5d70d4e5be8f9f001195ccc1");
///
/// assert!(TactillId::new("1").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TactillId(String);

impl TactillId {
    /// Creates a new validated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] if the value is not exactly
    /// 24 hexadecimal characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !is_tactill_id(&value) {
            return Err(ValidationError::InvalidId { value });
        }
        Ok(Self(value))
    }

    /// Validates a list of identifiers, labelling failures with `field[index]`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] for the first invalid entry.
    pub fn list<I, S>(field: &str, values: I) -> Result<Vec<Self>, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| Self::new(value).map_err(|e| e.at(format!("{field}[{index}]"))))
            .collect()
    }
}

impl AsRef<str> for TactillId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TactillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TactillId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for TactillId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for TactillId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TactillId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Tactill API key.
///
/// API keys follow the identifier pattern. The `Debug` implementation masks
/// the value so keys do not leak into logs.
///
/// # Example
///
/// ```rust
/// use tactill::ApiKey;
///
/// let key = ApiKey::new("0123456789abcdef01234567").unwrap();
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidApiKey`] if the key is empty or does
    /// not match the identifier pattern.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if !is_tactill_id(&key) {
            return Err(ValidationError::InvalidApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated API root URL.
///
/// Trailing slashes are stripped so paths can be appended with a single `/`.
///
/// # Example
///
/// ```rust
/// use tactill::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8080/v1/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080/v1");
/// assert_eq!(url.join("catalog/articles"), "http://localhost:8080/v1/catalog/articles");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBaseUrl`] if the URL has no
    /// `http://` or `https://` scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ValidationError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        match host {
            Some(rest) if !rest.is_empty() && !rest.starts_with('/') => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ValidationError::InvalidBaseUrl { url }),
        }
    }

    /// Joins a resource path onto the base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
