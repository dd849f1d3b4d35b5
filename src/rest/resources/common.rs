//! Types shared by every resource.
//!
//! - [`RecordMeta`]: server-assigned fields carried by every stored record
//! - [`TactillResponse`]: the acknowledgement envelope returned by updates
//!   and deletes, and the payload of failed responses
//! - [`Color`]: the fixed palette of display colors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::TactillId;

/// Server-assigned fields shared by every stored record.
///
/// The identifier never changes. `version` grows by one on every successful
/// update, `updated_at` moves with it and `created_at` stays fixed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordMeta {
    /// The record identifier.
    #[serde(rename = "_id")]
    pub id: TactillId,

    /// The revision counter.
    #[serde(rename = "__v", default)]
    pub version: i64,

    /// Whether the record has been soft-deleted.
    #[serde(default)]
    pub deprecated: bool,

    /// When the record was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the record was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Identifier of the record this one was cloned or migrated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_id: Option<String>,
}

/// Field-level detail attached to a validation failure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ValidationDetail {
    /// Where the invalid data came from (`payload`, `query`, `params`).
    #[serde(default)]
    pub source: String,

    /// Paths of the offending keys.
    #[serde(default)]
    pub keys: Vec<String>,
}

/// The acknowledgement envelope.
///
/// Returned as the value of update and delete calls, and carried by
/// [`ResponseError`](crate::clients::ResponseError) when a call fails.
///
/// # Example
///
/// ```rust
/// use tactill::rest::resources::TactillResponse;
///
/// let body = r#"{
///     "statusCode": 400,
///     "error": "Bad Request",
///     "message": "\"name\" is not allowed to be empty",
///     "validation": {"source": "payload", "keys": ["name"]}
/// }"#;
///
/// let envelope: TactillResponse = serde_json::from_str(body).unwrap();
/// assert_eq!(envelope.status_code, 400);
/// assert_eq!(envelope.validation.unwrap().keys, vec!["name"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TactillResponse {
    /// The HTTP status code echoed by the server.
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// Short error label, e.g. `Not Found`. Empty on acknowledgements.
    #[serde(default)]
    pub error: String,

    /// Human-readable message.
    #[serde(default)]
    pub message: String,

    /// Field-level validation detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationDetail>,
}

/// Display color of articles, categories and discounts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// `#57DB47`, the default.
    #[default]
    #[serde(rename = "#57DB47", alias = "#57db47")]
    Green,
    /// `#6868DC`.
    #[serde(rename = "#6868DC", alias = "#6868dc")]
    Indigo,
    /// `#30BEA5`.
    #[serde(rename = "#30BEA5", alias = "#30bea5")]
    Teal,
    /// `#F44F60`.
    #[serde(rename = "#F44F60", alias = "#f44f60")]
    Red,
    /// `#1E8CFF`.
    #[serde(rename = "#1E8CFF", alias = "#1e8cff")]
    Blue,
    /// `#F2BA43`.
    #[serde(rename = "#F2BA43", alias = "#f2ba43")]
    Yellow,
    /// `#B455C8`.
    #[serde(rename = "#B455C8", alias = "#b455c8")]
    Purple,
    /// `#FF6347`.
    #[serde(rename = "#FF6347", alias = "#ff6347")]
    Tomato,
    /// `#A06E58`.
    #[serde(rename = "#A06E58", alias = "#a06e58")]
    Brown,
    /// `#9EA09E`.
    #[serde(rename = "#9EA09E", alias = "#9ea09e")]
    Grey,
}

impl Color {
    /// Every palette entry.
    pub const ALL: [Self; 10] = [
        Self::Green,
        Self::Indigo,
        Self::Teal,
        Self::Red,
        Self::Blue,
        Self::Yellow,
        Self::Purple,
        Self::Tomato,
        Self::Brown,
        Self::Grey,
    ];

    /// Returns the hex code sent to the API.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#57DB47",
            Self::Indigo => "#6868DC",
            Self::Teal => "#30BEA5",
            Self::Red => "#F44F60",
            Self::Blue => "#1E8CFF",
            Self::Yellow => "#F2BA43",
            Self::Purple => "#B455C8",
            Self::Tomato => "#FF6347",
            Self::Brown => "#A06E58",
            Self::Grey => "#9EA09E",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hex())
    }
}

impl std::str::FromStr for Color {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.hex().eq_ignore_ascii_case(s))
            .ok_or_else(|| crate::error::ValidationError::InvalidField {
                field: "color".to_string(),
                reason: format!("'{s}' is not in the color palette"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_meta_deserializes_server_fields() {
        let meta: RecordMeta = serde_json::from_value(json!({
            "_id": "5e1f2a3b4c5d6e7f8a9b0c1d",
            "__v": 3,
            "deprecated": false,
            "created_at": "2024-03-01T10:00:00.000Z",
            "updated_at": "2024-03-02T11:30:00.000Z"
        }))
        .unwrap();

        assert_eq!(meta.id.as_ref(), "5e1f2a3b4c5d6e7f8a9b0c1d");
        assert_eq!(meta.version, 3);
        assert!(meta.created_at.unwrap() < meta.updated_at.unwrap());
        assert!(meta.original_id.is_none());
    }

    #[test]
    fn test_record_meta_tolerates_absent_optional_fields() {
        let meta: RecordMeta =
            serde_json::from_value(json!({"_id": "5e1f2a3b4c5d6e7f8a9b0c1d"})).unwrap();

        assert_eq!(meta.version, 0);
        assert!(!meta.deprecated);
        assert!(meta.created_at.is_none());
    }

    #[test]
    fn test_record_meta_rejects_malformed_id() {
        let result: Result<RecordMeta, _> = serde_json::from_value(json!({"_id": "42"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_acknowledgement_without_error_label() {
        let envelope: TactillResponse =
            serde_json::from_str(r#"{"statusCode":200,"message":"Article updated"}"#).unwrap();

        assert_eq!(envelope.status_code, 200);
        assert!(envelope.error.is_empty());
        assert!(envelope.validation.is_none());
    }

    #[test]
    fn test_envelope_requires_status_code() {
        let result: Result<TactillResponse, _> = serde_json::from_str(r#"{"message":"hello"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_color_serializes_to_hex() {
        assert_eq!(serde_json::to_value(Color::Blue).unwrap(), json!("#1E8CFF"));
        assert_eq!(Color::default(), Color::Green);
    }

    #[test]
    fn test_color_accepts_lowercase_hex() {
        let color: Color = serde_json::from_value(json!("#f44f60")).unwrap();
        assert_eq!(color, Color::Red);
        assert_eq!("#9ea09e".parse::<Color>().unwrap(), Color::Grey);
    }

    #[test]
    fn test_color_outside_palette_is_rejected() {
        let result: Result<Color, _> = serde_json::from_value(json!("#000000"));
        assert!(result.is_err());

        let error = "#000000".parse::<Color>().unwrap_err();
        assert!(error.to_string().contains("color"));
    }

    #[test]
    fn test_palette_hex_codes_are_distinct() {
        for (i, a) in Color::ALL.iter().enumerate() {
            for b in &Color::ALL[i + 1..] {
                assert_ne!(a.hex(), b.hex());
            }
        }
    }
}
