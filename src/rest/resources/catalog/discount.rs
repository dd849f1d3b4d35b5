//! Discount resource.
//!
//! Discounts are defined per shop. A discount is either a fixed amount
//! ([`DiscountType::Numeric`]) or a percentage ([`DiscountType::Rate`]) and
//! may be limited to a validity window. Window bounds are sent as ISO-8601
//! strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::TactillId;
use crate::rest::resources::common::{Color, RecordMeta};
use crate::rest::{MutableResource, Resource, Scope};

/// How the discount `rate` is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// A fixed amount off.
    Numeric,
    /// A percentage off.
    Rate,
}

/// A discount as stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discount {
    /// Server-assigned fields.
    #[serde(flatten)]
    pub meta: RecordMeta,

    /// The owning shop.
    pub shop_id: TactillId,

    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Amount or percentage, depending on the discount type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,

    /// Whether `rate` is an amount or a percentage.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,

    /// First moment the discount applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    /// Last moment the discount applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,

    /// Barcode scanned at the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Short label shown on the register button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_text: Option<String>,

    /// Display color on the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Discount {
    /// Returns `true` when `at` falls inside the validity window. Open
    /// bounds always match.
    #[must_use]
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.start_date.map_or(true, |start| start <= at)
            && self.end_date.map_or(true, |end| at <= end)
    }
}

/// Payload creating a discount. Only `name` is required.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct DiscountCreation {
    /// Display name.
    pub name: String,

    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Amount or percentage, depending on the discount type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,

    /// Whether `rate` is an amount or a percentage.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,

    /// First moment the discount applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    /// Last moment the discount applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,

    /// Barcode scanned at the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Short label shown on the register button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_text: Option<String>,

    /// Display color on the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl DiscountCreation {
    /// Creates a payload with a name and nothing else.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Sparse patch for a discount.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct DiscountModification {
    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Amount or percentage, depending on the discount type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,

    /// Whether `rate` is an amount or a percentage.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,

    /// First moment the discount applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    /// Last moment the discount applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,

    /// Barcode scanned at the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Short label shown on the register button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_text: Option<String>,

    /// Display color on the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Resource for Discount {
    type Creation = DiscountCreation;

    const NAME: &'static str = "Discount";
    const PATH: &'static str = "catalog/discounts";
    const SCOPE: Scope = Scope::Shop;
}

impl MutableResource for Discount {
    type Modification = DiscountModification;
}
