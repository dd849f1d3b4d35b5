//! Tax resource.

use serde::{Deserialize, Serialize};

use crate::config::TactillId;
use crate::rest::resources::common::RecordMeta;
use crate::rest::{MutableResource, Resource, Scope};

/// A tax as stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tax {
    /// Server-assigned fields.
    #[serde(flatten)]
    pub meta: RecordMeta,

    /// The owning company.
    pub company_id: TactillId,

    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Whether new articles get this tax by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the rate is included in displayed prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_price: Option<bool>,

    /// Rate in percent, e.g. `20.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

/// Payload creating a tax.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaxCreation {
    /// Display name.
    pub name: String,

    /// Rate in percent.
    pub rate: f64,

    /// Whether this is the default tax applied to new articles.
    pub is_default: bool,

    /// Whether the tax is included in displayed prices.
    pub in_price: bool,

    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
}

impl TaxCreation {
    /// Creates a non-default tax included in prices.
    #[must_use]
    pub fn new(name: impl Into<String>, rate: f64) -> Self {
        Self {
            name: name.into(),
            rate,
            is_default: false,
            in_price: true,
            test: None,
        }
    }
}

/// Sparse patch for a tax.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct TaxModification {
    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Whether this is the default tax applied to new articles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the tax is included in displayed prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_price: Option<bool>,

    /// Rate in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

impl Resource for Tax {
    type Creation = TaxCreation;

    const NAME: &'static str = "Tax";
    const PATH: &'static str = "catalog/taxes";
    const SCOPE: Scope = Scope::Company;
}

impl MutableResource for Tax {
    type Modification = TaxModification;
}
