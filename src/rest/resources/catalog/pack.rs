//! Pack resource.
//!
//! A pack bundles several articles and sells them at its own price.

use serde::{Deserialize, Serialize};

use crate::config::TactillId;
use crate::error::ValidationError;
use crate::rest::resources::common::RecordMeta;
use crate::rest::{MutableResource, Resource, Scope};

/// A pack as stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pack {
    /// Server-assigned fields.
    #[serde(flatten)]
    pub meta: RecordMeta,

    /// The owning node.
    pub node_id: TactillId,

    /// Bundled articles.
    #[serde(default)]
    pub articles: Vec<TactillId>,

    /// Price of the pack including taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_price: Option<f64>,

    /// Price of the pack excluding taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxfree_price: Option<f64>,

    /// Taxes applied on sale.
    #[serde(default)]
    pub taxes: Vec<TactillId>,

    /// Discounts applied to the pack.
    #[serde(default)]
    pub discounts: Vec<TactillId>,
}

/// Payload creating a pack.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PackCreation {
    /// Articles bundled in the pack.
    pub articles: Vec<TactillId>,

    /// Taxes applied on sale.
    pub taxes: Vec<TactillId>,

    /// Discounts applied to the pack.
    pub discounts: Vec<TactillId>,

    /// Price of the pack including taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_price: Option<f64>,

    /// Price of the pack excluding taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxfree_price: Option<f64>,
}

impl PackCreation {
    /// Creates a payload from raw identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] naming the offending entry,
    /// e.g. `articles[2]`.
    pub fn new<A, T, D>(
        articles: &[A],
        taxes: &[T],
        discounts: &[D],
    ) -> Result<Self, ValidationError>
    where
        A: AsRef<str>,
        T: AsRef<str>,
        D: AsRef<str>,
    {
        Ok(Self {
            articles: TactillId::list("articles", articles.iter().map(AsRef::as_ref))?,
            taxes: TactillId::list("taxes", taxes.iter().map(AsRef::as_ref))?,
            discounts: TactillId::list("discounts", discounts.iter().map(AsRef::as_ref))?,
            full_price: None,
            taxfree_price: None,
        })
    }
}

/// Sparse patch for a pack.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct PackModification {
    /// Articles bundled in the pack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub articles: Option<Vec<TactillId>>,

    /// Price of the pack including taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_price: Option<f64>,

    /// Price of the pack excluding taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxfree_price: Option<f64>,

    /// Taxes applied on sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes: Option<Vec<TactillId>>,

    /// Discounts applied to the pack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<TactillId>>,
}

impl Resource for Pack {
    type Creation = PackCreation;

    const NAME: &'static str = "Pack";
    const PATH: &'static str = "catalog/packs";
    const SCOPE: Scope = Scope::Node;
}

impl MutableResource for Pack {
    type Modification = PackModification;
}
