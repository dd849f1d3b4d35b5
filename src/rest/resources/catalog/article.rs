//! Article resource.
//!
//! Articles are the sellable items of a node's catalog. An article belongs
//! to one category, carries its taxes and may define declinations: priced
//! variants such as a size or flavor combination.
//!
//! # Example
//!
//! ```rust,ignore
//! use tactill::rest::resources::{ArticleCreation, ArticleModification, Color};
//!
//! let creation = ArticleCreation::new(
//!     "Espresso",
//!     "5d70d4e5be8f9f001195ccc1",
//!     &["5d70d4e5be8f9f001195ccc2"],
//! )?;
//! let article = client.create_article(&creation).await?;
//!
//! let patch = ArticleModification {
//!     full_price: Some(1.8),
//!     ..Default::default()
//! };
//! client.update_article(&article.meta.id, &patch).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::config::TactillId;
use crate::error::ValidationError;
use crate::rest::resources::common::{Color, RecordMeta};
use crate::rest::{MutableResource, Resource, Scope};

/// Unit an article is sold by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    /// Sold by the piece.
    #[default]
    #[serde(rename = "")]
    None,
    /// Kilogram.
    #[serde(rename = "kg")]
    Kilogram,
    /// Liter.
    #[serde(rename = "l")]
    Liter,
    /// Meter.
    #[serde(rename = "m")]
    Meter,
    /// Minute.
    #[serde(rename = "min")]
    Minute,
}

/// A value of a variation axis, e.g. `Large` for `Size`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValuePair {
    /// Display order.
    pub priority: f64,
    /// The value.
    pub value: String,
}

/// A variation axis of an article and its possible values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleVariationOptions {
    /// Axis name, e.g. `Size`.
    pub key: String,
    /// Possible values.
    pub values: Vec<ValuePair>,
    /// Display order.
    pub priority: f64,
}

/// The value a declination takes on one variation axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleVariation {
    /// Axis name.
    pub key: String,
    /// Selected value.
    pub value: String,
    /// Display order.
    pub priority: f64,
}

/// A priced variant of an article.
///
/// Prices and stock fields override the parent article's when set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ArticleDeclination {
    /// Declination identifier, unique within the article.
    pub id: String,

    /// Whether the record has been soft-deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Taxes applied to this declination.
    #[serde(default)]
    pub taxes: Vec<TactillId>,

    /// Whether the price is entered at sale time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_price: Option<bool>,

    /// Price including taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_price: Option<f64>,

    /// Price excluding taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxfree_price: Option<f64>,

    /// Barcode scanned at the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Internal or supplier reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Weight of one unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Whether stock is tracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,

    /// Whether sales ignore the stock level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_stock: Option<bool>,

    /// Purchase price paid to the supplier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<f64>,

    /// Variation axes the declinations are built from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<ArticleVariation>>,

    /// Units in stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<f64>,
}

/// An article as stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    /// Server-assigned fields.
    #[serde(flatten)]
    pub meta: RecordMeta,

    /// The owning node.
    pub node_id: TactillId,

    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Whether this is the node's default article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    /// The category the article is filed under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<TactillId>,

    /// Discounts applied automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<TactillId>>,

    /// Taxes applied on sale.
    #[serde(default)]
    pub taxes: Vec<TactillId>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short label shown on the register button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_text: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// URL of the display image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Display color on the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    /// Price including taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_price: Option<f64>,

    /// Price excluding taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxfree_price: Option<f64>,

    /// Barcode scanned at the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Internal or supplier reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Unit the article is sold by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,

    /// Weight of one unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Whether stock is tracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,

    /// Whether sales ignore the stock level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_stock: Option<bool>,

    /// Purchase price paid to the supplier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<f64>,

    /// Variation axes the declinations are built from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<ArticleVariationOptions>>,

    /// Priced variants of the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declinations: Option<Vec<ArticleDeclination>>,

    /// Option lists offered with the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<TactillId>>,

    /// Units in stock. Changed by stock movements only.
    #[serde(default)]
    pub stock_quantity: f64,
}

/// Payload creating an article.
///
/// `name`, `category_id` and `taxes` are required. Every other field is
/// left out of the request body unless set.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArticleCreation {
    /// Display name.
    pub name: String,

    /// The category the article is filed under.
    pub category_id: TactillId,

    /// Taxes applied on sale.
    pub taxes: Vec<TactillId>,

    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Discounts applied automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<TactillId>>,

    /// Short label shown on the register button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_text: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// URL of the display image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Display color on the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    /// Price including taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_price: Option<f64>,

    /// Price excluding taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxfree_price: Option<f64>,

    /// Barcode scanned at the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Internal or supplier reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Unit the article is sold by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,

    /// Weight of one unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Whether stock is tracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,

    /// Whether sales ignore the stock level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_stock: Option<bool>,

    /// Purchase price paid to the supplier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<f64>,

    /// Variation axes the declinations are built from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<ArticleVariationOptions>>,

    /// Priced variants of the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declinations: Option<Vec<ArticleDeclination>>,

    /// Option lists offered with the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<TactillId>>,
}

impl ArticleCreation {
    /// Creates a payload from raw identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] naming `category_id` or
    /// `taxes[i]` when an identifier is malformed.
    pub fn new<S: AsRef<str>>(
        name: impl Into<String>,
        category_id: &str,
        taxes: &[S],
    ) -> Result<Self, ValidationError> {
        let category_id = TactillId::new(category_id).map_err(|e| e.at("category_id"))?;
        let taxes = TactillId::list("taxes", taxes.iter().map(AsRef::as_ref))?;

        Ok(Self {
            name: name.into(),
            category_id,
            taxes,
            test: None,
            discounts: None,
            icon_text: None,
            summary: None,
            image: None,
            color: None,
            full_price: None,
            taxfree_price: None,
            barcode: None,
            reference: None,
            unit: None,
            weight: None,
            in_stock: None,
            ignore_stock: None,
            buy_price: None,
            variations: None,
            declinations: None,
            options: None,
        })
    }
}

/// Sparse patch for an article. Only the fields set are sent.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct ArticleModification {
    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// The category the article is filed under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<TactillId>,

    /// Discounts applied automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<TactillId>>,

    /// Taxes applied on sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes: Option<Vec<TactillId>>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short label shown on the register button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_text: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// URL of the display image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Display color on the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    /// Price including taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_price: Option<f64>,

    /// Price excluding taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxfree_price: Option<f64>,

    /// Barcode scanned at the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Internal or supplier reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Unit the article is sold by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,

    /// Weight of one unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Whether stock is tracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,

    /// Whether sales ignore the stock level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_stock: Option<bool>,

    /// Purchase price paid to the supplier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<f64>,

    /// Variation axes the declinations are built from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<ArticleVariationOptions>>,

    /// Priced variants of the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declinations: Option<Vec<ArticleDeclination>>,

    /// Option lists offered with the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<TactillId>>,
}

impl Resource for Article {
    type Creation = ArticleCreation;

    const NAME: &'static str = "Article";
    const PATH: &'static str = "catalog/articles";
    const SCOPE: Scope = Scope::Node;
}

impl MutableResource for Article {
    type Modification = ArticleModification;
}
