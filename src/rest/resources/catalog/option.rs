//! Option and option list resources.
//!
//! An option is a priced add-on (e.g. "extra shot"). Option lists group
//! options and state whether the cashier may pick several and whether a
//! pick is mandatory. Articles reference option lists.

use serde::{Deserialize, Serialize};

use crate::config::TactillId;
use crate::error::ValidationError;
use crate::rest::resources::common::RecordMeta;
use crate::rest::{MutableResource, Resource, Scope};

/// An option list as stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionList {
    /// Server-assigned fields.
    #[serde(flatten)]
    pub meta: RecordMeta,

    /// The owning node.
    pub node_id: TactillId,

    /// The options offered by this list.
    #[serde(default)]
    pub options: Vec<TactillId>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether several options may be picked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,

    /// Whether a pick is required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandatory: Option<bool>,
}

/// Payload creating an option list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OptionListCreation {
    /// Display name.
    pub name: String,

    /// Options the list offers.
    pub options: Vec<TactillId>,

    /// Whether several options can be picked together.
    pub multiple: bool,

    /// Whether one option must be picked.
    pub mandatory: bool,
}

impl OptionListCreation {
    /// Creates a single-choice, optional list from raw option identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] naming `options[i]` when an
    /// identifier is malformed.
    pub fn new<S: AsRef<str>>(
        name: impl Into<String>,
        options: &[S],
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.into(),
            options: TactillId::list("options", options.iter().map(AsRef::as_ref))?,
            multiple: false,
            mandatory: false,
        })
    }
}

/// Sparse patch for an option list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct OptionListModification {
    /// Options the list offers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<TactillId>>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether several options can be picked together.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,

    /// Whether one option must be picked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandatory: Option<bool>,
}

impl Resource for OptionList {
    type Creation = OptionListCreation;

    const NAME: &'static str = "OptionList";
    const PATH: &'static str = "catalog/option_lists";
    const SCOPE: Scope = Scope::Node;
}

impl MutableResource for OptionList {
    type Modification = OptionListModification;
}

/// An option as stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogOption {
    /// Server-assigned fields.
    #[serde(flatten)]
    pub meta: RecordMeta,

    /// The owning node.
    pub node_id: TactillId,

    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Price added to the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Payload creating an option.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogOptionCreation {
    /// Display name.
    pub name: String,

    /// Price added to the article.
    pub price: f64,

    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
}

impl CatalogOptionCreation {
    /// Creates a payload for an option adding `price` to the article.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            test: None,
        }
    }
}

/// Sparse patch for an option.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct CatalogOptionModification {
    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Price added to the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Resource for CatalogOption {
    type Creation = CatalogOptionCreation;

    const NAME: &'static str = "Option";
    const PATH: &'static str = "catalog/options";
    const SCOPE: Scope = Scope::Node;
}

impl MutableResource for CatalogOption {
    type Modification = CatalogOptionModification;
}
