//! Category resource.
//!
//! Categories group articles on the register. They are shared by every shop
//! and node of a company.

use serde::{Deserialize, Serialize};

use crate::config::TactillId;
use crate::rest::resources::common::{Color, RecordMeta};
use crate::rest::{MutableResource, Resource, Scope};

/// A category as stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Server-assigned fields.
    #[serde(flatten)]
    pub meta: RecordMeta,

    /// The owning company.
    pub company_id: TactillId,

    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Whether this is the company's default category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    /// URL of the display image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Display color on the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    /// Short label shown on the register button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_text: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Payload creating a category. Only `name` is required.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct CategoryCreation {
    /// Display name.
    pub name: String,

    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// URL of the display image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Display color on the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    /// Short label shown on the register button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_text: Option<String>,
}

impl CategoryCreation {
    /// Creates a payload with a name and nothing else.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Sparse patch for a category.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct CategoryModification {
    /// Whether the record belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// URL of the display image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Display color on the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    /// Short label shown on the register button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_text: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Resource for Category {
    type Creation = CategoryCreation;

    const NAME: &'static str = "Category";
    const PATH: &'static str = "catalog/categories";
    const SCOPE: Scope = Scope::Company;
}

impl MutableResource for Category {
    type Modification = CategoryModification;
}
