//! Stock movement resource.
//!
//! A movement is an immutable ledger entry moving stock in or out of a shop.
//! Each entry lists the articles it touches; creating an `in` movement of
//! `n` units raises the article's `stock_quantity` by `n`, an `out` movement
//! lowers it. Movements can be listed and created but never updated or
//! deleted.
//!
//! # Example
//!
//! ```rust,ignore
//! use tactill::rest::resources::{ArticleMovement, MovementCreation, MovementState, MovementType};
//!
//! let line = ArticleMovement::new(&article.meta.id, "Espresso", "Boissons", 12.0);
//! let creation = MovementCreation::new(MovementType::In, MovementState::Done, vec![line]);
//! let movement = client.create_movement(&creation).await?;
//! ```

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::TactillId;
use crate::rest::resources::common::RecordMeta;
use crate::rest::{Resource, Scope};

/// Direction of a movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum MovementType {
    /// No direction recorded.
    #[default]
    #[serde(rename = "")]
    Unspecified,
    /// Stock entering the shop.
    #[serde(rename = "in")]
    In,
    /// Stock leaving the shop.
    #[serde(rename = "out")]
    Out,
}

impl MovementType {
    /// Sign applied to the moved units: `1` for in, `-1` for out.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::In => 1,
            Self::Out => -1,
            Self::Unspecified => 0,
        }
    }
}

/// Progress of a movement or of one of its lines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MovementState {
    /// Scheduled, no stock has moved yet.
    Planned,
    /// Some lines are done, others are still planned.
    Partial,
    /// Stock has moved.
    Done,
}

/// Why stock left the shop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MovementMotive {
    /// Sent to another shop.
    Transfer,
    /// Can no longer be sold, e.g. expired.
    Unsaleable,
    /// Damaged or defective.
    Faulty,
}

/// Device a movement line was recorded on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// The iPhone app.
    Iphone,
    /// The iPad register.
    Ipad,
    /// The web back office.
    Backoffice,
}

/// One article line of a movement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleMovement {
    /// The moved article.
    pub article_id: TactillId,

    /// The moved declination, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declination_id: Option<String>,

    /// Article name at the time of the movement.
    pub article_name: String,

    /// Declination name at the time of the movement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declination_name: Option<String>,

    /// Category name at the time of the movement.
    pub category_name: String,

    /// Reference of the moved article.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Barcode of the moved article.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Progress of this line.
    pub state: MovementState,

    /// Number of units moved. Always positive; the direction comes from the
    /// movement type.
    pub units: f64,

    /// When the line is planned, as an ISO-8601 timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_on: Option<String>,

    /// When the line was completed, as an ISO-8601 timestamp.
    #[serde(default = "now_iso8601")]
    pub done_on: String,

    /// Kind of device the line was recorded on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,

    /// Name of the device the line was recorded on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,

    /// Account that recorded the line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,

    /// Unit purchase price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<f64>,

    /// Unit price the stock left at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_price: Option<f64>,
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl ArticleMovement {
    /// Creates a completed line, timestamped now.
    #[must_use]
    pub fn new(
        article_id: &TactillId,
        article_name: impl Into<String>,
        category_name: impl Into<String>,
        units: f64,
    ) -> Self {
        Self {
            article_id: article_id.clone(),
            declination_id: None,
            article_name: article_name.into(),
            declination_name: None,
            category_name: category_name.into(),
            reference: None,
            barcode: None,
            state: MovementState::Done,
            units,
            planned_on: None,
            done_on: now_iso8601(),
            device_type: None,
            device_name: None,
            account_name: None,
            buy_price: None,
            out_price: None,
        }
    }
}

/// A movement as stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movement {
    /// Server-assigned fields.
    #[serde(flatten)]
    pub meta: RecordMeta,

    /// The owning shop.
    pub shop_id: TactillId,

    /// Sequential movement number within the shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,

    /// Whether the movement belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Names of the accounts that validated the movement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validated_by: Option<Vec<String>>,

    /// Direction of the movement.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub movement_type: Option<MovementType>,

    /// Progress of the movement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<MovementState>,

    /// Why stock left the shop. Only meaningful for `out` movements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motive: Option<MovementMotive>,

    /// Free-form note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Supplier the stock came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,

    /// Delivery or order reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Article lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movements: Option<Vec<ArticleMovement>>,
}

/// Payload creating a movement.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MovementCreation {
    /// Names of the accounts that validated the movement.
    pub validated_by: Vec<String>,

    /// Direction of the movement.
    #[serde(rename = "type")]
    pub movement_type: MovementType,

    /// Progress of the movement.
    pub state: MovementState,

    /// Article lines.
    pub movements: Vec<ArticleMovement>,

    /// Whether the movement belongs to a test dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Why stock left the shop. Only meaningful for `out` movements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motive: Option<MovementMotive>,

    /// Free-form note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Supplier the stock came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,

    /// Delivery or order reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl MovementCreation {
    /// Creates a payload moving the given lines, with no validators and no
    /// motive.
    #[must_use]
    pub fn new(
        movement_type: MovementType,
        state: MovementState,
        movements: Vec<ArticleMovement>,
    ) -> Self {
        Self {
            validated_by: Vec::new(),
            movement_type,
            state,
            movements,
            test: None,
            motive: None,
            note: None,
            supplier: None,
            reference: None,
        }
    }
}

impl Resource for Movement {
    type Creation = MovementCreation;

    const NAME: &'static str = "Movement";
    const PATH: &'static str = "stock/movements";
    const SCOPE: Scope = Scope::Shop;
}
