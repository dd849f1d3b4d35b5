//! The authenticated account.
//!
//! The account is read once, when a [`TactillClient`](crate::TactillClient)
//! is constructed. The first entry of each of its scope lists becomes the
//! client's working company, shop and node.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::TactillId;
use crate::rest::resources::common::RecordMeta;
use crate::rest::Scope;

/// Path of the account endpoint, relative to the API root.
pub const ACCOUNT_PATH: &str = "account/account";

/// Length of a fastpass code.
pub const FASTPASS_LEN: usize = 4;

/// The account bound to an API key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Server-assigned fields.
    #[serde(flatten)]
    pub meta: RecordMeta,

    /// Legacy account identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// The account's profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<TactillId>,

    /// The account's role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<TactillId>,

    /// Four character quick login code.
    #[serde(
        default,
        deserialize_with = "deserialize_fastpass",
        skip_serializing_if = "Option::is_none"
    )]

    /// Four-character quick login code.
    pub fastpass: Option<String>,

    /// Last connection timestamp, as sent by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_connected: Option<String>,

    /// Companies the account belongs to.
    #[serde(default)]
    pub companies: Vec<TactillId>,

    /// Shops the account can access.
    #[serde(default)]
    pub shops: Vec<TactillId>,

    /// Nodes (points of sale) the account can access.
    #[serde(default)]
    pub nodes: Vec<TactillId>,

    /// API key attached to the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Identifier of the account in the previous API generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v3_account_id: Option<TactillId>,

    /// Permission names granted to the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,

    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Account {
    /// Returns the identifiers listed for `scope`.
    #[must_use]
    pub fn scope_ids(&self, scope: Scope) -> &[TactillId] {
        match scope {
            Scope::Company => &self.companies,
            Scope::Shop => &self.shops,
            Scope::Node => &self.nodes,
        }
    }

    /// Returns the default identifier for `scope`: the first one listed.
    #[must_use]
    pub fn default_scope_id(&self, scope: Scope) -> Option<&TactillId> {
        self.scope_ids(scope).first()
    }
}

fn deserialize_fastpass<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let fastpass = Option::<String>::deserialize(deserializer)?;
    match fastpass {
        Some(code) if code.chars().count() != FASTPASS_LEN => Err(serde::de::Error::custom(
            format!("fastpass must be exactly {FASTPASS_LEN} characters"),
        )),
        other => Ok(other),
    }
}
