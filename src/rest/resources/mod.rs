//! Resource definitions.
//!
//! Every stored resource comes in up to three shapes:
//!
//! - the record returned by the server (e.g. [`Article`]), which embeds the
//!   server-assigned [`RecordMeta`] and tolerates absent or unknown fields,
//! - a creation payload (e.g. [`ArticleCreation`]) holding the required
//!   fields plus optional ones,
//! - for updatable resources, a modification payload (e.g.
//!   [`ArticleModification`]) where every field is optional.
//!
//! Creation and modification payloads leave every unset field out of the
//! request body. The server reads an absent field as "leave unchanged", so a
//! patch touching one field never overwrites the others.
//!
//! ```rust
//! use tactill::rest::resources::TaxModification;
//!
//! let patch = TaxModification {
//!     rate: Some(10.0),
//!     ..Default::default()
//! };
//! assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"rate":10.0}"#);
//! ```

mod account;
pub mod catalog;
mod common;
pub mod stock;

pub use account::{Account, ACCOUNT_PATH, FASTPASS_LEN};
pub use catalog::*;
pub use common::{Color, RecordMeta, TactillResponse, ValidationDetail};
pub use stock::*;
