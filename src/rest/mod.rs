//! REST resource layer.
//!
//! - [`Resource`] and [`MutableResource`]: default async implementations of
//!   list, read, create, update and delete for every record type
//! - [`Scope`]: which account scope owns a resource
//! - [`ListParams`], [`query_filter`]: list query shaping
//! - [`resources`]: the record, creation and modification types

mod params;
mod resource;
pub mod resources;

pub use params::{query_filter, ListParams, QueryOperator, DEFAULT_LIMIT};
pub use resource::{MutableResource, Resource, Scope};
