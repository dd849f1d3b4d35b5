//! Resource traits for list, read, create, update and delete operations.
//!
//! This module defines the [`Resource`] trait, implemented by every record
//! the API exposes, and the [`MutableResource`] trait for records that can
//! also be updated and deleted. The traits provide default async
//! implementations of every operation, so a resource only declares its
//! name, its endpoint path, the scope that owns it and its payload types.
//!
//! # Endpoint shape
//!
//! | Operation | Method | Path | Expected status |
//! |-----------|--------|------|-----------------|
//! | `all` | GET | `{PATH}?{scope}=..&limit=..` | 200 |
//! | `find` | GET | `{PATH}/{id}` | 200 |
//! | `create` | POST | `{PATH}` | 201 |
//! | `update` | PUT | `{PATH}/{id}` | 200 |
//! | `delete` | DELETE | `{PATH}/{id}` | 200 |
//!
//! # Example
//!
//! ```rust,ignore
//! use tactill::rest::{ListParams, Resource};
//! use tactill::rest::resources::Tax;
//!
//! let taxes = Tax::all(&client, &ListParams::new().order("rate=DESC")).await?;
//! let tax = Tax::find(&client, &taxes[0].meta.id).await?;
//! ```

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, HttpRequest, InvalidRequestError, TactillClient, TactillError};
use crate::config::TactillId;
use crate::rest::params::ListParams;
use crate::rest::resources::TactillResponse;

/// The level of the account hierarchy a resource belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Company-wide resources (categories, taxes).
    Company,
    /// Shop-level resources (discounts, movements).
    Shop,
    /// Node-level resources (articles, option lists, options, packs).
    Node,
}

impl Scope {
    /// The query parameter and body field carrying the scope identifier.
    #[must_use]
    pub const fn query_key(self) -> &'static str {
        match self {
            Self::Company => "company_id",
            Self::Shop => "shop_id",
            Self::Node => "node_id",
        }
    }

    /// The account field listing the identifiers of this scope.
    #[must_use]
    pub const fn account_field(self) -> &'static str {
        match self {
            Self::Company => "companies",
            Self::Shop => "shops",
            Self::Node => "nodes",
        }
    }
}

/// A record that can be listed, read and created.
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name (e.g., "Article"), used in errors
/// - `PATH`: The collection path relative to the API root (e.g., "catalog/articles")
/// - `SCOPE`: The scope whose identifier is injected into list queries and
///   creation bodies
#[allow(async_fn_in_trait)]
pub trait Resource: DeserializeOwned + Send + Sync + Sized {
    /// Payload accepted by [`Resource::create`].
    type Creation: Serialize + Send + Sync;

    /// The singular name of the resource.
    const NAME: &'static str;

    /// The collection path relative to the API root.
    const PATH: &'static str;

    /// The scope owning this resource.
    const SCOPE: Scope;

    /// Returns the path of a single record.
    #[must_use]
    fn item_path(id: &TactillId) -> String {
        format!("{}/{id}", Self::PATH)
    }

    /// Lists records in the client's scope.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the query
    /// (e.g. a malformed filter) and [`TactillError::Decode`] if a record
    /// does not match the expected shape.
    async fn all(client: &TactillClient, params: &ListParams) -> Result<Vec<Self>, TactillError> {
        let query = params.to_query(Self::SCOPE.query_key(), client.scope_id(Self::SCOPE));
        let request = HttpRequest::builder(HttpMethod::Get, Self::PATH)
            .query(query)
            .build()?;

        let response = client.http_client().request(request).await?;
        response.json(Self::NAME)
    }

    /// Reads a single record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if the record does
    /// not exist.
    async fn find(client: &TactillClient, id: &TactillId) -> Result<Self, TactillError> {
        let request = HttpRequest::builder(HttpMethod::Get, Self::item_path(id)).build()?;

        let response = client.http_client().request(request).await?;
        response.json(Self::NAME)
    }

    /// Creates a record in the client's scope.
    ///
    /// Unset fields of `creation` are left out of the body and the scope
    /// identifier is added to it.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server answers anything but
    /// `201 Created`.
    async fn create(
        client: &TactillClient,
        creation: &Self::Creation,
    ) -> Result<Self, TactillError> {
        let body = scoped_body(
            Self::NAME,
            creation,
            Self::SCOPE.query_key(),
            client.scope_id(Self::SCOPE),
        )?;
        let request = HttpRequest::builder(HttpMethod::Post, Self::PATH)
            .expect(StatusCode::CREATED)
            .body(body)
            .build()?;

        let response = client.http_client().request(request).await?;
        response.json(Self::NAME)
    }
}

/// A record that can also be updated and deleted.
///
/// Both operations return the acknowledgement envelope rather than the
/// record; re-fetch the record with [`Resource::find`] to observe the change.
#[allow(async_fn_in_trait)]
pub trait MutableResource: Resource {
    /// Sparse patch accepted by [`MutableResource::update`].
    type Modification: Serialize + Send + Sync;

    /// Applies a partial update. Only the fields set on `modification` are
    /// sent; the server leaves every other field unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server answers anything but
    /// `200 OK`.
    async fn update(
        client: &TactillClient,
        id: &TactillId,
        modification: &Self::Modification,
    ) -> Result<TactillResponse, TactillError> {
        let body = to_body(Self::NAME, modification)?;
        let request = HttpRequest::builder(HttpMethod::Put, Self::item_path(id))
            .body(body)
            .build()?;

        let response = client.http_client().request(request).await?;
        response.json(Self::NAME)
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if the record does
    /// not exist.
    async fn delete(
        client: &TactillClient,
        id: &TactillId,
    ) -> Result<TactillResponse, TactillError> {
        let request = HttpRequest::builder(HttpMethod::Delete, Self::item_path(id)).build()?;

        let response = client.http_client().request(request).await?;
        response.json(Self::NAME)
    }
}

fn to_body<T: Serialize>(
    resource: &'static str,
    payload: &T,
) -> Result<Value, InvalidRequestError> {
    serde_json::to_value(payload).map_err(|e| InvalidRequestError::Unserializable {
        resource,
        reason: e.to_string(),
    })
}

/// Serializes a creation payload and inserts the owning scope identifier.
pub(crate) fn scoped_body<T: Serialize>(
    resource: &'static str,
    payload: &T,
    scope_key: &str,
    scope_id: &TactillId,
) -> Result<Value, InvalidRequestError> {
    let mut body = to_body(resource, payload)?;
    let Value::Object(fields) = &mut body else {
        return Err(InvalidRequestError::BodyNotObject { resource });
    };
    fields.insert(scope_key.to_string(), Value::String(scope_id.to_string()));
    Ok(body)
}
