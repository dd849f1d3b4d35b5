//! # Tactill API Rust SDK
//!
//! A typed async client for the Tactill point-of-sale REST API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Authentication with an API key, checked when the client is built
//! - Discovery of the account's working company, shop and node
//! - List, read, create, update and delete operations on catalog resources
//!   (articles, categories, taxes, discounts, option lists, options, packs)
//! - Listing and recording of stock movements
//! - Partial updates that only send the fields you set
//! - A single error type carrying the server's structured error payload
//! - Bounded retries of read timeouts with exponential backoff and jitter
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tactill::rest::resources::{CategoryCreation, TaxModification};
//! use tactill::rest::ListParams;
//! use tactill::TactillClient;
//!
//! let client = TactillClient::new("0123456789abcdef01234567").await?;
//!
//! // List the ten most expensive articles of the working node
//! let params = ListParams::new().limit(10).order("full_price=DESC");
//! let articles = client.get_articles(&params).await?;
//!
//! // Create a category for the working company
//! let category = client.create_category(&CategoryCreation::new("Boissons")).await?;
//!
//! // Change one field of a tax, leaving the others untouched
//! let patch = TaxModification { rate: Some(5.5), ..Default::default() };
//! client.update_tax(&tax_id, &patch).await?;
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use std::time::Duration;
//! use tactill::{ApiKey, RetryPolicy, TactillConfig};
//!
//! let config = TactillConfig::builder()
//!     .api_key(ApiKey::new("0123456789abcdef01234567").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .retry_policy(RetryPolicy::new(5, Duration::from_millis(200)))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Pass the configuration to [`TactillClient::with_config`].
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use tactill::TactillError;
//!
//! match client.get_article(&id).await {
//!     Ok(article) => println!("{:?}", article.name),
//!     Err(e) if e.is_not_found() => println!("deleted"),
//!     Err(e) => match e.envelope() {
//!         Some(envelope) => println!("{}: {}", envelope.error, envelope.message),
//!         None => println!("{e}"),
//!     },
//! }
//! ```
//!
//! ## Logging
//!
//! The SDK emits [`tracing`](https://docs.rs/tracing) events and installs no
//! subscriber. Scope resolution is logged at `info`, every request at
//! `debug` and every retry at `warn`.

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    ApiKey, BaseUrl, TactillConfig, TactillConfigBuilder, TactillId, API_URL, DEFAULT_TIMEOUT,
};
pub use error::ValidationError;

// Re-export client types
pub use clients::{
    HttpClient, HttpMethod, HttpRequest, HttpResponse, InvalidRequestError, ResponseError,
    ResponsePayload, RetryPolicy, TactillClient, TactillError,
};

// Re-export the resource layer entry points
pub use rest::resources::TactillResponse;
pub use rest::{query_filter, ListParams, MutableResource, QueryOperator, Resource, Scope};
