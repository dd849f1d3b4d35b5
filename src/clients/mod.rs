//! HTTP client types for Tactill API communication.
//!
//! This module provides the client layer: request shaping, status checks,
//! error normalization, the retry policy and the [`TactillClient`] gateway
//! exposing one method per resource operation.
//!
//! # Overview
//!
//! - [`TactillClient`]: The authenticated gateway
//! - [`HttpClient`]: The async HTTP client shared by every operation
//! - [`HttpRequest`]: A request and the status code that signals its success
//! - [`HttpResponse`]: A successful response body
//! - [`RetryPolicy`]: Backoff schedule for read timeouts
//! - [`TactillError`]: The error returned by every operation
//!
//! # Retry Behavior
//!
//! Only read timeouts are retried: the request reached the server but no
//! response arrived in time. Any status code answered by the server is
//! final, so 4xx and 5xx responses are never retried. Once the attempts
//! run out, the last timeout is returned as [`TactillError::Network`].
//!
//! A timed-out `POST` may have been processed by the server before the
//! timeout fired; retrying it can create the resource twice. Install
//! [`RetryPolicy::none`] when that is not acceptable.

mod catalog;
mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod retry;
mod stock;

pub use client::TactillClient;
pub use errors::{InvalidRequestError, ResponseError, ResponsePayload, TactillError};
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use retry::{is_read_timeout, RetryPolicy, RetryPredicate, DEFAULT_MAX_BACKOFF};
