//! # Host Bridge Traits
//!
//! The contract between the hydrobond client and the host's HTTP stack.
//!
//! ## Overview
//!
//! The client never opens sockets itself. It describes every call as an
//! [`HttpRequest`](http::HttpRequest) and hands it to an
//! [`HttpClient`](http::HttpClient) implementation supplied by the host:
//!
//! | Platform | Implementation Crate |
//! |----------|---------------------|
//! | Desktop  | `bridge-desktop` (reqwest) |
//! | Tests    | `mockall` doubles |
//!
//! ## Error Handling
//!
//! Implementations report failures as [`BridgeError`](error::BridgeError).
//! Connection-level problems are `RequestFailed`; any response that arrives,
//! whatever its status, is returned as `Ok` and callers decide with
//! [`HttpResponse::error_for_status`](http::HttpResponse::error_for_status).
//!
//! ## Thread Safety
//!
//! `HttpClient` requires `Send + Sync` so a single transport can be shared by
//! clients across tasks.

pub mod error;
pub mod http;

pub use error::BridgeError;
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
