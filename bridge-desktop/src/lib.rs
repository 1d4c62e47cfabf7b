//! # Desktop Bridge Implementations
//!
//! Default `HttpClient` for desktop platforms (macOS, Windows, Linux),
//! backed by `reqwest` with rustls.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::ReqwestHttpClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let http_client = Arc::new(ReqwestHttpClient::new().unwrap());
//!
//!     // Hand it to `ClientConfig::builder().http_client(http_client)`
//! }
//! ```

mod http;

pub use http::{ReqwestHttpClient, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
