//! # Hydrobond Client
//!
//! Typed client for the hydrobond social network API.
//!
//! ## Overview
//!
//! This crate provides:
//! - OAuth 2.0 authorization URL and code exchange
//! - Creating posts, optionally with uploaded files attached
//! - Paging through the public timeline
//! - Updating the account's name and avatar
//!
//! The transport is an [`HttpClient`](bridge_traits::http::HttpClient) supplied
//! by the host. With the `desktop-shims` feature, [`ClientConfig`] falls back
//! to the reqwest-backed client from `bridge-desktop`.
//!
//! ## Usage
//!
//! ```ignore
//! use hydrobond::{AuthorizationOptions, ClientConfig, Hydrobond, PostBody, TimelineQuery};
//!
//! let config = ClientConfig::builder()
//!     .api_base_url("https://example.com/api")
//!     .oauth_base_url("https://example.com/oauth")
//!     .build()?;
//!
//! let client = Hydrobond::from_config(
//!     config,
//!     AuthorizationOptions::default().with_access_token(token),
//! );
//!
//! let post = client.post(&PostBody::new("hello")).await?;
//! let timeline = client.get_timeline(&TimelineQuery::default()).await?;
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod requests;

pub use client::Hydrobond;
pub use error::{HydrobondError, Result};
pub use models::{Application, File, FileVariant, Post, User};
pub use requests::{PostBody, TimelineQuery, UserSettings};

pub use core_auth::{generate_state, Authorization, AuthorizationOptions, TokenResponse, TokenType};
pub use core_runtime::config::{ClientConfig, ClientConfigBuilder};
