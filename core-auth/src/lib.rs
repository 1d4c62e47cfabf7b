//! # Authentication Module
//!
//! OAuth 2.0 credentials and the authorization code flow for hydrobond.
//!
//! ## Overview
//!
//! [`Authorization`] holds the access token, client credentials and the
//! state token a client application was registered with. [`OAuthClient`]
//! uses them to build the authorization URL and to exchange the returned
//! code for an access token.
//!
//! Token persistence and refresh are left to the host application.

pub mod authorization;
pub mod error;
pub mod oauth;

pub use authorization::{generate_state, Authorization, AuthorizationOptions, TokenType};
pub use error::{AuthError, Result};
pub use oauth::{OAuthClient, TokenResponse};
