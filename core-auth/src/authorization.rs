//! OAuth credentials and the state token.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::Rng;
use serde::Deserialize;
use std::fmt;

use crate::error::{AuthError, Result, CLIENT_ID_EMPTY, CLIENT_SECRET_EMPTY};

/// Number of random bytes behind a generated state token.
const STATE_BYTES: usize = 16;

/// Generate a fresh state token for CSRF protection.
///
/// 16 bytes from the thread-local CSPRNG, URL-safe base64 without padding
/// (22 characters).
pub fn generate_state() -> String {
    let mut state_bytes = [0u8; STATE_BYTES];
    rand::thread_rng().fill(&mut state_bytes);
    URL_SAFE_NO_PAD.encode(state_bytes)
}

/// Token scheme sent in the `Authorization` header.
///
/// Only bearer tokens are issued by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenType {
    #[default]
    Bearer,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Bearer => "Bearer",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied credentials; every field may be left out.
///
/// Also deserializes from the camelCase shape hosts keep in their settings:
///
/// ```
/// use core_auth::AuthorizationOptions;
///
/// let options: AuthorizationOptions =
///     serde_json::from_str(r#"{"clientId":"client_id","stateText":"state"}"#).unwrap();
/// assert_eq!(options.client_id.as_deref(), Some("client_id"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationOptions {
    pub access_token: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub state_text: Option<String>,
}

impl AuthorizationOptions {
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn with_state_text(mut self, state_text: impl Into<String>) -> Self {
        self.state_text = Some(state_text.into());
        self
    }
}

/// OAuth credentials of a client application.
///
/// Immutable once built. Missing strings become empty; a missing state
/// token is generated with [`generate_state`]. Construction never fails:
/// operations that need a credential check for it themselves.
///
/// # Security
///
/// The `Debug` implementation redacts the access token and client secret.
///
/// # Examples
///
/// ```
/// use core_auth::{Authorization, AuthorizationOptions, TokenType};
///
/// let authorization = Authorization::new(AuthorizationOptions::default());
///
/// assert_eq!(authorization.access_token(), "");
/// assert!(!authorization.state_text().is_empty());
/// assert_eq!(authorization.token_type(), TokenType::Bearer);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization {
    access_token: String,
    client_id: String,
    client_secret: String,
    state_text: String,
    token_type: TokenType,
}

impl Authorization {
    pub fn new(options: AuthorizationOptions) -> Self {
        Self {
            access_token: options.access_token.unwrap_or_default(),
            client_id: options.client_id.unwrap_or_default(),
            client_secret: options.client_secret.unwrap_or_default(),
            state_text: options.state_text.unwrap_or_else(generate_state),
            token_type: TokenType::Bearer,
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn state_text(&self) -> &str {
        &self.state_text
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Value of the `Authorization` header for API calls.
    pub fn header_value(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }

    /// Copy of these credentials carrying a different access token.
    pub fn with_access_token(&self, access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..self.clone()
        }
    }

    pub(crate) fn require_client_id(&self) -> Result<&str> {
        if self.client_id.is_empty() {
            return Err(AuthError::Configuration(CLIENT_ID_EMPTY.to_string()));
        }
        Ok(&self.client_id)
    }

    pub(crate) fn require_client_secret(&self) -> Result<&str> {
        if self.client_secret.is_empty() {
            return Err(AuthError::Configuration(CLIENT_SECRET_EMPTY.to_string()));
        }
        Ok(&self.client_secret)
    }
}

impl Default for Authorization {
    fn default() -> Self {
        Self::new(AuthorizationOptions::default())
    }
}

impl From<AuthorizationOptions> for Authorization {
    fn from(options: AuthorizationOptions) -> Self {
        Self::new(options)
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorization")
            .field("access_token", &"[REDACTED]")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("state_text", &self.state_text)
            .field("token_type", &self.token_type)
            .finish()
    }
}
