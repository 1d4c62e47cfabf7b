//! OAuth 2.0 Authorization Code Flow
//!
//! Implements the two client-side steps of RFC 6749 section 4.1 against the
//! hydrobond OAuth server:
//! - Building the authorization URL the user is sent to
//! - Exchanging the returned authorization code for an access token
//!
//! # Security
//!
//! - The state token from [`Authorization`] is sent on both steps
//! - Codes, secrets and tokens are never logged
//!
//! # Example
//!
//! ```no_run
//! use core_auth::{Authorization, AuthorizationOptions, OAuthClient};
//! use std::sync::Arc;
//! use url::Url;
//!
//! # async fn example() -> core_auth::Result<()> {
//! # use bridge_traits::http::HttpClient;
//! # let http_client: Arc<dyn HttpClient> = todo!();
//! let authorization = Authorization::new(
//!     AuthorizationOptions::default()
//!         .with_client_id("client_id")
//!         .with_client_secret("client_secret"),
//! );
//!
//! let oauth = OAuthClient::new(Url::parse("https://example.com/oauth").unwrap(), http_client);
//! let authorize_url = oauth.authorize_url(&authorization)?;
//! // Send the user to authorize_url, then with the code from the callback:
//! let tokens = oauth.exchange_code(&authorization, "code_from_callback").await?;
//! # Ok(())
//! # }
//! ```

use crate::authorization::Authorization;
use crate::error::{AuthError, Result};
use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use url::Url;

const AUTHORIZE_PATH: &str = "authorize";
const TOKEN_PATH: &str = "token";
const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";
const RESPONSE_TYPE_CODE: &str = "code";

/// Client for the OAuth endpoints.
///
/// Talks only to the OAuth base URL and never sends the API access token.
#[derive(Clone)]
pub struct OAuthClient {
    base_url: Url,
    http_client: Arc<dyn HttpClient>,
}

impl OAuthClient {
    /// Create an OAuth client rooted at `base_url`.
    ///
    /// `/authorize` and `/token` are appended to whatever path the base URL
    /// already carries.
    pub fn new(base_url: Url, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url,
            http_client,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{path}?client_id=..&response_type=code&state=..`
    ///
    /// The query parameter order is fixed.
    fn endpoint(&self, path: &str, client_id: &str, state: &str) -> Result<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| {
                AuthError::Configuration(format!(
                    "OAuth base URL cannot be a base: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(path);

        url.query_pairs_mut()
            .clear()
            .append_pair("client_id", client_id)
            .append_pair("response_type", RESPONSE_TYPE_CODE)
            .append_pair("state", state);

        Ok(url)
    }

    /// Build the URL the user visits to authorize the application.
    ///
    /// Pure: no network access.
    ///
    /// # Errors
    ///
    /// `AuthError::Configuration("clientId is empty")` when the client id is
    /// empty.
    #[instrument(skip(self, authorization), fields(client_id = %authorization.client_id()))]
    pub fn authorize_url(&self, authorization: &Authorization) -> Result<Url> {
        let client_id = authorization.require_client_id()?;
        let url = self.endpoint(AUTHORIZE_PATH, client_id, authorization.state_text())?;

        debug!("Built authorization URL");

        Ok(url)
    }

    /// Exchange an authorization code for tokens.
    ///
    /// POSTs to `{base}/token` with the same query as
    /// [`authorize_url`](Self::authorize_url) and a JSON body carrying the
    /// client credentials, the code and the state.
    ///
    /// # Errors
    ///
    /// - `AuthError::Configuration("clientId is empty")`, checked first
    /// - `AuthError::Configuration("clientSecret is empty")`
    /// - `AuthError::Transport` for network failures, non-2xx responses and
    ///   undecodable bodies
    #[instrument(skip(self, authorization, code), fields(client_id = %authorization.client_id()))]
    pub async fn exchange_code(
        &self,
        authorization: &Authorization,
        code: &str,
    ) -> Result<TokenResponse> {
        let client_id = authorization.require_client_id()?;
        let client_secret = authorization.require_client_secret()?;
        let state = authorization.state_text();

        let url = self.endpoint(TOKEN_PATH, client_id, state)?;
        let body = TokenRequest {
            client_id,
            client_secret,
            code,
            grant_type: GRANT_TYPE_AUTHORIZATION_CODE,
            state,
        };

        debug!("Exchanging authorization code for tokens");

        let request = HttpRequest::new(HttpMethod::Post, url.as_str())
            .header("Accept", "application/json")
            .json(&body)?;

        let response = self.http_client.execute(request).await?;

        if !response.is_success() {
            warn!(
                status = response.status,
                "Token exchange failed while exchanging authorization code"
            );
        }

        let token_response: TokenResponse = response.error_for_status()?.json()?;

        debug!(
            token_type = token_response.token_type.as_deref().unwrap_or("unknown"),
            "Exchanged authorization code for tokens"
        );

        Ok(token_response)
    }
}

/// JSON body of the token request. Field order is the wire order.
#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
    grant_type: &'a str,
    state: &'a str,
}

/// Token response from the OAuth server.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .finish()
    }
}
