//! Hydrobond API client
//!
//! Every operation is one request: local checks first (credentials, ranges),
//! then a single call through the [`HttpClient`], then the JSON body is
//! decoded into the matching model. Nothing is retried.

use std::sync::Arc;

use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest};
use core_auth::{Authorization, OAuthClient, TokenResponse};
use core_runtime::config::ClientConfig;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::error::{HydrobondError, Result};
use crate::models::{Post, User};
use crate::requests::{PostBody, TimelineQuery, UserSettings};

const API_VERSION: &str = "v1";

/// Client for one hydrobond server on behalf of one application.
///
/// API calls carry `Authorization: {token_type} {access_token}`. OAuth calls go
/// to the separate OAuth base URL without it.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct Hydrobond {
    api_base_url: Url,
    oauth: OAuthClient,
    authorization: Authorization,
    http_client: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for Hydrobond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hydrobond")
            .field("api_base_url", &self.api_base_url.as_str())
            .field("oauth_base_url", &self.oauth.base_url().as_str())
            .field("authorization", &self.authorization)
            .finish()
    }
}

impl Hydrobond {
    pub fn new(
        api_base_url: Url,
        oauth_base_url: Url,
        authorization: impl Into<Authorization>,
        http_client: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            api_base_url,
            oauth: OAuthClient::new(oauth_base_url, Arc::clone(&http_client)),
            authorization: authorization.into(),
            http_client,
        }
    }

    /// Build a client from a validated [`ClientConfig`].
    pub fn from_config(config: ClientConfig, authorization: impl Into<Authorization>) -> Self {
        Self::new(
            config.api_base_url,
            config.oauth_base_url,
            authorization,
            config.http_client,
        )
    }

    pub fn authorization(&self) -> &Authorization {
        &self.authorization
    }

    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    pub fn oauth_base_url(&self) -> &Url {
        self.oauth.base_url()
    }

    /// Same server, transport and client credentials, new access token.
    ///
    /// [`authorize`](Self::authorize) leaves `self` untouched; use this to
    /// continue with the token it returns.
    pub fn with_access_token(&self, access_token: impl Into<String>) -> Self {
        Self {
            authorization: self.authorization.with_access_token(access_token),
            ..self.clone()
        }
    }

    /// URL to send the user to for authorizing this application.
    ///
    /// # Errors
    ///
    /// `HydrobondError::Configuration("clientId is empty")`
    pub fn authorize_url(&self) -> Result<Url> {
        Ok(self.oauth.authorize_url(&self.authorization)?)
    }

    /// Exchange an authorization code for an access token.
    ///
    /// # Errors
    ///
    /// - `HydrobondError::Configuration` when the client id or, after it,
    ///   the client secret is empty
    /// - `HydrobondError::Transport` when the token endpoint fails
    #[instrument(skip(self, code))]
    pub async fn authorize(&self, code: &str) -> Result<String> {
        let tokens = self.exchange_code(code).await?;
        info!("Authorized application");
        Ok(tokens.access_token)
    }

    /// Like [`authorize`](Self::authorize) but returns the whole token
    /// response.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
        Ok(self.oauth.exchange_code(&self.authorization, code).await?)
    }

    /// Create a post.
    #[instrument(skip(self, body), fields(attachments = body.file_ids().map_or(0, |ids| ids.len())))]
    pub async fn post(&self, body: &PostBody) -> Result<Post> {
        let url = self.api_url(&["posts"])?;
        let request = HttpRequest::new(HttpMethod::Post, url.as_str()).json(body)?;

        let post: Post = self.send(request).await?;

        info!(post_id = post.id, "Created post");
        Ok(post)
    }

    /// Fetch a page of the public timeline, newest first as the server
    /// orders it.
    ///
    /// # Errors
    ///
    /// `HydrobondError::Validation` when `query.count` is outside `1..=100`;
    /// no request is sent in that case.
    #[instrument(skip(self, query), fields(count = query.count, since_id = ?query.since_id, max_id = ?query.max_id))]
    pub async fn get_timeline(&self, query: &TimelineQuery) -> Result<Vec<Post>> {
        query.validate()?;

        let mut url = self.api_url(&["timelines", "public"])?;
        url.query_pairs_mut().extend_pairs(query.query_pairs());

        let request = HttpRequest::new(HttpMethod::Get, url.as_str());
        let posts: Vec<Post> = self.send(request).await?;

        debug!("Fetched {} posts from the public timeline", posts.len());
        Ok(posts)
    }

    /// Update the account's name and/or avatar.
    ///
    /// Empty settings still send the request and return the account as the
    /// server has it.
    #[instrument(skip(self, settings), fields(name = ?settings.name(), avatar_file_id = ?settings.avatar_file_id()))]
    pub async fn update_account(&self, settings: &UserSettings) -> Result<User> {
        if settings.is_empty() {
            debug!("No account changes given, fetching current state");
        }

        let url = self.api_url(&["account"])?;
        let request = HttpRequest::new(HttpMethod::Patch, url.as_str()).json(settings)?;

        let user: User = self.send(request).await?;

        info!(user_id = user.id, "Updated account");
        Ok(user)
    }

    /// `{api_base_url}/v1/{segments...}`
    fn api_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_base_url.clone();

        url.path_segments_mut()
            .map_err(|_| {
                HydrobondError::Configuration(format!(
                    "API base URL cannot be a base: {}",
                    self.api_base_url
                ))
            })?
            .pop_if_empty()
            .push(API_VERSION)
            .extend(segments);

        Ok(url)
    }

    #[instrument(skip(self, request), fields(method = ?request.method, url = %request.url))]
    async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T> {
        let request = request
            .header("Accept", "application/json")
            .header("Authorization", self.authorization.header_value());

        let response = self.http_client.execute(request).await?;

        if !response.is_success() {
            warn!("API request failed: status={}", response.status);
        } else {
            debug!("API request succeeded: status={}", response.status);
        }

        Ok(response.error_for_status()?.json()?)
    }
}
