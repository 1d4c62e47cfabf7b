//! # Client Configuration Module
//!
//! Provides configuration management for the hydrobond client.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! `ClientConfig` holding the two base URLs and the HTTP transport. It
//! validates eagerly so that a misconfigured client fails at startup rather
//! than on its first request.
//!
//! ## Required Settings
//!
//! - `api_base_url` - root of the REST API, e.g. `https://example.com/api`
//! - `oauth_base_url` - root of the OAuth endpoints, e.g. `https://example.com/oauth`
//!
//! ## Optional Dependencies (with platform defaults)
//!
//! - `HttpClient` - HTTP operations (desktop default: reqwest)
//!
//! When the `desktop-shims` feature is enabled, a `ReqwestHttpClient` built
//! from `request_timeout` and `user_agent` is injected if no client is given.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::ClientConfig;
//!
//! let config = ClientConfig::builder()
//!     .api_base_url("https://example.com/api")
//!     .oauth_base_url("https://example.com/oauth")
//!     .build()
//!     .expect("Failed to build config");
//! ```

use crate::error::{Error, Result};
use bridge_traits::HttpClient;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default request timeout for the default transport.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default `User-Agent` for the default transport.
pub const DEFAULT_USER_AGENT: &str = concat!("hydrobond-rs/", env!("CARGO_PKG_VERSION"));

/// Configuration for a hydrobond client.
///
/// Use [`ClientConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct ClientConfig {
    /// Root of the REST API; endpoint paths are appended to it
    pub api_base_url: Url,

    /// Root of the OAuth endpoints (`/authorize`, `/token`)
    pub oauth_base_url: Url,

    /// HTTP transport shared by every request
    pub http_client: Arc<dyn HttpClient>,

    /// Timeout applied by the default transport
    pub request_timeout: Duration,

    /// `User-Agent` applied by the default transport
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_base_url", &self.api_base_url.as_str())
            .field("oauth_base_url", &self.oauth_base_url.as_str())
            .field("http_client", &"HttpClient { ... }")
            .field("request_timeout", &self.request_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Parse a base URL and check it can have endpoint paths appended.
pub fn parse_base_url(name: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| Error::Config(format!("{} is not a valid URL ({}): {}", name, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::Config(format!(
            "{} must use http or https, got '{}'",
            name,
            url.scheme()
        )));
    }

    if url.cannot_be_a_base() {
        return Err(Error::Config(format!(
            "{} cannot be used as a base URL: {}",
            name, value
        )));
    }

    Ok(url)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_http_client(
    _request_timeout: Duration,
    _user_agent: &str,
) -> Result<Arc<dyn HttpClient>> {
    Err(Error::CapabilityMissing {
        capability: "HttpClient".to_string(),
        message: "No HTTP client implementation provided. \
                 Desktop: enable the 'desktop-shims' feature to use ReqwestHttpClient. \
                 Other hosts: inject an HttpClient with .http_client()."
            .to_string(),
    })
}

#[cfg(feature = "desktop-shims")]
fn provide_default_http_client(
    request_timeout: Duration,
    user_agent: &str,
) -> Result<Arc<dyn HttpClient>> {
    use bridge_desktop::ReqwestHttpClient;

    let client = ReqwestHttpClient::with_options(request_timeout, user_agent)
        .map_err(|e| Error::Config(format!("Failed to create default HttpClient: {}", e)))?;

    Ok(Arc::new(client))
}

/// Builder for constructing [`ClientConfig`] instances.
#[derive(Default)]
pub struct ClientConfigBuilder {
    api_base_url: Option<String>,
    oauth_base_url: Option<String>,
    http_client: Option<Arc<dyn HttpClient>>,
    request_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Sets the API base URL.
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Sets the OAuth base URL.
    pub fn oauth_base_url(mut self, url: impl Into<String>) -> Self {
        self.oauth_base_url = Some(url.into());
        self
    }

    /// Sets the HTTP transport.
    pub fn http_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the timeout used when the default transport is created.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the `User-Agent` used when the default transport is created.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// - `Error::Config` if a base URL is missing or invalid, or the request
    ///   timeout is zero
    /// - `Error::CapabilityMissing` if no transport was provided and the
    ///   `desktop-shims` feature is disabled
    pub fn build(self) -> Result<ClientConfig> {
        let api_base_url = self.api_base_url.ok_or_else(|| {
            Error::Config("API base URL is required. Use .api_base_url() to set it.".to_string())
        })?;
        let oauth_base_url = self.oauth_base_url.ok_or_else(|| {
            Error::Config(
                "OAuth base URL is required. Use .oauth_base_url() to set it.".to_string(),
            )
        })?;

        let api_base_url = parse_base_url("API base URL", &api_base_url)?;
        let oauth_base_url = parse_base_url("OAuth base URL", &oauth_base_url)?;

        let request_timeout = self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        if request_timeout.is_zero() {
            return Err(Error::Config(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let http_client = match self.http_client {
            Some(client) => client,
            None => provide_default_http_client(request_timeout, &user_agent)?,
        };

        Ok(ClientConfig {
            api_base_url,
            oauth_base_url,
            http_client,
            request_timeout,
            user_agent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::error::Result as BridgeResult;
    use bridge_traits::{BridgeError, HttpRequest, HttpResponse};

    struct OfflineHttpClient;

    #[async_trait]
    impl HttpClient for OfflineHttpClient {
        async fn execute(&self, _request: HttpRequest) -> BridgeResult<HttpResponse> {
            Err(BridgeError::RequestFailed("offline".to_string()))
        }
    }

    fn builder() -> ClientConfigBuilder {
        ClientConfig::builder()
            .api_base_url("https://example.com/api")
            .oauth_base_url("https://example.com/oauth")
            .http_client(Arc::new(OfflineHttpClient))
    }

    #[test]
    fn test_build_with_custom_client() {
        let config = builder().build().unwrap();

        assert_eq!(config.api_base_url.as_str(), "https://example.com/api");
        assert_eq!(config.oauth_base_url.as_str(), "https://example.com/oauth");
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_missing_api_base_url() {
        let result = ClientConfig::builder()
            .oauth_base_url("https://example.com/oauth")
            .http_client(Arc::new(OfflineHttpClient))
            .build();

        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("API base URL")));
    }

    #[test]
    fn test_missing_oauth_base_url() {
        let result = ClientConfig::builder()
            .api_base_url("https://example.com/api")
            .http_client(Arc::new(OfflineHttpClient))
            .build();

        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("OAuth base URL")));
    }

    #[test]
    fn test_rejects_invalid_url() {
        let result = builder().api_base_url("not a url").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = builder().oauth_base_url("ftp://example.com/oauth").build();
        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("http or https")));
    }

    #[test]
    fn test_rejects_cannot_be_a_base() {
        assert!(parse_base_url("API base URL", "mailto:user@example.com").is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let result = builder().request_timeout(Duration::ZERO).build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_debug_hides_transport() {
        let config = builder().user_agent("test-agent").build().unwrap();
        let debug = format!("{:?}", config);

        assert!(debug.contains("HttpClient { ... }"));
        assert!(debug.contains("test-agent"));
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_missing_http_client_without_shims() {
        let result = ClientConfig::builder()
            .api_base_url("https://example.com/api")
            .oauth_base_url("https://example.com/oauth")
            .build();

        assert!(matches!(result, Err(Error::CapabilityMissing { .. })));
    }

    #[cfg(feature = "desktop-shims")]
    #[test]
    fn test_default_http_client_with_shims() {
        let result = ClientConfig::builder()
            .api_base_url("https://example.com/api")
            .oauth_base_url("https://example.com/oauth")
            .request_timeout(Duration::from_secs(5))
            .build();

        assert!(result.is_ok());
    }
}
