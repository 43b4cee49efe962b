//! Dialpad Client
//!
//! Main client for the Dialpad API, combining configuration (base URL and
//! bearer token) with the HTTP layer.

use super::http::{add_query_params, ApiResponse, DialpadHttpClient};
use crate::error::{Error, Result};
use reqwest::Method;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// Base URL used when neither an explicit value nor the environment sets one
pub const DEFAULT_BASE_URL: &str = "https://dialpad.com/api/v2";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "DIALPAD_API_BASE_URL";

/// Environment variable holding the bearer token
pub const TOKEN_ENV: &str = "DIALPAD_API_TOKEN";

const DEFAULT_USER_AGENT: &str = concat!("dialpad-rs/", env!("CARGO_PKG_VERSION"));

/// Connection settings shared by every request a client makes
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Without a token requests go out unauthenticated
    pub token: Option<String>,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            token: None,
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Resolve settings from `DIALPAD_API_BASE_URL` and `DIALPAD_API_TOKEN`
    pub fn from_env() -> Self {
        let base_url = env_value(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(&base_url);
        config.token = env_value(TOKEN_ENV);
        config
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// Token is redacted so configs can be logged.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Main Dialpad client
#[derive(Clone)]
pub struct DialpadClient {
    http: DialpadHttpClient,
    config: ClientConfig,
}

impl DialpadClient {
    /// Create a client, validating the base URL up front
    pub fn new(config: ClientConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {:?}: {}", config.base_url, e)))?;

        let http = DialpadHttpClient::new(&config.user_agent, config.timeout)?;

        Ok(Self { http, config })
    }

    /// Create a client from environment settings
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Join the base URL and a resource path with exactly one slash
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn execute(&self, method: Method, url: &str, body: Option<&Value>) -> Result<ApiResponse> {
        self.http
            .execute(method, url, self.config.token.as_deref(), body)
            .await
    }

    /// Make a GET request; `query` is a JSON object of parameters
    pub async fn get(&self, path: &str, query: &Value) -> Result<ApiResponse> {
        let url = add_query_params(&self.url(path), query)?;
        self.execute(Method::GET, &url, None).await
    }

    /// Make a POST request
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<ApiResponse> {
        self.execute(Method::POST, &self.url(path), body).await
    }

    /// Make a PUT request
    pub async fn put(&self, path: &str, body: Option<&Value>) -> Result<ApiResponse> {
        self.execute(Method::PUT, &self.url(path), body).await
    }

    /// Make a PATCH request
    pub async fn patch(&self, path: &str, body: Option<&Value>) -> Result<ApiResponse> {
        self.execute(Method::PATCH, &self.url(path), body).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.execute(Method::DELETE, &self.url(path), None).await
    }
}

impl fmt::Debug for DialpadClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialpadClient")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = DialpadClient::new(ClientConfig::new("https://dialpad.com/api/v2/")).unwrap();
        assert_eq!(client.url("/users/1"), "https://dialpad.com/api/v2/users/1");
        assert_eq!(client.url("users"), "https://dialpad.com/api/v2/users");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = DialpadClient::new(ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::default().with_token("secret-token");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(ClientConfig::default().base_url, DEFAULT_BASE_URL);
        assert!(ClientConfig::default().token.is_none());
    }
}
