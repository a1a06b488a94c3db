//! Magento 2 REST client with connection pooling
//!
//! Composes the authenticator, the response classifier and the retry policy
//! into one authenticated request pipeline. The per-endpoint resource
//! methods live in the endpoints module and all funnel through
//! [`MagentoClient::request`].

use std::time::Duration;

use log::debug;
use reqwest::Method;
use serde_json::Value;

use super::auth::{Authenticator, TokenSource};
use super::constants::{self, headers};
use super::error::Result;
use super::models::Credentials;
use super::resilience::{RetryConfig, RetryPolicy};
use super::response::{classify, Outcome};
use super::token_store::TokenStore;

pub struct MagentoClient {
    base_url: String,
    http_client: reqwest::Client,
    authenticator: Authenticator,
    retry_policy: RetryPolicy,
}

impl MagentoClient {
    /// Client with a per-instance in-memory token cache.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::with_token_source(
            Credentials::new(base_url, username, password),
            TokenSource::ephemeral(),
        )
    }

    /// Client sharing its token with other processes through `store`.
    pub fn with_shared_store(credentials: Credentials, store: TokenStore) -> Self {
        Self::with_token_source(credentials, TokenSource::Shared(store))
    }

    /// Client using a pre-issued token; no login exchange is ever made.
    pub fn with_fixed_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_token_source(
            Credentials::new(base_url, "", ""),
            TokenSource::Fixed(token.into()),
        )
    }

    /// Client with an explicit token source.
    pub fn with_token_source(credentials: Credentials, source: TokenSource) -> Self {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(headers::USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self::with_custom_client(credentials, source, http_client)
    }

    /// Client with caller-configured HTTP transport (custom User-Agent,
    /// timeouts, proxies).
    pub fn with_custom_client(
        credentials: Credentials,
        source: TokenSource,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            base_url: credentials.base_url().to_string(),
            authenticator: Authenticator::new(credentials, source, http_client.clone()),
            http_client,
            retry_policy: RetryPolicy::default(),
        }
    }

    /// Override the retry behavior for transient platform errors.
    pub fn with_retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_policy = RetryPolicy::new(config);
        self
    }

    /// Override how long a freshly issued token is considered valid.
    pub fn with_token_lifetime(mut self, token_lifetime: Duration) -> Self {
        self.authenticator = self.authenticator.with_token_lifetime(token_lifetime);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One logical authenticated call with bounded retry on transient
    /// outcomes.
    ///
    /// Each attempt re-validates the token, sends the request with the
    /// bearer credential and JSON content type, and classifies the exchange.
    /// Only transient outcomes are retried; everything else is returned
    /// immediately. Up to `max_attempts` round-trips may happen for one
    /// call.
    pub async fn execute(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Outcome> {
        self.retry_policy
            .execute(|| async {
                let token = self.authenticator.token().await?;

                let mut request = self
                    .http_client
                    .request(method.clone(), url)
                    .bearer_auth(&token)
                    .header("Content-Type", headers::CONTENT_TYPE_JSON);
                if let Some(body) = body {
                    request = request.json(body);
                }

                let response = request.send().await?;
                let status = response.status().as_u16();
                let text = response.text().await?;
                debug!("{} {} -> {}", method, url, status);

                Ok(classify(status, &text))
            })
            .await
    }

    /// Endpoint-facing wrapper turning the classified outcome into a typed
    /// result.
    pub(crate) async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        let outcome = self.execute(method, url, body).await?;
        outcome.into_result(self.retry_policy.config().max_attempts)
    }

    /// Default-scope endpoint URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        constants::endpoint(&self.base_url, path)
    }

    /// Store-code scoped endpoint URL.
    pub(crate) fn store_endpoint(&self, store_code: &str, path: &str) -> String {
        constants::store_endpoint(&self.base_url, store_code, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let client = MagentoClient::new("https://store.example/", "admin", "secret");
        assert_eq!(
            client.endpoint("/products/widget"),
            "https://store.example/rest/V1/products/widget"
        );
        assert_eq!(
            client.store_endpoint("fr", "/products"),
            "https://store.example/rest/fr/V1/products"
        );
    }
}
