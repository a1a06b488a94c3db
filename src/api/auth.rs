//! Token acquisition and caching
//!
//! Produces a currently valid admin token while performing as few login
//! exchanges as possible. Where the current token lives is a closed choice
//! made at construction time: a caller-supplied fixed token, a per-instance
//! in-memory cache, or a storage location shared with other processes.

use std::time::Duration;

use log::{debug, info};
use serde_json::Value;
use tokio::sync::Mutex;

use super::constants;
use super::error::{Error, Result};
use super::models::{Credentials, Token};
use super::token_store::TokenStore;

/// Where the authenticator keeps its current token.
pub enum TokenSource {
    /// Caller-supplied token, honored unconditionally; no login is ever made.
    Fixed(String),
    /// One token cached for the lifetime of this instance.
    Ephemeral(Mutex<Option<Token>>),
    /// Token shared with other processes through a locked storage location.
    Shared(TokenStore),
}

impl TokenSource {
    /// Empty in-memory cache; the first token fetch performs a login.
    pub fn ephemeral() -> Self {
        Self::Ephemeral(Mutex::new(None))
    }
}

/// Obtains a currently valid token, logging in only when the cached or
/// stored one is missing or expired.
pub struct Authenticator {
    credentials: Credentials,
    source: TokenSource,
    http_client: reqwest::Client,
    token_lifetime: Duration,
}

impl Authenticator {
    pub fn new(credentials: Credentials, source: TokenSource, http_client: reqwest::Client) -> Self {
        Self {
            credentials,
            source,
            http_client,
            token_lifetime: Duration::from_secs(constants::DEFAULT_TOKEN_LIFETIME_SECS),
        }
    }

    /// Override how long a freshly issued token is considered valid.
    pub fn with_token_lifetime(mut self, token_lifetime: Duration) -> Self {
        self.token_lifetime = token_lifetime;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Produce a currently valid token secret.
    ///
    /// With a shared source the storage location is consulted before any
    /// login, so independent processes amortize a single exchange; a token
    /// issued here is written back before being returned.
    pub async fn token(&self) -> Result<String> {
        match &self.source {
            TokenSource::Fixed(secret) => Ok(secret.clone()),
            TokenSource::Ephemeral(cache) => {
                let mut cache = cache.lock().await;
                if let Some(token) = cache.as_ref() {
                    if !token.is_expired() {
                        debug!("using cached token");
                        return Ok(token.secret().to_string());
                    }
                    debug!("cached token expired");
                }
                let token = self.login().await?;
                let secret = token.secret().to_string();
                *cache = Some(token);
                Ok(secret)
            }
            TokenSource::Shared(store) => {
                if let Some(token) = Self::read_store(store).await? {
                    if !token.is_expired() {
                        debug!("using token from {}", store.path().display());
                        return Ok(token.secret().to_string());
                    }
                    debug!("stored token expired");
                }
                let token = self.login().await?;
                Self::write_store(store, &token).await?;
                Ok(token.secret().to_string())
            }
        }
    }

    /// Exchange the credentials for a fresh admin token.
    async fn login(&self) -> Result<Token> {
        info!(
            "requesting admin token from {}",
            self.credentials.base_url()
        );

        let response = self
            .http_client
            .post(constants::admin_token_endpoint(self.credentials.base_url()))
            .json(&serde_json::json!({
                "username": self.credentials.username(),
                "password": self.credentials.password(),
            }))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        let decoded: Value = serde_json::from_str(body.trim()).map_err(|e| Error::RequestFailed {
            status,
            body: format!("invalid response: {}. raw response: {}", e, body),
        })?;

        if status != 200 {
            return Err(Error::Authentication { status, body });
        }

        let secret = decoded.as_str().ok_or_else(|| Error::RequestFailed {
            status,
            body: format!("token response was not a string: {}", body),
        })?;

        debug!(
            "admin token issued, valid for {}s",
            self.token_lifetime.as_secs()
        );
        Ok(Token::with_lifetime(secret.trim(), self.token_lifetime))
    }

    // Storage waits are bounded but blocking, so they run off the executor.

    async fn read_store(store: &TokenStore) -> Result<Option<Token>> {
        let store = store.clone();
        tokio::task::spawn_blocking(move || store.read())
            .await
            .map_err(|e| Error::StorageUnavailable(format!("storage task failed: {e}")))?
    }

    async fn write_store(store: &TokenStore, token: &Token) -> Result<()> {
        let store = store.clone();
        let token = token.clone();
        tokio::task::spawn_blocking(move || store.write(&token))
            .await
            .map_err(|e| Error::StorageUnavailable(format!("storage task failed: {e}")))?
    }
}
