use std::time::{Duration, SystemTime};

/// Connection credentials for one Magento instance, immutable for the
/// lifetime of a client.
#[derive(Debug, Clone)]
pub struct Credentials {
    base_url: String,
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Bearer token with its absolute expiry instant.
///
/// A token is usable while the current time is before `expires_at`; it is
/// only ever replaced wholesale, never partially updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    secret: String,
    expires_at: SystemTime,
}

impl Token {
    pub fn new(secret: impl Into<String>, expires_at: SystemTime) -> Self {
        Self {
            secret: secret.into(),
            expires_at,
        }
    }

    /// Token valid for `lifetime` from now.
    pub fn with_lifetime(secret: impl Into<String>, lifetime: Duration) -> Self {
        Self::new(secret, SystemTime::now() + lifetime)
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn expires_at(&self) -> SystemTime {
        self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        SystemTime::now() >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let credentials = Credentials::new("https://store.example/", "admin", "secret");
        assert_eq!(credentials.base_url(), "https://store.example");

        let credentials = Credentials::new("https://store.example", "admin", "secret");
        assert_eq!(credentials.base_url(), "https://store.example");
    }

    #[test]
    fn test_token_expiry() {
        let live = Token::with_lifetime("abc123", Duration::from_secs(60));
        assert!(!live.is_expired());

        let expired = Token::new("abc123", SystemTime::now() - Duration::from_secs(1));
        assert!(expired.is_expired());
    }
}
