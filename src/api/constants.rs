//! API constants and URL helpers for the Magento 2 REST API

/// Base API path for the default store scope
pub const API_BASE_PATH: &str = "/rest/V1";

/// Path of the admin token exchange endpoint
pub const ADMIN_TOKEN_PATH: &str = "/rest/V1/integration/admin/token";

/// Store code used when an endpoint is not given an explicit one
pub const DEFAULT_STORE_CODE: &str = "default";

/// How long an issued admin token stays valid, in seconds
pub const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 10_800;

/// Body message the platform sends for a missing entity on a 404
pub const ENTITY_NOT_FOUND_MESSAGE: &str =
    "The product that was requested doesn't exist. Verify the product and try again.";

/// Substring marking a recoverable lock contention error on the platform side
pub const DEADLOCK_MESSAGE_FRAGMENT: &str = "Database deadlock found when trying to get lock";

/// Standard headers for Magento 2 requests
pub mod headers {
    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    /// Default User-Agent identifying this client
    pub const USER_AGENT: &str = concat!("magento2-client/", env!("CARGO_PKG_VERSION"));
}

/// Build a default-scope endpoint URL
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}{}", base_url, API_BASE_PATH, path)
}

/// Build a store-code scoped endpoint URL
pub fn store_endpoint(base_url: &str, store_code: &str, path: &str) -> String {
    format!("{}/rest/{}/V1{}", base_url, store_code, path)
}

/// Build the admin token exchange URL
pub fn admin_token_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url, ADMIN_TOKEN_PATH)
}
