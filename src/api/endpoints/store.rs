//! Store configuration operations

use reqwest::Method;
use serde_json::Value;

use crate::api::client::MagentoClient;
use crate::api::error::Result;

impl MagentoClient {
    /// Fetch all store views.
    pub async fn store_views(&self) -> Result<Value> {
        let url = self.endpoint("/store/storeViews");
        self.request(Method::GET, &url, None).await
    }

    /// Fetch all store groups.
    pub async fn store_groups(&self) -> Result<Value> {
        let url = self.endpoint("/store/storeGroups");
        self.request(Method::GET, &url, None).await
    }

    /// Fetch store configurations, optionally limited to the given store
    /// codes.
    pub async fn store_configuration(&self, store_codes: &[&str]) -> Result<Value> {
        let mut url = self.endpoint("/store/storeConfigs");
        if !store_codes.is_empty() {
            url.push('?');
            url.push_str(&indexed_query("storeCode", store_codes));
        }
        self.request(Method::GET, &url, None).await
    }
}

/// Render `key[0]=a&key[1]=b` array parameters.
fn indexed_query(key: &str, values: &[&str]) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| format!("{key}[{i}]={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
