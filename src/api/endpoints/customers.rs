//! Customer operations

use reqwest::Method;
use serde_json::Value;

use crate::api::client::MagentoClient;
use crate::api::error::Result;

impl MagentoClient {
    /// Fetch a single customer by id.
    pub async fn customer(&self, customer_id: u64) -> Result<Value> {
        let url = self.endpoint(&format!("/customers/{customer_id}"));
        self.request(Method::GET, &url, None).await
    }
}
