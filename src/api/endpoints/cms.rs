//! CMS page operations

use reqwest::Method;
use serde_json::Value;

use crate::api::client::MagentoClient;
use crate::api::error::Result;
use crate::api::query::SearchCriteria;

impl MagentoClient {
    /// Search CMS pages.
    pub async fn cms_pages(&self, criteria: &SearchCriteria) -> Result<Value> {
        let url = format!(
            "{}?{}",
            self.endpoint("/cmsPage/search"),
            criteria.to_query_string()?
        );
        self.request(Method::GET, &url, None).await
    }
}
