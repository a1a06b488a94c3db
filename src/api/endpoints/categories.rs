//! Category operations

use reqwest::Method;
use serde_json::Value;

use crate::api::client::MagentoClient;
use crate::api::error::Result;
use crate::api::query::{SearchCriteria, SortOrder};

impl MagentoClient {
    /// Search categories.
    pub async fn categories(&self, criteria: &SearchCriteria) -> Result<Value> {
        let url = format!(
            "{}?{}",
            self.endpoint("/categories/list"),
            criteria.to_query_string()?
        );
        self.request(Method::GET, &url, None).await
    }

    /// Fetch every category, walking pages of `page_size` until the reported
    /// total is exhausted.
    pub async fn all_categories(
        &self,
        sort_order: Option<SortOrder>,
        page_size: u32,
    ) -> Result<Vec<Value>> {
        let mut categories = Vec::new();
        let mut page = 1u32;

        loop {
            let mut builder = SearchCriteria::builder().page(page).page_size(page_size);
            if let Some(sort_order) = sort_order.clone() {
                builder = builder.sort(sort_order);
            }
            let response = self.categories(&builder.build()?).await?;

            if let Some(items) = response.get("items").and_then(Value::as_array) {
                categories.extend(items.iter().cloned());
            }
            let total = response
                .get("total_count")
                .and_then(Value::as_u64)
                .unwrap_or(0);

            page += 1;
            if u64::from(page - 1) * u64::from(page_size) > total {
                break;
            }
        }

        Ok(categories)
    }
}
