//! Stock and inventory operations

use reqwest::Method;
use serde_json::{json, Value};

use crate::api::client::MagentoClient;
use crate::api::error::Result;

/// Stock item the platform falls back to when none is named.
const DEFAULT_STOCK_ITEM_ID: i64 = 1;

impl MagentoClient {
    /// Fetch the stock item of one SKU.
    pub async fn stock_item(&self, sku: &str) -> Result<Value> {
        let url = self.endpoint(&format!("/stockItems/{}", urlencoding::encode(sku)));
        self.request(Method::GET, &url, None).await
    }

    /// Fetch the stock statuses of one SKU.
    pub async fn stock_statuses(&self, sku: &str) -> Result<Value> {
        let url = self.endpoint(&format!("/stockStatuses/{}", urlencoding::encode(sku)));
        self.request(Method::GET, &url, None).await
    }

    /// Set the stock quantity of one SKU.
    pub async fn set_stock_level_for_sku(
        &self,
        sku: &str,
        quantity: i64,
        item_id: Option<i64>,
    ) -> Result<Value> {
        self.set_stock_data_for_sku(sku, &json!({ "qty": quantity }), item_id)
            .await
    }

    /// Update arbitrary stock item fields of one SKU.
    pub async fn set_stock_data_for_sku(
        &self,
        sku: &str,
        stock_data: &Value,
        item_id: Option<i64>,
    ) -> Result<Value> {
        let item_id = item_id.unwrap_or(DEFAULT_STOCK_ITEM_ID);
        let url = self.endpoint(&format!(
            "/products/{}/stockItems/{}",
            urlencoding::encode(sku),
            item_id
        ));
        let body = json!({ "stockItem": stock_data });
        self.request(Method::PUT, &url, Some(&body)).await
    }
}
