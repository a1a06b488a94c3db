//! Product catalog operations

use reqwest::Method;
use serde_json::{json, Value};

use crate::api::client::MagentoClient;
use crate::api::constants::DEFAULT_STORE_CODE;
use crate::api::error::Result;
use crate::api::query::SearchCriteria;

impl MagentoClient {
    /// Search products.
    pub async fn products(&self, criteria: &SearchCriteria) -> Result<Value> {
        let url = format!(
            "{}?{}",
            self.endpoint("/products"),
            criteria.to_query_string()?
        );
        self.request(Method::GET, &url, None).await
    }

    /// Fetch a single product by SKU.
    pub async fn product_by_sku(&self, sku: &str) -> Result<Value> {
        let url = self.endpoint(&format!("/products/{}", urlencoding::encode(sku)));
        self.request(Method::GET, &url, None).await
    }

    /// Create a product in the default store scope.
    pub async fn create_product(&self, product: &Value) -> Result<Value> {
        let url = self.store_endpoint(DEFAULT_STORE_CODE, "/products");
        let body = json!({ "product": product });
        self.request(Method::POST, &url, Some(&body)).await
    }

    /// Update an existing product; `data` is merged server-side with the
    /// record identified by `sku`.
    pub async fn update_product(&self, sku: &str, data: &Value, store_code: &str) -> Result<Value> {
        let mut product = data.clone();
        if let Some(map) = product.as_object_mut() {
            map.insert("sku".to_string(), Value::String(sku.to_string()));
        }
        let url = self.store_endpoint(store_code, "/products");
        let body = json!({ "product": product });
        self.request(Method::POST, &url, Some(&body)).await
    }

    /// Fetch a product attribute definition.
    pub async fn product_attribute(&self, attribute: &str) -> Result<Value> {
        let url = self.endpoint(&format!(
            "/products/attributes/{}",
            urlencoding::encode(attribute)
        ));
        self.request(Method::GET, &url, None).await
    }

    /// Fetch the options of a product attribute in one store scope.
    pub async fn product_attribute_options(
        &self,
        attribute: &str,
        store_code: &str,
    ) -> Result<Value> {
        let url = self.store_endpoint(
            store_code,
            &format!("/products/attributes/{}", urlencoding::encode(attribute)),
        );
        let response = self.request(Method::GET, &url, None).await?;
        Ok(response
            .get("options")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())))
    }

    /// Add an option label to a product attribute.
    pub async fn add_product_attribute_label(
        &self,
        attribute: &str,
        label: &str,
        store_labels: Option<&Value>,
    ) -> Result<Value> {
        let mut option = json!({ "label": label });
        if let Some(store_labels) = store_labels {
            option["store_labels"] = store_labels.clone();
        }
        let url = self.endpoint(&format!(
            "/products/attributes/{}/options",
            urlencoding::encode(attribute)
        ));
        let body = json!({ "option": option });
        self.request(Method::POST, &url, Some(&body)).await
    }

    /// Delete an option label from a product attribute.
    pub async fn delete_product_attribute_label(
        &self,
        attribute: &str,
        label_id: i64,
    ) -> Result<Value> {
        let url = self.endpoint(&format!(
            "/products/attributes/{}/options/{}",
            urlencoding::encode(attribute),
            label_id
        ));
        self.request(Method::DELETE, &url, None).await
    }

    /// Fetch tier prices for one SKU.
    pub async fn tier_prices(&self, sku: &str) -> Result<Value> {
        let url = self.endpoint("/products/tier-prices-information");
        let body = json!({ "skus": [sku] });
        self.request(Method::POST, &url, Some(&body)).await
    }

    /// Replace the tier prices of one SKU; every entry is forced onto that
    /// SKU before the call.
    pub async fn set_tier_prices(&self, sku: &str, tier_prices: &[Value]) -> Result<Value> {
        let prices = with_sku(sku, tier_prices);
        let url = self.endpoint("/products/tier-prices");
        let body = json!({ "prices": prices });
        self.request(Method::PUT, &url, Some(&body)).await
    }

    /// Remove all tier prices of one SKU. The platform only deletes prices
    /// it is handed back, so they are fetched first.
    pub async fn remove_tier_prices(&self, sku: &str) -> Result<Value> {
        let existing = self.tier_prices(sku).await?;
        let prices = with_sku(sku, existing.as_array().map(Vec::as_slice).unwrap_or(&[]));
        let url = self.endpoint("/products/tier-prices-delete");
        let body = json!({ "prices": prices });
        self.request(Method::POST, &url, Some(&body)).await
    }

    /// Assign a product to a category.
    pub async fn add_product_to_category(
        &self,
        sku: &str,
        category_id: i64,
        position: Option<i64>,
        extension_attributes: Option<&Value>,
    ) -> Result<Value> {
        let mut product_link = json!({
            "sku": sku,
            "category_id": category_id,
        });
        if let Some(position) = position {
            product_link["position"] = json!(position);
        }
        if let Some(extension_attributes) = extension_attributes {
            product_link["extension_attributes"] = extension_attributes.clone();
        }
        let url = self.endpoint(&format!("/categories/{category_id}/products"));
        let body = json!({ "productLink": product_link });
        self.request(Method::POST, &url, Some(&body)).await
    }

    /// Set the website a product belongs to.
    pub async fn set_website_for_product(&self, sku: &str, website_id: i64) -> Result<Value> {
        let url = self.endpoint(&format!("/products/{}/websites", urlencoding::encode(sku)));
        let body = json!({
            "productWebsiteLink": {
                "sku": sku,
                "website_id": website_id,
            }
        });
        self.request(Method::PUT, &url, Some(&body)).await
    }

    /// Fetch the media gallery entries of a product.
    pub async fn media_gallery_entries(&self, sku: &str) -> Result<Value> {
        let url = self.endpoint(&format!("/products/{}/media", urlencoding::encode(sku)));
        self.request(Method::GET, &url, None).await
    }

    /// Add a media gallery entry in one store scope.
    pub async fn add_media_gallery_entry(
        &self,
        sku: &str,
        entry: &Value,
        store_code: &str,
    ) -> Result<Value> {
        let url = self.store_endpoint(
            store_code,
            &format!("/products/{}/media", urlencoding::encode(sku)),
        );
        let body = json!({ "entry": entry });
        self.request(Method::POST, &url, Some(&body)).await
    }

    /// Update a media gallery entry in one store scope.
    pub async fn update_media_gallery_entry(
        &self,
        sku: &str,
        entry_id: i64,
        entry: &Value,
        store_code: &str,
    ) -> Result<Value> {
        let url = self.store_endpoint(
            store_code,
            &format!("/products/{}/media/{}", urlencoding::encode(sku), entry_id),
        );
        let body = json!({ "entry": entry });
        self.request(Method::PUT, &url, Some(&body)).await
    }

    /// Delete a media gallery entry.
    pub async fn delete_media_gallery_entry(&self, sku: &str, entry_id: i64) -> Result<Value> {
        let url = self.endpoint(&format!(
            "/products/{}/media/{}",
            urlencoding::encode(sku),
            entry_id
        ));
        self.request(Method::DELETE, &url, None).await
    }
}

/// Clone the entries with their `sku` field forced to the given SKU.
fn with_sku(sku: &str, entries: &[Value]) -> Vec<Value> {
    entries
        .iter()
        .map(|entry| {
            let mut entry = entry.clone();
            if let Some(map) = entry.as_object_mut() {
                map.insert("sku".to_string(), Value::String(sku.to_string()));
            }
            entry
        })
        .collect()
}
