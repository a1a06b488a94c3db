//! Order operations

use reqwest::Method;
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::client::MagentoClient;
use crate::api::error::{Error, Result};
use crate::api::query::{Filter, SearchCriteria};

/// Optional parts of a shipment; only the parts that are set end up in the
/// request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShipmentRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Value>,
}

impl MagentoClient {
    /// Search orders.
    pub async fn orders(&self, criteria: &SearchCriteria) -> Result<Value> {
        let url = format!(
            "{}?{}",
            self.endpoint("/orders"),
            criteria.to_query_string()?
        );
        self.request(Method::GET, &url, None).await
    }

    /// Fetch a single order by entity id.
    pub async fn order(&self, order_id: u64) -> Result<Value> {
        let url = self.endpoint(&format!("/orders/{order_id}"));
        self.request(Method::GET, &url, None).await
    }

    /// Fetch a single order by its customer-facing increment id.
    pub async fn order_by_increment_id(&self, increment_id: &str) -> Result<Value> {
        let criteria = SearchCriteria::builder()
            .filter(Filter::eq("increment_id", increment_id))
            .build()?;
        let response = self.orders(&criteria).await?;

        response
            .get("items")
            .and_then(Value::as_array)
            .and_then(|items| items.first())
            .cloned()
            .ok_or_else(|| Error::EntityNotFound {
                message: format!("no order with increment id {increment_id}"),
            })
    }

    /// Search order items across orders.
    pub async fn order_items(&self, criteria: &SearchCriteria) -> Result<Value> {
        let url = format!(
            "{}?{}",
            self.endpoint("/orders/items"),
            criteria.to_query_string()?
        );
        self.request(Method::GET, &url, None).await
    }

    /// Attach a status history comment to an order. The current status must
    /// be passed even when it is not being changed.
    pub async fn add_order_comment(
        &self,
        order_id: u64,
        status: &str,
        comment: &str,
        notify_customer: bool,
    ) -> Result<Value> {
        let url = self.endpoint(&format!("/orders/{order_id}/comments"));
        let body = json!({
            "statusHistory": {
                "comment": comment,
                "status": status,
                "parent_id": order_id,
                "is_customer_notified": if notify_customer { 1 } else { 0 },
                "is_visible_on_front": 1,
            }
        });
        self.request(Method::POST, &url, Some(&body)).await
    }

    /// Create a shipment for an order. An empty request ships the whole
    /// order.
    pub async fn ship_order(&self, order_id: u64, shipment: &ShipmentRequest) -> Result<Value> {
        let url = self.endpoint(&format!("/order/{order_id}/ship"));
        let body = serde_json::to_value(shipment).map_err(|e| Error::InvalidArgument(
            format!("unencodable shipment request: {e}"),
        ))?;
        self.request(Method::POST, &url, Some(&body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_shipment_serializes_to_empty_object() {
        let body = serde_json::to_value(ShipmentRequest::default()).unwrap();
        assert_eq!(body, json!({}));
    }

    #[test]
    fn test_shipment_includes_only_set_parts() {
        let shipment = ShipmentRequest {
            items: vec![json!({ "order_item_id": 1, "qty": 2 })],
            tracks: vec![json!({ "track_number": "1Z999", "carrier_code": "ups" })],
            ..Default::default()
        };
        let body = serde_json::to_value(&shipment).unwrap();

        assert!(body.get("items").is_some());
        assert!(body.get("tracks").is_some());
        assert!(body.get("comment").is_none());
        assert!(body.get("packages").is_none());
        assert!(body.get("arguments").is_none());
    }
}
