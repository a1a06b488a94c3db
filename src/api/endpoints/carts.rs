//! Guest cart operations

use reqwest::Method;
use serde_json::Value;

use crate::api::client::MagentoClient;
use crate::api::error::Result;

impl MagentoClient {
    /// Fetch the payment methods available to a guest cart in one store
    /// scope.
    pub async fn payment_methods(&self, cart_id: &str, store_code: &str) -> Result<Value> {
        let url = format!(
            "{}?storeCode={}",
            self.endpoint(&format!(
                "/guest-carts/{}/payment-methods",
                urlencoding::encode(cart_id)
            )),
            urlencoding::encode(store_code)
        );
        self.request(Method::GET, &url, None).await
    }

    /// Set the shipping information of a guest cart in one store scope.
    pub async fn set_shipping_information(
        &self,
        cart_id: &str,
        information: &Value,
        store_code: &str,
    ) -> Result<Value> {
        let url = format!(
            "{}?storeCode={}",
            self.endpoint(&format!(
                "/guest-carts/{}/shipping-information",
                urlencoding::encode(cart_id)
            )),
            urlencoding::encode(store_code)
        );
        self.request(Method::POST, &url, Some(information)).await
    }
}
