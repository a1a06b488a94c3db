//! Integration tests for the retry pipeline
//!
//! Drives the whole request path against a mock platform that reports
//! database deadlocks, and checks the exact number of round-trips.

use std::time::Duration;

use magento2_client::{Error, MagentoClient, RetryConfig};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/rest/V1/integration/admin/token";
const PRODUCT_PATH: &str = "/rest/V1/products/widget";

const DEADLOCK_BODY: &str =
    "SQLSTATE[40001]: Database deadlock found when trying to get lock; try restarting transaction";

fn fast_retries() -> RetryConfig {
    RetryConfig {
        max_attempts: 10,
        base_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
        jitter: false,
    }
}

async fn mock_client(server: &MockServer) -> MagentoClient {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json("abc123"))
        .mount(server)
        .await;

    MagentoClient::new(server.uri(), "admin", "secret").with_retry_config(fast_retries())
}

async fn count_product_calls(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == PRODUCT_PATH)
        .count()
}

/// Deadlocks on the first k attempts and success on attempt k + 1 resolve
/// after exactly k + 1 underlying calls.
#[tokio::test]
async fn test_transient_then_success_takes_k_plus_one_calls() {
    let server = MockServer::start().await;
    let client = mock_client(&server).await;

    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": DEADLOCK_BODY })),
        )
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sku": "widget" })))
        .mount(&server)
        .await;

    let product = client.product_by_sku("widget").await.unwrap();
    assert_eq!(product["sku"], "widget");
    assert_eq!(count_product_calls(&server).await, 3);
}

/// A platform that never stops deadlocking gets exactly ten attempts, then
/// the last transient outcome surfaces as a terminal error.
#[tokio::test]
async fn test_persistent_deadlock_exhausts_ten_attempts() {
    let server = MockServer::start().await;
    let client = mock_client(&server).await;

    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": DEADLOCK_BODY })),
        )
        .mount(&server)
        .await;

    let err = client.product_by_sku("widget").await.unwrap_err();
    match err {
        Error::Transient { attempts, message } => {
            assert_eq!(attempts, 10);
            assert!(message.contains("Database deadlock"));
        }
        other => panic!("expected Transient, got {other:?}"),
    }
    assert_eq!(count_product_calls(&server).await, 10);

    // the token is cached across attempts, so one login serves all ten
    let logins = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == TOKEN_PATH)
        .count();
    assert_eq!(logins, 1);
}

/// A missing entity is surfaced immediately, never retried.
#[tokio::test]
async fn test_entity_not_found_is_not_retried() {
    let server = MockServer::start().await;
    let client = mock_client(&server).await;

    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "The product that was requested doesn't exist. Verify the product and try again."
        })))
        .mount(&server)
        .await;

    let err = client.product_by_sku("widget").await.unwrap_err();
    assert!(matches!(err, Error::EntityNotFound { .. }));
    assert_eq!(count_product_calls(&server).await, 1);
}

/// Any other failure carries the status and body and is not retried.
#[tokio::test]
async fn test_generic_failure_is_not_retried() {
    let server = MockServer::start().await;
    let client = mock_client(&server).await;

    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Internal server error"
        })))
        .mount(&server)
        .await;

    let err = client.product_by_sku("widget").await.unwrap_err();
    match err {
        Error::RequestFailed { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("Internal server error"));
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
    assert_eq!(count_product_calls(&server).await, 1);
}

/// A body that is not JSON fails classification without being retried.
#[tokio::test]
async fn test_undecodable_body_is_generic_failure() {
    let server = MockServer::start().await;
    let client = mock_client(&server).await;

    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client.product_by_sku("widget").await.unwrap_err();
    match err {
        Error::RequestFailed { status, body } => {
            assert_eq!(status, 502);
            assert!(body.contains("invalid response"));
            assert!(body.contains("Bad Gateway"));
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
    assert_eq!(count_product_calls(&server).await, 1);
}
