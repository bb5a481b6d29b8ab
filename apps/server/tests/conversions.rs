use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use forex_server::api::app_router;
use forex_server::config::Config;
use forex_server::main_lib::build_state;
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

async fn build_test_router() -> (TempDir, axum::Router) {
    let tmp = tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        use_mock_provider: true,
        fixer_api_key: String::new(),
        fixer_base_url: String::new(),
    };
    let state = build_state(&config).await.unwrap();
    (tmp, app_router(state))
}

async fn send_json(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&value).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn convert_then_fetch_by_transaction_id() {
    let (_tmp, app) = build_test_router().await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/conversions",
        Some(json!({
            "sourceAmount": 100.00,
            "sourceCurrency": "EUR",
            "targetCurrency": "USD"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sourceCurrency"], "EUR");
    assert_eq!(body["targetCurrency"], "USD");
    assert_eq!(body["exchangeRate"].as_f64().unwrap(), 1.09);
    assert_eq!(body["targetAmount"].as_f64().unwrap(), 109.00);
    let transaction_id = body["transactionId"].as_str().unwrap().to_string();
    assert!(!transaction_id.is_empty());

    let (status, history) = send_json(
        &app,
        Method::GET,
        &format!("/api/v1/conversions?transactionId={transaction_id}"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(history["totalElements"], 1);
    assert_eq!(history["content"][0]["transactionId"], transaction_id.as_str());
    assert_eq!(history["content"][0]["targetAmount"].as_f64().unwrap(), 109.00);
}

#[tokio::test]
async fn history_by_date_range_includes_new_conversion() {
    let (_tmp, app) = build_test_router().await;

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/v1/conversions",
        Some(json!({
            "sourceAmount": 50,
            "sourceCurrency": "EUR",
            "targetCurrency": "GBP"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let uri = "/api/v1/conversions?startDate=2000-01-01%2000:00:00&endDate=2100-01-01%2000:00:00";
    let (status, history) = send_json(&app, Method::GET, uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(history["totalElements"], 1);
    assert_eq!(history["content"][0]["targetCurrency"], "GBP");
    assert_eq!(history["content"][0]["targetAmount"].as_f64().unwrap(), 42.50);
}

#[tokio::test]
async fn ambiguous_history_query_is_rejected() {
    let (_tmp, app) = build_test_router().await;

    let (status, body) = send_json(&app, Method::GET, "/api/v1/conversions", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");

    // Half a date pair is not enough.
    let uri = "/api/v1/conversions?startDate=2024-01-01%2000:00:00";
    let (status, body) = send_json(&app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn malformed_conversion_requests_are_rejected() {
    let (_tmp, app) = build_test_router().await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/conversions",
        Some(json!({
            "sourceAmount": 100,
            "sourceCurrency": "usd",
            "targetCurrency": "EUR"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/conversions",
        Some(json!({
            "sourceAmount": -5,
            "sourceCurrency": "USD",
            "targetCurrency": "EUR"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn exchange_rate_lookup() {
    let (_tmp, app) = build_test_router().await;

    let (status, body) = send_json(
        &app,
        Method::GET,
        "/api/v1/exchange-rates?sourceCurrency=EUR&targetCurrency=USD",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sourceCurrency"], "EUR");
    assert_eq!(body["targetCurrency"], "USD");
    assert_eq!(body["exchangeRate"].as_f64().unwrap(), 1.09);

    let (status, body) = send_json(
        &app,
        Method::GET,
        "/api/v1/exchange-rates?sourceCurrency=usd&targetCurrency=EUR",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn mock_provider_accepts_any_source_currency() {
    let (_tmp, app) = build_test_router().await;

    // With the mock provider active there is no EUR-only restriction; that
    // rule belongs to the live provider's tier, not the API.
    let (status, body) = send_json(
        &app,
        Method::GET,
        "/api/v1/exchange-rates?sourceCurrency=USD&targetCurrency=GBP",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sourceCurrency"], "USD");
    assert_eq!(body["exchangeRate"].as_f64().unwrap(), 0.85);
}

#[tokio::test]
async fn health_endpoint_responds() {
    let (_tmp, app) = build_test_router().await;
    let (status, body) = send_json(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
