#![allow(clippy::unwrap_used)]
// Integration tests for `QuecClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use quecmanager_api::{DataUsage, Error, QuecClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, QuecClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = QuecClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn script_path(script: &str) -> String {
    format!("/cgi-bin/quecmanager/{script}")
}

// ── Settings ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_measurement_units() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(script_path("settings/measurement_units.sh")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": { "unit": "mi" }
        })))
        .mount(&server)
        .await;

    let units = client.get_measurement_units().await.unwrap();
    assert_eq!(units.unit, "mi");
}

#[tokio::test]
async fn test_envelope_error_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(script_path("settings/measurement_units.sh")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "config file missing"
        })))
        .mount(&server)
        .await;

    let result = client.get_measurement_units().await;
    match result {
        Err(Error::Cgi { message }) => assert_eq!(message, "config file missing"),
        other => panic!("expected Cgi error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_success_without_data() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(script_path("settings/measurement_units.sh")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .mount(&server)
        .await;

    let result = client.get_measurement_units().await;
    assert!(
        matches!(result, Err(Error::EmptyPayload { .. })),
        "expected EmptyPayload, got: {result:?}"
    );
}

#[tokio::test]
async fn test_http_error_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(script_path("monitoring/data_usage.sh")))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client.get_data_usage().await.unwrap_err();
    assert!(err.is_transient(), "502 should be transient: {err:?}");
    match err {
        Error::Http { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "Bad Gateway");
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_script_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(script_path("monitoring/data_usage.sh")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.get_data_usage().await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(script_path("monitoring/data_usage.sh")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let result = client.get_data_usage().await;
    match result {
        Err(Error::Deserialization { body, .. }) => assert_eq!(body, "<html>login</html>"),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

// ── Data usage ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_data_usage() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(script_path("monitoring/data_usage.sh")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": { "totalBytes": 5_368_709_120_u64 }
        })))
        .mount(&server)
        .await;

    let usage = client.get_data_usage().await.unwrap();
    assert_eq!(
        usage,
        DataUsage {
            total_bytes: 5_368_709_120
        }
    );
}

#[tokio::test]
async fn test_data_usage_warning() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(script_path("monitoring/data_usage_warning.sh")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {
                "enabled": true,
                "monthlyLimitBytes": 10_737_418_240_u64,
                "warningThresholdPercent": 90,
                "warningAlreadyShown": false
            }
        })))
        .mount(&server)
        .await;

    let warning = client.get_data_usage_warning().await.unwrap();
    assert!(warning.enabled);
    assert_eq!(warning.monthly_limit_bytes, 10_737_418_240);
    assert_eq!(warning.warning_threshold_percent, 90.0);
    assert!(!warning.warning_already_shown);
}

#[tokio::test]
async fn test_data_usage_warning_keeps_out_of_range_threshold() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(script_path("monitoring/data_usage_warning.sh")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {
                "enabled": true,
                "monthlyLimitBytes": 1024,
                "warningThresholdPercent": 300
            }
        })))
        .mount(&server)
        .await;

    let warning = client.get_data_usage_warning().await.unwrap();
    assert_eq!(warning.warning_threshold_percent, 300.0);
    assert!(!warning.warning_already_shown);
}

#[tokio::test]
async fn test_data_usage_warning_fractional_threshold() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(script_path("monitoring/data_usage_warning.sh")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {
                "enabled": true,
                "monthlyLimitBytes": 1024,
                "warningThresholdPercent": 87.5,
                "warningAlreadyShown": true
            }
        })))
        .mount(&server)
        .await;

    let warning = client.get_data_usage_warning().await.unwrap();
    assert_eq!(warning.warning_threshold_percent, 87.5);
    assert!(warning.warning_already_shown);
}

#[tokio::test]
async fn test_dismiss_posts_action() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(script_path("monitoring/data_usage_warning.sh")))
        .and(body_json(json!({ "action": "dismiss" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&server)
        .await;

    client.dismiss_data_usage_warning().await.unwrap();
}
