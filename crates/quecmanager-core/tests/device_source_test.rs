#![allow(clippy::unwrap_used)]
// Integration tests for the `QuecClient` collaborator impls: wire payloads
// from a wiremock device decoded into domain types, and the `Monitor`
// fallbacks that sit on top of them.

use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use quecmanager_core::{
    CoreError, DeviceConfig, MeasurementUnit, MeasurementUnitSource, Monitor, QuecClient, Radio,
    UsageWarningSource,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, QuecClient) {
    let server = MockServer::start().await;
    let device = DeviceConfig::new(Url::parse(&server.uri()).unwrap());
    let client = device.connect().unwrap();
    (server, client)
}

async fn mount_success(server: &MockServer, script: &str, data: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/cgi-bin/quecmanager/{script}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": data
        })))
        .mount(server)
        .await;
}

async fn mount_warning(server: &MockServer, limit: u64, threshold: Value) {
    mount_success(
        server,
        "monitoring/data_usage_warning.sh",
        json!({
            "enabled": true,
            "monthlyLimitBytes": limit,
            "warningThresholdPercent": threshold,
            "warningAlreadyShown": false
        }),
    )
    .await;
}

async fn mount_counters(server: &MockServer, total_bytes: u64) {
    mount_success(
        server,
        "monitoring/data_usage.sh",
        json!({ "totalBytes": total_bytes }),
    )
    .await;
}

// ── Measurement unit ────────────────────────────────────────────────

#[tokio::test]
async fn test_unit_is_parsed() {
    let (server, client) = setup().await;
    mount_success(&server, "settings/measurement_units.sh", json!({ "unit": "MI" })).await;

    assert_eq!(client.measurement_unit().await.unwrap(), MeasurementUnit::Mi);
}

#[tokio::test]
async fn test_unknown_unit_is_invalid_response() {
    let (server, client) = setup().await;
    mount_success(&server, "settings/measurement_units.sh", json!({ "unit": "yards" })).await;

    match client.measurement_unit().await {
        Err(CoreError::InvalidResponse { message }) => assert!(message.contains("yards")),
        other => panic!("expected InvalidResponse, got: {other:?}"),
    }

    let monitor = Monitor::new(client);
    assert_eq!(monitor.measurement_unit().await, MeasurementUnit::Km);
    assert_eq!(monitor.distance(Radio::Lte, 1).await.formatted, "78 m");
}

// ── Usage warning config ────────────────────────────────────────────

#[tokio::test]
async fn test_zero_limit_is_invalid_response() {
    let (server, client) = setup().await;
    mount_warning(&server, 0, json!(90)).await;
    mount_counters(&server, 1024).await;

    assert!(matches!(
        client.usage_warning_config().await,
        Err(CoreError::InvalidResponse { .. })
    ));

    let monitor = Monitor::new(client);
    assert!(monitor.pending_usage_warning().await.is_none());
}

#[tokio::test]
async fn test_threshold_above_hundred_is_capped() {
    let (server, client) = setup().await;
    mount_warning(&server, 1000, json!(300)).await;
    mount_counters(&server, 1000).await;

    let config = client.usage_warning_config().await.unwrap();
    assert_eq!(config.warning_threshold_percent, 100);
    assert_eq!(config.monthly_limit_bytes.get(), 1000);

    // At exactly the limit the capped threshold is reached.
    let decision = Monitor::new(client).pending_usage_warning().await.unwrap();
    assert!(decision.show);
    assert!(decision.is_over_limit);
}

#[tokio::test]
async fn test_fractional_threshold_is_rounded() {
    let (server, client) = setup().await;
    mount_warning(&server, 1000, json!(79.6)).await;

    let config = client.usage_warning_config().await.unwrap();
    assert_eq!(config.warning_threshold_percent, 80);
}

#[tokio::test]
async fn test_device_error_means_no_pending_warning() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/cgi-bin/quecmanager/monitoring/data_usage_warning.sh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "usage tracking disabled"
        })))
        .mount(&server)
        .await;

    let monitor = Monitor::new(client);
    assert!(monitor.pending_usage_warning().await.is_none());
    assert!(matches!(
        monitor.usage_report().await,
        Err(CoreError::Device { .. })
    ));
}
