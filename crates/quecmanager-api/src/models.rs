// Wire models for the device CGI scripts.
//
// Every script answers with the same JSON envelope:
// `{"status": "success" | "error", "message": "...", "data": {...}}`.
// Field names inside `data` are camelCase.

use serde::{Deserialize, Serialize};

/// Outcome flag carried by every CGI response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CgiStatus {
    Success,
    Error,
}

/// The `{status, message, data}` envelope.
#[derive(Debug, Deserialize)]
pub struct CgiResponse<T> {
    pub status: CgiStatus,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// `settings/measurement_units.sh` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementUnits {
    /// `"km"` or `"mi"`.
    pub unit: String,
}

/// `monitoring/data_usage_warning.sh` payload.
///
/// The threshold is decoded as-is, including fractional or out-of-range
/// values; range checks belong to the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataUsageWarning {
    pub enabled: bool,
    pub monthly_limit_bytes: u64,
    pub warning_threshold_percent: f64,
    #[serde(default)]
    pub warning_already_shown: bool,
}

/// `monitoring/data_usage.sh` payload. LTE and NR counters are summed by
/// the script before they reach us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataUsage {
    pub total_bytes: u64,
}

/// Body posted to the warning script to mark the warning as shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DismissRequest {
    pub action: &'static str,
}

impl DismissRequest {
    pub fn dismiss() -> Self {
        Self { action: "dismiss" }
    }
}
