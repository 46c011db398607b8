// ── Data usage formatting and warning evaluation ──
//
// The evaluator is read-only with respect to the warning config:
// dismissal is the config store's job (see `source::DismissalSink`).

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

/// Unit names for successive powers of 1024.
const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Aggregated byte counters reported by the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCounters {
    pub total_bytes: u64,
}

/// Snapshot of the monthly data-usage warning settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageWarningConfig {
    pub enabled: bool,
    pub monthly_limit_bytes: NonZeroU64,
    /// Percentage of the limit (0-100) at which the warning is raised.
    pub warning_threshold_percent: u8,
    pub warning_already_shown: bool,
}

/// Outcome of comparing usage against the warning settings.
///
/// Every field is computed even when `show` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageWarningDecision {
    pub show: bool,
    pub percentage: f64,
    pub is_over_limit: bool,
    pub current_usage_formatted: String,
    pub limit_formatted: String,
    pub remaining_formatted: String,
}

/// Format a byte count with binary multiples, e.g. "1.5 KB", "1 GB".
///
/// Values of 1024 TB and above stay in TB with a larger numeral.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::as_conversions
)]
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    let index = bytes.ilog(1024).min(4);
    let value = bytes as f64 / 1024_f64.powi(index as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[index as usize])
}

/// Decide whether the data-usage warning should be surfaced.
#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
pub fn evaluate_warning(
    usage: &UsageCounters,
    config: &UsageWarningConfig,
) -> UsageWarningDecision {
    let limit = config.monthly_limit_bytes.get();
    let percentage = usage.total_bytes as f64 / limit as f64 * 100.0;
    let threshold_reached = percentage >= f64::from(config.warning_threshold_percent);

    UsageWarningDecision {
        show: config.enabled && !config.warning_already_shown && threshold_reached,
        percentage,
        is_over_limit: percentage >= 100.0,
        current_usage_formatted: format_bytes(usage.total_bytes),
        limit_formatted: format_bytes(limit),
        remaining_formatted: format_bytes(limit.saturating_sub(usage.total_bytes)),
    }
}
