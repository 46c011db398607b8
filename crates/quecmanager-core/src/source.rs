// ── External collaborator seams ──
//
// The core never fetches anything itself. Each trait below is one thing
// the device (or a test double) provides; `Monitor` combines them and
// applies the fallback rules. `QuecClient` implements all of them
// against the CGI scripts.

use std::future::Future;
use std::num::NonZeroU64;

use quecmanager_api::QuecClient;
use tracing::warn;

use crate::distance::MeasurementUnit;
use crate::error::CoreError;
use crate::usage::{UsageCounters, UsageWarningConfig};

/// Where the distance unit preference comes from.
pub trait MeasurementUnitSource {
    fn measurement_unit(&self) -> impl Future<Output = Result<MeasurementUnit, CoreError>> + Send;
}

/// Where the data-usage warning settings come from.
pub trait UsageWarningSource {
    fn usage_warning_config(
        &self,
    ) -> impl Future<Output = Result<UsageWarningConfig, CoreError>> + Send;
}

/// Where the aggregated byte counters come from.
pub trait UsageCounterSource {
    fn usage_counters(&self) -> impl Future<Output = Result<UsageCounters, CoreError>> + Send;
}

/// Persists "warning already shown" on behalf of the evaluator.
pub trait DismissalSink {
    fn dismiss_usage_warning(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

// ── Device implementation ────────────────────────────────────────────

impl MeasurementUnitSource for QuecClient {
    async fn measurement_unit(&self) -> Result<MeasurementUnit, CoreError> {
        let units = self.get_measurement_units().await?;
        units
            .unit
            .parse()
            .map_err(|_| CoreError::InvalidResponse {
                message: format!("unknown measurement unit '{}'", units.unit),
            })
    }
}

impl UsageWarningSource for QuecClient {
    async fn usage_warning_config(&self) -> Result<UsageWarningConfig, CoreError> {
        let raw = self.get_data_usage_warning().await?;

        let monthly_limit_bytes =
            NonZeroU64::new(raw.monthly_limit_bytes).ok_or_else(|| CoreError::InvalidResponse {
                message: "monthly limit must be greater than zero".into(),
            })?;

        let warning_threshold_percent = threshold_percent(raw.warning_threshold_percent);

        Ok(UsageWarningConfig {
            enabled: raw.enabled,
            monthly_limit_bytes,
            warning_threshold_percent,
            warning_already_shown: raw.warning_already_shown,
        })
    }
}

/// Clamp a device-reported threshold into `0..=100` whole percent.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
fn threshold_percent(raw: f64) -> u8 {
    let clamped = raw.clamp(0.0, 100.0);
    if (clamped - raw).abs() > f64::EPSILON {
        warn!(threshold = raw, capped = clamped, "warning threshold out of range, capping");
    }
    clamped.round() as u8
}

impl UsageCounterSource for QuecClient {
    async fn usage_counters(&self) -> Result<UsageCounters, CoreError> {
        let usage = self.get_data_usage().await?;
        Ok(UsageCounters {
            total_bytes: usage.total_bytes,
        })
    }
}

impl DismissalSink for QuecClient {
    async fn dismiss_usage_warning(&self) -> Result<(), CoreError> {
        Ok(self.dismiss_data_usage_warning().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::threshold_percent;

    #[test]
    fn threshold_in_range_is_kept() {
        assert_eq!(threshold_percent(0.0), 0);
        assert_eq!(threshold_percent(90.0), 90);
        assert_eq!(threshold_percent(100.0), 100);
    }

    #[test]
    fn threshold_out_of_range_is_capped() {
        assert_eq!(threshold_percent(300.0), 100);
        assert_eq!(threshold_percent(100_000.0), 100);
        assert_eq!(threshold_percent(-5.0), 0);
    }

    #[test]
    fn fractional_threshold_rounds_to_whole_percent() {
        assert_eq!(threshold_percent(87.4), 87);
        assert_eq!(threshold_percent(87.5), 88);
    }
}
