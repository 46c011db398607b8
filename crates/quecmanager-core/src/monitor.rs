// ── Monitor ──
//
// Glue between the pure core and its collaborators. Holds no state of its
// own beyond the source, so it can be driven by a polling timer, an event
// loop, or a one-shot CLI call alike. Advisory lookups fail silent: the
// unit falls back to km and a failed usage fetch means "no warning".

use tracing::{debug, warn};

use crate::distance::{self, DistanceEstimate, MeasurementUnit, Radio};
use crate::error::CoreError;
use crate::source::{DismissalSink, MeasurementUnitSource, UsageCounterSource, UsageWarningSource};
use crate::usage::{self, UsageWarningDecision};

/// Runs core computations against live inputs from `S`.
pub struct Monitor<S> {
    source: S,
}

impl<S> Monitor<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: MeasurementUnitSource> Monitor<S> {
    /// The preferred distance unit, or `Km` if the lookup fails.
    pub async fn measurement_unit(&self) -> MeasurementUnit {
        match self.source.measurement_unit().await {
            Ok(unit) => unit,
            Err(e) => {
                warn!(
                    error = %e,
                    transient = e.is_transient(),
                    "measurement unit lookup failed, defaulting to km"
                );
                MeasurementUnit::default()
            }
        }
    }

    /// Distance to the serving cell in the preferred unit.
    pub async fn distance(&self, radio: Radio, raw: i64) -> DistanceEstimate {
        let unit = self.measurement_unit().await;
        distance::distance(radio, raw, unit)
    }
}

impl<S: UsageWarningSource + UsageCounterSource> Monitor<S> {
    /// Fetch config and counters, then evaluate. Errors are returned as-is.
    pub async fn usage_report(&self) -> Result<UsageWarningDecision, CoreError> {
        let config = self.source.usage_warning_config().await?;
        let counters = self.source.usage_counters().await?;
        let decision = usage::evaluate_warning(&counters, &config);
        debug!(
            percentage = decision.percentage,
            show = decision.show,
            "evaluated data usage warning"
        );
        Ok(decision)
    }

    /// The warning to display right now, if any.
    pub async fn pending_usage_warning(&self) -> Option<UsageWarningDecision> {
        match self.usage_report().await {
            Ok(decision) if decision.show => Some(decision),
            Ok(_) => None,
            Err(e) => {
                warn!(
                    error = %e,
                    transient = e.is_transient(),
                    "data usage warning unavailable"
                );
                None
            }
        }
    }
}

impl<S: DismissalSink> Monitor<S> {
    /// Ask the config store to mark the warning as shown.
    pub async fn dismiss_usage_warning(&self) -> Result<(), CoreError> {
        self.source.dismiss_usage_warning().await
    }
}
