// quecmanager-core: Signal, distance and data-usage logic between
// quecmanager-api and its consumers.

pub mod config;
pub mod distance;
pub mod error;
pub mod monitor;
pub mod signal;
pub mod source;
pub mod usage;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DeviceConfig, TlsVerification};
pub use distance::{DistanceEstimate, MeasurementUnit, Radio, TimingAdvance, distance};
pub use error::CoreError;
pub use monitor::Monitor;
pub use signal::{SignalMetric, SignalQuality, SignalReading, normalize};
pub use source::{DismissalSink, MeasurementUnitSource, UsageCounterSource, UsageWarningSource};
pub use usage::{
    UsageCounters, UsageWarningConfig, UsageWarningDecision, evaluate_warning, format_bytes,
};

pub use quecmanager_api::QuecClient;
