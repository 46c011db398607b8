// ── Timing-advance distance estimation ──
//
// Converts LTE timing-advance indices and NR NTA values into a one-way
// distance to the serving cell. Timing advance measures round-trip delay,
// hence the division by two. Invalid inputs are coerced to 0 with a
// warning; nothing here returns an error.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::warn;

/// Speed of light, m/s.
const SPEED_OF_LIGHT: f64 = 3.0e8;

/// LTE basic time unit `Ts = 1 / (15000 * 2048)` seconds.
const LTE_TS: f64 = 1.0 / (2048.0 * 15_000.0);

/// NR basic time unit `Tc = 1 / (480000 * 4096)` seconds.
const NR_TC: f64 = 1.0 / (480_000.0 * 4096.0);

/// Largest valid LTE timing-advance index.
pub const LTE_TA_MAX: i64 = 1282;

/// Rendered in place of a distance when the timing advance is zero.
pub const UNKNOWN_DISTANCE: &str = "-";

const KM_TO_MILES: f64 = 0.621_371;
const FEET_PER_MILE: f64 = 5280.0;

/// Radio access technology the timing advance was reported for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Radio {
    #[serde(rename = "LTE")]
    #[strum(serialize = "LTE")]
    Lte,
    #[serde(rename = "NR")]
    #[strum(serialize = "NR")]
    Nr,
}

/// Display unit preference for distances.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MeasurementUnit {
    #[default]
    Km,
    Mi,
}

/// A raw timing-advance report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingAdvance {
    pub radio: Radio,
    pub raw: i64,
}

impl TimingAdvance {
    pub fn new(radio: Radio, raw: i64) -> Self {
        Self { radio, raw }
    }

    pub fn distance(&self, unit: MeasurementUnit) -> DistanceEstimate {
        distance(self.radio, self.raw, unit)
    }
}

/// Distance to the serving cell, with a display string in `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceEstimate {
    pub kilometers: f64,
    pub formatted: String,
    pub unit: MeasurementUnit,
}

/// Estimate the distance to the serving cell from a timing advance.
pub fn distance(radio: Radio, raw: i64, unit: MeasurementUnit) -> DistanceEstimate {
    let kilometers = match radio {
        Radio::Lte => lte_kilometers(raw),
        Radio::Nr => nr_kilometers(raw),
    };

    DistanceEstimate {
        kilometers,
        formatted: format_distance(kilometers, unit),
        unit,
    }
}

#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
fn lte_kilometers(raw: i64) -> f64 {
    let ta = if (0..=LTE_TA_MAX).contains(&raw) {
        raw
    } else {
        warn!(raw, max = LTE_TA_MAX, "LTE timing advance out of range, using 0");
        0
    };
    let nta = 16 * ta;
    let time_offset = nta as f64 * LTE_TS;
    SPEED_OF_LIGHT * time_offset / 2.0 / 1000.0
}

#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
fn nr_kilometers(raw: i64) -> f64 {
    let nta = if raw < 0 {
        warn!(raw, "negative NR timing advance, using 0");
        0
    } else {
        raw
    };
    SPEED_OF_LIGHT * nta as f64 * NR_TC / 2.0 / 1000.0
}

/// Render kilometers in the preferred unit, dropping to m/ft below one unit.
pub fn format_distance(kilometers: f64, unit: MeasurementUnit) -> String {
    if kilometers <= 0.0 {
        return UNKNOWN_DISTANCE.to_owned();
    }

    match unit {
        MeasurementUnit::Mi => {
            let miles = kilometers * KM_TO_MILES;
            if miles < 1.0 {
                format!("{:.0} ft", miles * FEET_PER_MILE)
            } else {
                format!("{miles:.2} mi")
            }
        }
        MeasurementUnit::Km => {
            if kilometers < 1.0 {
                format!("{:.0} m", kilometers * 1000.0)
            } else {
                format!("{kilometers:.2} km")
            }
        }
    }
}
