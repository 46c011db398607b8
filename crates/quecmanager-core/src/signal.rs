// ── Signal percentage normalization ──
//
// Maps raw RSRP / RSRQ / SINR readings onto a 0-100% scale using fixed
// per-metric ranges. Out-of-range readings are clamped, never rejected.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which signal metric a reading belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SignalMetric {
    /// Reference signal received power, dBm.
    Rsrp,
    /// Reference signal received quality, dB.
    Rsrq,
    /// Signal to interference plus noise ratio, dB.
    Sinr,
}

impl SignalMetric {
    /// `(poorest, ideal)` bounds used for scaling.
    pub const fn range(self) -> (i32, i32) {
        match self {
            Self::Rsrp => (-140, -70),
            Self::Rsrq => (-20, -10),
            Self::Sinr => (0, 20),
        }
    }

    /// Unit suffix for display.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Rsrp => "dBm",
            Self::Rsrq | Self::Sinr => "dB",
        }
    }
}

/// Coarse quality bucket for a normalized percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum SignalQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SignalQuality {
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 80.0 {
            Self::Excellent
        } else if pct >= 60.0 {
            Self::Good
        } else if pct >= 40.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// A single raw signal reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalReading {
    pub metric: SignalMetric,
    pub value: i32,
}

impl SignalReading {
    pub fn new(metric: SignalMetric, value: i32) -> Self {
        Self { metric, value }
    }

    pub fn percentage(&self) -> f64 {
        normalize(self.metric, self.value)
    }

    pub fn quality(&self) -> SignalQuality {
        SignalQuality::from_percentage(self.percentage())
    }
}

/// Normalize a raw reading to a percentage in `[0.0, 100.0]`, one decimal.
pub fn normalize(metric: SignalMetric, value: i32) -> f64 {
    let (min, max) = metric.range();
    let clamped = value.clamp(min, max);
    let pct = f64::from(clamped - min) / f64::from(max - min) * 100.0;
    // Rounding can overshoot by an ulp; clamp again afterwards.
    ((pct * 10.0).round() / 10.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsrp_bounds_and_clamping() {
        assert_eq!(normalize(SignalMetric::Rsrp, -70), 100.0);
        assert_eq!(normalize(SignalMetric::Rsrp, -140), 0.0);
        assert_eq!(normalize(SignalMetric::Rsrp, -200), 0.0);
        assert_eq!(normalize(SignalMetric::Rsrp, 0), 100.0);
    }

    #[test]
    fn sinr_midpoint() {
        assert_eq!(normalize(SignalMetric::Sinr, 10), 50.0);
    }

    #[test]
    fn rsrq_rounds_to_one_decimal() {
        // (-13 - -20) / 10 * 100 = 70
        assert_eq!(normalize(SignalMetric::Rsrq, -13), 70.0);
        // (-100 - -140) / 70 * 100 = 57.142.. -> 57.1
        assert_eq!(normalize(SignalMetric::Rsrp, -100), 57.1);
    }

    #[test]
    fn always_within_percentage_range() {
        for metric in [SignalMetric::Rsrp, SignalMetric::Rsrq, SignalMetric::Sinr] {
            for value in -250..=250 {
                let pct = normalize(metric, value);
                assert!(
                    (0.0..=100.0).contains(&pct),
                    "{metric} {value} gave {pct}"
                );
            }
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let a = normalize(SignalMetric::Rsrp, -97);
        let b = normalize(SignalMetric::Rsrp, -97);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn metric_parses_case_insensitively() {
        assert_eq!("RSRP".parse::<SignalMetric>().ok(), Some(SignalMetric::Rsrp));
        assert_eq!("sinr".parse::<SignalMetric>().ok(), Some(SignalMetric::Sinr));
        assert!("rssi".parse::<SignalMetric>().is_err());
        assert_eq!(SignalMetric::Rsrq.to_string(), "rsrq");
    }

    #[test]
    fn quality_buckets() {
        assert_eq!(
            SignalReading::new(SignalMetric::Sinr, 20).quality(),
            SignalQuality::Excellent
        );
        assert_eq!(
            SignalReading::new(SignalMetric::Sinr, 12).quality(),
            SignalQuality::Good
        );
        assert_eq!(
            SignalReading::new(SignalMetric::Sinr, 8).quality(),
            SignalQuality::Fair
        );
        assert_eq!(
            SignalReading::new(SignalMetric::Sinr, 2).quality(),
            SignalQuality::Poor
        );
    }
}
