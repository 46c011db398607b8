//! Signal command handler.

use serde::Serialize;

use quecmanager_core::{SignalMetric, SignalQuality, SignalReading};

use crate::cli::{GlobalOpts, MetricArg, SignalArgs};
use crate::error::CliError;
use crate::output;

impl From<MetricArg> for SignalMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Rsrp => Self::Rsrp,
            MetricArg::Rsrq => Self::Rsrq,
            MetricArg::Sinr => Self::Sinr,
        }
    }
}

#[derive(Serialize)]
struct SignalReport {
    metric: SignalMetric,
    value: i32,
    unit: &'static str,
    percentage: f64,
    quality: SignalQuality,
}

impl From<SignalReading> for SignalReport {
    fn from(reading: SignalReading) -> Self {
        Self {
            metric: reading.metric,
            value: reading.value,
            unit: reading.metric.unit(),
            percentage: reading.percentage(),
            quality: reading.quality(),
        }
    }
}

fn detail(r: &SignalReport) -> String {
    let (min, max) = r.metric.range();
    [
        format!("Metric:     {}", r.metric.to_string().to_uppercase()),
        format!("Reading:    {} {}", r.value, r.unit),
        format!("Range:      {min} .. {max} {}", r.unit),
        format!("Percentage: {:.1}%", r.percentage),
        format!("Quality:    {}", r.quality),
    ]
    .join("\n")
}

#[allow(clippy::unnecessary_wraps)]
pub fn handle(args: &SignalArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let reading = SignalReading::new(args.metric.into(), args.value);
    let report = SignalReport::from(reading);

    let out = output::render_single(&global.output, &report, detail, |r| {
        format!("{:.1}", r.percentage)
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
