//! Distance command handler.

use serde::Serialize;
use tracing::warn;

use quecmanager_core::{DistanceEstimate, MeasurementUnit, Monitor, Radio, TimingAdvance};

use crate::cli::{DistanceArgs, GlobalOpts, RadioArg, UnitArg};
use crate::error::CliError;
use crate::output;

use super::util;

impl From<RadioArg> for Radio {
    fn from(arg: RadioArg) -> Self {
        match arg {
            RadioArg::Lte => Self::Lte,
            RadioArg::Nr => Self::Nr,
        }
    }
}

impl From<UnitArg> for MeasurementUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Km => Self::Km,
            UnitArg::Mi => Self::Mi,
        }
    }
}

#[derive(Serialize)]
struct DistanceReport {
    radio: Radio,
    raw: i64,
    #[serde(flatten)]
    estimate: DistanceEstimate,
}

fn detail(r: &DistanceReport) -> String {
    [
        format!("Radio:     {}", r.radio),
        format!("TA:        {}", r.raw),
        format!("Distance:  {}", r.estimate.formatted),
        format!("Km:        {:.3}", r.estimate.kilometers),
    ]
    .join("\n")
}

/// Explicit `--unit`, else the device preference, else km.
///
/// Only a missing, explicitly requested profile is an error. Any failure to
/// reach the device falls back to km.
async fn resolve_unit(
    args: &DistanceArgs,
    global: &GlobalOpts,
) -> Result<MeasurementUnit, CliError> {
    if let Some(unit) = args.unit {
        return Ok(unit.into());
    }

    let device = match util::resolve_device(global) {
        Ok(Some(device)) => device,
        Ok(None) => return Ok(MeasurementUnit::default()),
        Err(e @ CliError::ProfileNotFound { .. }) => return Err(e),
        Err(e) => {
            warn!(error = %e, "device unavailable, defaulting to km");
            return Ok(MeasurementUnit::default());
        }
    };

    match device.connect() {
        Ok(client) => Ok(Monitor::new(client).measurement_unit().await),
        Err(e) => {
            warn!(error = %e, url = %device.url, "device unavailable, defaulting to km");
            Ok(MeasurementUnit::default())
        }
    }
}

pub async fn handle(args: &DistanceArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let unit = resolve_unit(args, global).await?;
    let ta = TimingAdvance::new(args.radio.into(), args.raw);

    let report = DistanceReport {
        radio: ta.radio,
        raw: ta.raw,
        estimate: ta.distance(unit),
    };

    let out = output::render_single(&global.output, &report, detail, |r| {
        r.estimate.formatted.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
