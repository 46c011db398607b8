//! Data usage command handlers.

use std::num::NonZeroU64;

use quecmanager_core::{
    UsageCounters, UsageWarningConfig, UsageWarningDecision, evaluate_warning,
};

use crate::cli::{GlobalOpts, UsageArgs, UsageCommand};
use crate::error::CliError;
use crate::output;

use super::util;

fn detail(d: &UsageWarningDecision, color: bool) -> String {
    let mut lines = vec![
        format!("Used:      {}", d.current_usage_formatted),
        format!("Limit:     {}", d.limit_formatted),
        format!("Remaining: {}", d.remaining_formatted),
        format!("Usage:     {:.1}%", d.percentage),
    ];
    if d.is_over_limit {
        lines.push(output::alert_text("Monthly data limit reached", color));
    } else if d.show {
        lines.push(output::warn_text(
            &format!("Approaching monthly data limit ({:.1}% used)", d.percentage),
            color,
        ));
    }
    lines.join("\n")
}

fn render(d: &UsageWarningDecision, global: &GlobalOpts) -> String {
    let color = output::should_color(&global.color);
    output::render_single(&global.output, d, |d| detail(d, color), |d| {
        format!("{:.1}", d.percentage)
    })
}

pub async fn handle(args: UsageArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        UsageCommand::Evaluate {
            total,
            limit,
            threshold,
            disabled,
            already_shown,
        } => {
            let monthly_limit_bytes =
                NonZeroU64::new(limit).ok_or_else(|| CliError::Validation {
                    field: "limit".into(),
                    reason: "must be greater than zero".into(),
                })?;
            let config = UsageWarningConfig {
                enabled: !disabled,
                monthly_limit_bytes,
                warning_threshold_percent: threshold,
                warning_already_shown: already_shown,
            };
            let decision = evaluate_warning(&UsageCounters { total_bytes: total }, &config);
            output::print_output(&render(&decision, global), global.quiet);
            Ok(())
        }

        UsageCommand::Status => {
            let monitor = util::require_monitor(global)?;
            let decision = monitor.usage_report().await?;
            output::print_output(&render(&decision, global), global.quiet);
            Ok(())
        }

        UsageCommand::Dismiss => {
            let monitor = util::require_monitor(global)?;
            monitor.dismiss_usage_warning().await?;
            if !global.quiet {
                eprintln!("Data usage warning dismissed");
            }
            Ok(())
        }
    }
}
