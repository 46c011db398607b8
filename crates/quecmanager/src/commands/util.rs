//! Shared helpers for command handlers.

use std::time::Duration;

use quecmanager_config as config;
use quecmanager_core::{DeviceConfig, Monitor, QuecClient, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Resolve the device to talk to, if any.
///
/// Order: `--device` flag (with `--insecure` / `--timeout`), then the
/// requested or default profile. An explicitly requested profile that
/// doesn't exist is an error; a missing default profile is not.
pub fn resolve_device(global: &GlobalOpts) -> Result<Option<DeviceConfig>, CliError> {
    let cfg = config::load_config_or_default();

    if let Some(ref raw) = global.device {
        let url = config::parse_device_url(raw)?;
        let mut device = DeviceConfig::new(url);
        device.tls = if global.insecure || cfg.defaults.insecure {
            TlsVerification::DangerAcceptInvalid
        } else {
            TlsVerification::SystemDefaults
        };
        device.timeout = Duration::from_secs(global.timeout.unwrap_or(cfg.defaults.timeout));
        return Ok(Some(device));
    }

    let name = cfg.active_profile_name(global.profile.as_deref());
    let profile = match cfg.profile(&name) {
        Ok(profile) => profile,
        Err(e) if global.profile.is_some() => return Err(e.into()),
        Err(_) => return Ok(None),
    };

    let mut device = config::profile_to_device_config(profile, &cfg.defaults)?;
    if global.insecure {
        device.tls = TlsVerification::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        device.timeout = Duration::from_secs(secs);
    }
    tracing::debug!(profile = %name, url = %device.url, "resolved device profile");
    Ok(Some(device))
}

/// Build a `Monitor` for commands that cannot run without a device.
pub fn require_monitor(global: &GlobalOpts) -> Result<Monitor<QuecClient>, CliError> {
    let device = resolve_device(global)?.ok_or_else(|| CliError::NoConfig {
        path: config::config_path().display().to_string(),
    })?;
    Ok(Monitor::new(device.connect()?))
}
