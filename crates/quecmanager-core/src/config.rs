// ── Runtime connection configuration ──
//
// These types describe *how* to reach a device. They never touch disk:
// the CLI (via quecmanager-config) builds a `DeviceConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use quecmanager_api::{QuecClient, TlsMode, TransportConfig};
use url::Url;

use crate::error::CoreError;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed certs). Opt-in via `insecure`.
    DangerAcceptInvalid,
}

impl From<&TlsVerification> for TlsMode {
    fn from(tls: &TlsVerification) -> Self {
        match tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        }
    }
}

/// Configuration for talking to a single device.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Device URL (e.g., `https://192.168.224.1`).
    pub url: Url,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
}

impl DeviceConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Build the HTTP client for this device.
    pub fn connect(&self) -> Result<QuecClient, CoreError> {
        let transport = TransportConfig {
            tls: TlsMode::from(&self.tls),
            timeout: self.timeout,
        };
        Ok(QuecClient::new(self.url.clone(), &transport)?)
    }
}
