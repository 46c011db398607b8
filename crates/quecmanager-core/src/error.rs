// ── Core error types ──
//
// User-facing errors from quecmanager-core. Consumers never see reqwest
// errors or raw response bodies; the `From<quecmanager_api::Error>` impl
// translates transport-layer failures into these variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to device at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Device request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Device errors ────────────────────────────────────────────────
    #[error("Device error: {message}")]
    Device {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    #[error("Unexpected response from device: {message}")]
    InvalidResponse { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` when retrying later might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::ConnectionFailed { .. } | Self::Timeout { .. } => true,
            Self::Device { status, .. } => status.is_some_and(|s| s >= 500),
            _ => false,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<quecmanager_api::Error> for CoreError {
    fn from(err: quecmanager_api::Error) -> Self {
        match err {
            quecmanager_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Device {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            quecmanager_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            quecmanager_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            quecmanager_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS setup failed: {msg}"),
            },
            quecmanager_api::Error::Http { status, body } => CoreError::Device {
                message: if body.is_empty() {
                    format!("HTTP {status}")
                } else {
                    body
                },
                status: Some(status),
            },
            quecmanager_api::Error::Cgi { message } => CoreError::Device {
                message,
                status: None,
            },
            quecmanager_api::Error::EmptyPayload { endpoint } => CoreError::InvalidResponse {
                message: format!("{endpoint} returned no data"),
            },
            quecmanager_api::Error::Deserialization { message, body: _ } => {
                CoreError::InvalidResponse { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tls_setup_failure_is_config_error() {
        let err = CoreError::from(quecmanager_api::Error::Tls(
            "failed to read CA cert /nonexistent/ca.pem".into(),
        ));
        match &err {
            CoreError::Config { message } => {
                assert!(message.contains("/nonexistent/ca.pem"), "{message}");
            }
            other => panic!("expected Config, got {other:?}"),
        }
        assert!(!err.is_transient());
    }

    #[test]
    fn server_errors_are_transient() {
        let bad_gateway = CoreError::from(quecmanager_api::Error::Http {
            status: 502,
            body: String::new(),
        });
        assert!(bad_gateway.is_transient());
        assert_eq!(bad_gateway.to_string(), "Device error: HTTP 502");

        let not_found = CoreError::from(quecmanager_api::Error::Http {
            status: 404,
            body: "no such script".into(),
        });
        assert!(!not_found.is_transient());
    }

    #[test]
    fn cgi_error_is_not_transient() {
        let err = CoreError::from(quecmanager_api::Error::Cgi {
            message: "config file missing".into(),
        });
        assert!(!err.is_transient());
        assert!(CoreError::Timeout { timeout_secs: 5 }.is_transient());
    }
}
