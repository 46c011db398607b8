use thiserror::Error;

/// Top-level error type for the `quecmanager-api` crate.
///
/// Covers every failure mode when talking to the device's CGI scripts:
/// transport, HTTP status, the `{status, message, data}` envelope, and
/// body decoding. `quecmanager-core` maps these into domain errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Device responses ────────────────────────────────────────────
    /// Non-success HTTP status from the CGI script.
    #[error("HTTP {status} from device: {body}")]
    Http { status: u16, body: String },

    /// The script answered with `"status": "error"`.
    #[error("Device reported an error: {message}")]
    Cgi { message: String },

    /// The envelope reported success but carried no `data` payload.
    #[error("Device response for {endpoint} carried no data")]
    EmptyPayload { endpoint: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } => true,
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if the script itself was missing on the device.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Http { status: 404, .. } => true,
            _ => false,
        }
    }
}
