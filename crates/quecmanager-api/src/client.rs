// CGI HTTP client
//
// Wraps `reqwest::Client` with script URL construction and envelope
// unwrapping. Endpoint methods live in separate files (settings, usage)
// as inherent impls to keep this module focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::{CgiResponse, CgiStatus};
use crate::transport::TransportConfig;

/// Path prefix under which the device serves the QuecManager scripts.
pub const CGI_PREFIX: &str = "cgi-bin/quecmanager";

/// Raw HTTP client for the device's CGI scripts.
///
/// All methods return the unwrapped `data` payload -- the envelope is
/// stripped before the caller sees it.
pub struct QuecClient {
    http: reqwest::Client,
    base_url: Url,
    timeout_secs: u64,
}

impl QuecClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the device root, e.g. `https://192.168.224.1`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            timeout_secs: transport.timeout_secs(),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            timeout_secs: 0,
        }
    }

    /// The device base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for a script: `{base}/cgi-bin/quecmanager/{script}`.
    pub(crate) fn script_url(&self, script: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/{CGI_PREFIX}/{script}");
        Ok(Url::parse(&full)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and unwrap the envelope.
    pub(crate) async fn get<T: DeserializeOwned>(&self, script: &str) -> Result<T, Error> {
        let url = self.script_url(script)?;
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let envelope: CgiResponse<T> = self.parse_envelope(resp).await?;
        envelope.data.ok_or_else(|| Error::EmptyPayload {
            endpoint: script.to_owned(),
        })
    }

    /// Send a POST request with a JSON body; the `data` payload is ignored.
    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        script: &str,
        body: &B,
    ) -> Result<(), Error> {
        let url = self.script_url(script)?;
        debug!("POST {}", url);

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let _: CgiResponse<serde_json::Value> = self.parse_envelope(resp).await?;
        Ok(())
    }

    fn map_send_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            Error::Transport(err)
        }
    }

    /// Check the HTTP status, decode the envelope, and reject `"error"`.
    async fn parse_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<CgiResponse<T>, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;
        trace!(status = status.as_u16(), body_len = body.len(), "CGI response");

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: CgiResponse<T> =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            })?;

        match envelope.status {
            CgiStatus::Success => Ok(envelope),
            CgiStatus::Error => Err(Error::Cgi {
                message: envelope
                    .message
                    .unwrap_or_else(|| "unknown error".to_owned()),
            }),
        }
    }
}
