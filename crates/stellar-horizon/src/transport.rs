// ============================================================================
// STELLAR-HORIZON - HTTP Transport
// ============================================================================
// The only place that touches the network. Everything above it works with
// `RawResponse` values, so status classification and decoding can be
// exercised against `MockTransport` without sockets.
// ============================================================================

use crate::config::HorizonConfig;
use crate::error::HorizonError;
use crate::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// A fully read HTTP response
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    /// Reason phrase for the status line, e.g. "Not Found"
    pub reason: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            reason: reason_phrase(status),
            headers: HeaderMap::new(),
            body: String::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Add a header; invalid names or values are ignored.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Header value as text, if present and visible ASCII
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Canonical reason phrase, or `HTTP <code>` for codes without one
fn reason_phrase(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status))
}

/// Issues HTTP calls on behalf of the client.
///
/// Implementations report a failure to reach the server as
/// `HorizonError::Connection`; any response that arrives, whatever its
/// status, is returned as `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<RawResponse>;

    async fn post_form(&self, url: &Url, fields: &[(&str, &str)]) -> Result<RawResponse>;
}

/// Production transport backed by a pooled `reqwest::Client`
#[derive(Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(config: &HorizonConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| HorizonError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http })
    }

    /// Reuse an existing client (shared pool, custom TLS, proxies)
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }

    async fn read(response: reqwest::Response) -> Result<RawResponse> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(RawResponse {
            status: status.as_u16(),
            reason: reason_phrase(status.as_u16()),
            headers,
            body,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse> {
        debug!("GET {}", url);
        let response = self.http.get(url.clone()).send().await?;
        Self::read(response).await
    }

    async fn post_form(&self, url: &Url, fields: &[(&str, &str)]) -> Result<RawResponse> {
        debug!("POST {}", url);
        let response = self.http.post(url.clone()).form(fields).send().await?;
        Self::read(response).await
    }
}
