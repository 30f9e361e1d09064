// ============================================================================
// STELLAR-HORIZON - Federation
// ============================================================================
// Two hops:
//   1. discovery: GET https://<domain>/.well-known/stellar.toml and read
//      FEDERATION_SERVER
//   2. resolution: GET <federation server>?type=name&q=<name*domain>
//
// A `FederationServer` is immutable once built and may resolve any number of
// addresses. Nothing is cached between calls.
// ============================================================================

mod address;
mod stellar_toml;

pub use address::FederationAddress;
pub use stellar_toml::{validate_domain, well_known_url, StellarToml};

use crate::codec::JsonCodec;
use crate::error::HorizonError;
use crate::responses::opt_string_or_number;
use crate::transport::HttpTransport;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Ledger identifiers a federation server returned for an address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederationResponse {
    #[serde(default)]
    pub stellar_address: Option<String>,
    pub account_id: String,
    #[serde(default)]
    pub memo_type: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub memo: Option<String>,
}

/// A federation endpoint bound to the domain it answers for
#[derive(Clone)]
pub struct FederationServer {
    transport: Arc<dyn HttpTransport>,
    codec: JsonCodec,
    server_url: Url,
    domain: String,
}

impl FederationServer {
    /// Bind `server_url` to `domain`.
    ///
    /// The URL must be https; anything else is `FederationServerInvalid`
    /// whatever the domain.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        server_url: &str,
        domain: &str,
    ) -> Result<Self> {
        let parsed = Url::parse(server_url)
            .map_err(|e| HorizonError::FederationServerInvalid(format!("{}: {}", server_url, e)))?;

        if parsed.scheme() != "https" {
            return Err(HorizonError::FederationServerInvalid(format!(
                "Federation server must use https: {}",
                server_url
            )));
        }

        let domain = validate_domain(domain)?;

        Ok(Self {
            transport,
            codec: JsonCodec::new(),
            server_url: parsed,
            domain,
        })
    }

    pub fn with_codec(mut self, codec: JsonCodec) -> Self {
        self.codec = codec;
        self
    }

    /// Discover the federation server `domain` publishes in its stellar.toml.
    pub async fn create_for_domain(
        transport: Arc<dyn HttpTransport>,
        domain: &str,
    ) -> Result<Self> {
        let toml_url = well_known_url(domain)?;
        debug!("Fetching trust document {}", toml_url);

        let response = transport.get(&toml_url).await?;

        if !response.is_success() {
            warn!("stellar.toml for {} returned HTTP {}", domain, response.status);
            return Err(HorizonError::TrustDocumentInvalid(format!(
                "HTTP {} fetching {}",
                response.status, toml_url
            )));
        }

        if response.body.trim().is_empty() {
            return Err(HorizonError::TrustDocumentInvalid(format!(
                "Empty trust document at {}",
                toml_url
            )));
        }

        let document = StellarToml::parse(&response.body)?;
        let server_url = document
            .federation_server
            .ok_or(HorizonError::NoFederationServer)?;

        debug!("Federation server for {}: {}", domain, server_url);
        Self::new(transport, &server_url, domain)
    }

    pub fn server_url(&self) -> &Url {
        &self.server_url
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Resolve a `name*domain` address against this server.
    ///
    /// A malformed address fails before anything is sent.
    pub async fn resolve_address(&self, address: &str) -> Result<FederationResponse> {
        let address = FederationAddress::parse(address)?;

        let mut url = self.server_url.clone();
        url.query_pairs_mut()
            .append_pair("type", "name")
            .append_pair("q", &address.to_string());

        debug!("Resolving {} via {}", address, self.server_url);
        let response = self.transport.get(&url).await?;

        match response.status {
            200..=299 => {}
            404 => {
                debug!("{} not found", address);
                return Err(HorizonError::NotFound);
            }
            status => {
                warn!("Federation server returned HTTP {}", status);
                return Err(HorizonError::ServerError { status });
            }
        }

        if response.body.trim().is_empty() {
            return Err(HorizonError::protocol("Response contains no content"));
        }

        self.codec.decode(&response.body)
    }
}

impl fmt::Debug for FederationServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FederationServer")
            .field("server_url", &self.server_url.as_str())
            .field("domain", &self.domain)
            .finish()
    }
}

/// Discovery plus resolution in one call
#[derive(Clone)]
pub struct Federation {
    transport: Arc<dyn HttpTransport>,
}

impl Federation {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Find the server for the address's domain, then ask it.
    pub async fn resolve(&self, address: &str) -> Result<FederationResponse> {
        let parsed = FederationAddress::parse(address)?;
        let server =
            FederationServer::create_for_domain(self.transport.clone(), parsed.domain()).await?;
        server.resolve_address(address).await
    }
}

impl fmt::Debug for Federation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Federation").finish_non_exhaustive()
    }
}
