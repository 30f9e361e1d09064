//! stellar.toml
//!
//! The trust document a domain publishes at
//! `https://<domain>/.well-known/stellar.toml`. Only the keys this crate
//! reads are modelled; everything else in the file is ignored.

use crate::error::HorizonError;
use crate::Result;
use serde::Deserialize;
use url::{Host, Url};

pub const WELL_KNOWN_PATH: &str = ".well-known/stellar.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StellarToml {
    #[serde(rename = "FEDERATION_SERVER", default)]
    pub federation_server: Option<String>,

    #[serde(rename = "HORIZON_URL", default)]
    pub horizon_url: Option<String>,

    #[serde(rename = "NETWORK_PASSPHRASE", default)]
    pub network_passphrase: Option<String>,

    #[serde(rename = "SIGNING_KEY", default)]
    pub signing_key: Option<String>,
}

impl StellarToml {
    /// Parse a trust document; syntax errors are `TrustDocumentInvalid`.
    pub fn parse(body: &str) -> Result<Self> {
        toml::from_str(body).map_err(|e| HorizonError::TrustDocumentInvalid(e.to_string()))
    }
}

/// Lower-cased ASCII form of `domain`, or `Configuration` if it is not a
/// DNS name (IP literals included). One trailing dot is dropped.
pub fn validate_domain(domain: &str) -> Result<String> {
    let invalid = || HorizonError::configuration(format!("Invalid domain: {:?}", domain));

    let trimmed = domain.strip_suffix('.').unwrap_or(domain);
    let ascii = match Host::parse(trimmed) {
        Ok(Host::Domain(ascii)) => ascii,
        _ => return Err(invalid()),
    };

    let labels_ok = ascii.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    });

    if labels_ok {
        Ok(ascii)
    } else {
        Err(invalid())
    }
}

/// `https://<domain>/.well-known/stellar.toml`
pub fn well_known_url(domain: &str) -> Result<Url> {
    let domain = validate_domain(domain)?;
    Ok(Url::parse(&format!("https://{}/{}", domain, WELL_KNOWN_PATH))?)
}
