//! Federation addresses (`name*domain`)

use crate::error::HorizonError;
use crate::Result;
use std::fmt;
use std::str::FromStr;

pub const SEPARATOR: char = '*';

/// A parsed `name*domain` address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FederationAddress {
    name: String,
    domain: String,
}

impl FederationAddress {
    /// Split on `*`: exactly two parts, neither empty.
    pub fn parse(address: &str) -> Result<Self> {
        let mut parts = address.split(SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(domain), None) if !name.is_empty() && !domain.is_empty() => {
                Ok(Self {
                    name: name.to_string(),
                    domain: domain.to_string(),
                })
            }
            _ => Err(HorizonError::MalformedAddress(address.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl FromStr for FederationAddress {
    type Err = HorizonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FederationAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, SEPARATOR, self.domain)
    }
}
