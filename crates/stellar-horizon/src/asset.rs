// ============================================================================
// STELLAR-HORIZON - Assets
// ============================================================================

use crate::account::AccountId;
use crate::error::HorizonError;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Stellar asset descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Asset {
    Native,
    CreditAlphanum4 { code: String, issuer: AccountId },
    CreditAlphanum12 { code: String, issuer: AccountId },
}

impl Asset {
    /// Create native lumens asset
    pub fn native() -> Self {
        Asset::Native
    }

    /// Create an issued asset, picking the variant from the code length
    pub fn credit(code: &str, issuer: AccountId) -> Result<Self> {
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(HorizonError::InvalidAsset(format!(
                "Asset code must be 1-12 alphanumeric characters: {:?}",
                code
            )));
        }

        match code.len() {
            1..=4 => Ok(Asset::CreditAlphanum4 {
                code: code.to_string(),
                issuer,
            }),
            5..=12 => Ok(Asset::CreditAlphanum12 {
                code: code.to_string(),
                issuer,
            }),
            len => Err(HorizonError::InvalidAsset(format!(
                "Asset code too long: {} chars",
                len
            ))),
        }
    }

    /// Horizon `asset_type` value
    pub fn asset_type(&self) -> &'static str {
        match self {
            Asset::Native => "native",
            Asset::CreditAlphanum4 { .. } => "credit_alphanum4",
            Asset::CreditAlphanum12 { .. } => "credit_alphanum12",
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Asset::Native => None,
            Asset::CreditAlphanum4 { code, .. } | Asset::CreditAlphanum12 { code, .. } => {
                Some(code)
            }
        }
    }

    pub fn issuer(&self) -> Option<&AccountId> {
        match self {
            Asset::Native => None,
            Asset::CreditAlphanum4 { issuer, .. } | Asset::CreditAlphanum12 { issuer, .. } => {
                Some(issuer)
            }
        }
    }

    /// Check if native
    pub fn is_native(&self) -> bool {
        matches!(self, Asset::Native)
    }

    /// Query parameters describing this asset under `prefix`
    /// (`buying`, `selling`, `destination`).
    ///
    /// Native assets only carry `{prefix}_asset_type`.
    pub fn query_params(&self, prefix: &str) -> Vec<(String, String)> {
        let mut params = vec![(
            format!("{}_asset_type", prefix),
            self.asset_type().to_string(),
        )];
        if let (Some(code), Some(issuer)) = (self.code(), self.issuer()) {
            params.push((format!("{}_asset_code", prefix), code.to_string()));
            params.push((format!("{}_asset_issuer", prefix), issuer.to_string()));
        }
        params
    }
}
