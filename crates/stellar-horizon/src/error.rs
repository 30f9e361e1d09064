// ============================================================================
// STELLAR-HORIZON - Error Types
// ============================================================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HorizonError {
    // ==================== Local Misuse ====================
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid account id: {0}")]
    InvalidAccountId(String),

    #[error("Invalid asset: {0}")]
    InvalidAsset(String),

    // ==================== Transport ====================
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Rate limited - retry after {retry_after}s")]
    RateLimited { retry_after: u64 },

    // ==================== Federation ====================
    #[error("Malformed federation address: {0}")]
    MalformedAddress(String),

    #[error("Federation address not found")]
    NotFound,

    #[error("Federation server responded with HTTP {status}")]
    ServerError { status: u16 },

    #[error("stellar.toml not found or invalid: {0}")]
    TrustDocumentInvalid(String),

    #[error("stellar.toml does not declare FEDERATION_SERVER")]
    NoFederationServer,

    #[error("Invalid federation server: {0}")]
    FederationServerInvalid(String),
}

impl HorizonError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        HorizonError::Configuration(msg.into())
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        HorizonError::Connection(msg.into())
    }

    pub fn protocol(msg: impl Into<String>) -> Self {
        HorizonError::Protocol(msg.into())
    }

    /// Whether retrying the same call later could succeed.
    ///
    /// The library never retries on its own; this only informs callers.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HorizonError::Connection(_)
                | HorizonError::RateLimited { .. }
                | HorizonError::ServerError { .. }
        )
    }

    /// Seconds to wait before retrying, when the server said so.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            HorizonError::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }

    /// Stable identifier for this error category.
    pub fn code(&self) -> &'static str {
        match self {
            HorizonError::Configuration(_) => "configuration",
            HorizonError::InvalidAccountId(_) => "invalid_account_id",
            HorizonError::InvalidAsset(_) => "invalid_asset",
            HorizonError::Connection(_) => "connection",
            HorizonError::Protocol(_) => "protocol",
            HorizonError::HttpStatus { .. } => "http_status",
            HorizonError::RateLimited { .. } => "rate_limited",
            HorizonError::MalformedAddress(_) => "malformed_address",
            HorizonError::NotFound => "not_found",
            HorizonError::ServerError { .. } => "server_error",
            HorizonError::TrustDocumentInvalid(_) => "trust_document_invalid",
            HorizonError::NoFederationServer => "no_federation_server",
            HorizonError::FederationServerInvalid(_) => "federation_server_invalid",
        }
    }
}

impl From<reqwest::Error> for HorizonError {
    fn from(err: reqwest::Error) -> Self {
        HorizonError::Connection(err.to_string())
    }
}

impl From<serde_json::Error> for HorizonError {
    fn from(err: serde_json::Error) -> Self {
        HorizonError::Protocol(err.to_string())
    }
}

impl From<url::ParseError> for HorizonError {
    fn from(err: url::ParseError) -> Self {
        HorizonError::Configuration(err.to_string())
    }
}

impl From<hex::FromHexError> for HorizonError {
    fn from(err: hex::FromHexError) -> Self {
        HorizonError::InvalidAccountId(err.to_string())
    }
}
