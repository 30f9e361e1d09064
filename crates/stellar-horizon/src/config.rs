// ============================================================================
// STELLAR-HORIZON - Configuration
// ============================================================================
// Network selection and transport settings for a Horizon server.

use serde::{Deserialize, Serialize};

/// Network selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Default for Network {
    fn default() -> Self {
        #[cfg(feature = "mainnet")]
        return Network::Mainnet;

        #[cfg(all(feature = "testnet", not(feature = "mainnet")))]
        return Network::Testnet;

        #[cfg(not(any(feature = "mainnet", feature = "testnet")))]
        return Network::Mainnet;
    }
}

/// Horizon client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HorizonConfig {
    /// Network (mainnet or testnet)
    pub network: Network,

    /// Horizon API base URL
    pub horizon_url: String,

    /// Network passphrase, informational for callers building transactions
    pub network_passphrase: String,

    /// Per-request timeout enforced by the transport
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl HorizonConfig {
    /// Create mainnet configuration
    pub fn mainnet() -> Self {
        Self {
            network: Network::Mainnet,
            horizon_url: "https://horizon.stellar.org".to_string(),
            network_passphrase: "Public Global Stellar Network ; September 2015".to_string(),
            timeout_secs: 30,
            user_agent: default_user_agent(),
        }
    }

    /// Create testnet configuration
    pub fn testnet() -> Self {
        Self {
            network: Network::Testnet,
            horizon_url: "https://horizon-testnet.stellar.org".to_string(),
            network_passphrase: "Test SDF Network ; September 2015".to_string(),
            timeout_secs: 30,
            user_agent: default_user_agent(),
        }
    }

    /// Point the configuration at another Horizon instance
    pub fn with_horizon_url(mut self, url: impl Into<String>) -> Self {
        self.horizon_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Check if this is mainnet
    pub fn is_mainnet(&self) -> bool {
        self.network == Network::Mainnet
    }
}

impl Default for HorizonConfig {
    fn default() -> Self {
        match Network::default() {
            Network::Mainnet => Self::mainnet(),
            Network::Testnet => Self::testnet(),
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
