// ============================================================================
// STELLAR-HORIZON - Server
// ============================================================================
// Entry point: one Horizon base URL plus one shared transport. Every
// builder it hands out borrows nothing from it, so builders, pages and
// federation lookups can outlive the `Server` that created them.
// ============================================================================

use crate::config::HorizonConfig;
use crate::error::HorizonError;
use crate::federation::Federation;
use crate::fetcher::Fetcher;
use crate::requests::{
    Accounts, Effects, Ledgers, Offers, Operations, OrderBook, Paths, Payments, RequestBuilder,
    ResourceKind, Trades, Transactions,
};
use crate::responses::SubmitTransactionResponse;
use crate::submit::{self, TransactionEnvelope};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::Result;
use std::sync::Arc;
use tracing::debug;
use url::Url;

#[derive(Clone)]
pub struct Server {
    base: Url,
    fetcher: Fetcher,
}

impl Server {
    /// Create a server talking to `config.horizon_url` over reqwest
    pub fn new(config: HorizonConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(&config.horizon_url, Arc::new(transport))
    }

    /// Create a server over any transport (tests use `MockTransport`)
    pub fn with_transport(horizon_url: &str, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        let base = Url::parse(horizon_url)?;

        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(HorizonError::configuration(format!(
                "Invalid Horizon URL: {}",
                horizon_url
            )));
        }

        debug!("Horizon server at {}", base);
        Ok(Self {
            base,
            fetcher: Fetcher::new(transport),
        })
    }

    /// Create server for mainnet
    pub fn mainnet() -> Result<Self> {
        Self::new(HorizonConfig::mainnet())
    }

    /// Create server for testnet
    pub fn testnet() -> Result<Self> {
        Self::new(HorizonConfig::testnet())
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    fn builder<K: ResourceKind>(&self) -> RequestBuilder<K> {
        RequestBuilder::new(self.fetcher.clone(), self.base.clone())
    }

    // ==================== Resources ====================

    pub fn accounts(&self) -> RequestBuilder<Accounts> {
        self.builder()
    }

    pub fn effects(&self) -> RequestBuilder<Effects> {
        self.builder()
    }

    pub fn ledgers(&self) -> RequestBuilder<Ledgers> {
        self.builder()
    }

    pub fn offers(&self) -> RequestBuilder<Offers> {
        self.builder()
    }

    pub fn operations(&self) -> RequestBuilder<Operations> {
        self.builder()
    }

    pub fn order_book(&self) -> RequestBuilder<OrderBook> {
        self.builder()
    }

    pub fn trades(&self) -> RequestBuilder<Trades> {
        self.builder()
    }

    pub fn paths(&self) -> RequestBuilder<Paths> {
        self.builder()
    }

    pub fn payments(&self) -> RequestBuilder<Payments> {
        self.builder()
    }

    pub fn transactions(&self) -> RequestBuilder<Transactions> {
        self.builder()
    }

    // ==================== Submission ====================

    /// POST a signed envelope to `/transactions`
    pub async fn submit_transaction<T>(&self, transaction: &T) -> Result<SubmitTransactionResponse>
    where
        T: TransactionEnvelope + ?Sized,
    {
        submit::submit_transaction(
            self.fetcher.transport().as_ref(),
            self.fetcher.codec(),
            &self.base,
            transaction,
        )
        .await
    }

    // ==================== Federation ====================

    /// Federation resolver sharing this server's transport
    pub fn federation(&self) -> Federation {
        Federation::new(self.fetcher.transport().clone())
    }
}

impl std::fmt::Debug for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Server")
            .field("base", &self.base.as_str())
            .finish()
    }
}
