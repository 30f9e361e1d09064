// ============================================================================
// STELLAR-HORIZON - Horizon & Federation Client
// ============================================================================
// Typed async client for Stellar's Horizon REST API and the Federation
// protocol.
//
// Features:
// - Fluent, per-resource request builders with compile-time filter checks
// - Typed decoding of single records and HAL pages, with next/prev paging
// - Rate-limit metadata and 429 Retry-After reporting
// - Transaction envelope submission
// - stellar.toml discovery and `name*domain` address resolution
//
// Nothing in this crate retries or sleeps; callers own retry policy.
// ============================================================================

pub mod account;
pub mod asset;
pub mod codec;
pub mod config;
pub mod error;
pub mod federation;
pub mod fetcher;
pub mod metadata;
pub mod mock;
pub mod page;
pub mod requests;
pub mod responses;
pub mod server;
pub mod submit;
pub mod transport;

pub use account::AccountId;
pub use asset::Asset;
pub use codec::JsonCodec;
pub use config::{HorizonConfig, Network};
pub use error::HorizonError;
pub use federation::{
    Federation, FederationAddress, FederationResponse, FederationServer, StellarToml,
};
pub use fetcher::Fetcher;
pub use metadata::{HorizonResponse, RateLimit};
pub use mock::MockTransport;
pub use page::{Link, Page};
pub use requests::{Order, Paginated, RequestBuilder, ResourceKind, ResourceRequest};
pub use server::Server;
pub use submit::{SignedEnvelope, TransactionEnvelope};
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};

/// Re-export for convenience
pub type Result<T> = std::result::Result<T, HorizonError>;
