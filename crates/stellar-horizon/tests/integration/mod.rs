//! Integration Tests Module
//!
//! End-to-end flows through `Server` and `FederationServer`, driven by
//! `MockTransport` so nothing touches the network.
//!
//! Test categories:
//! - `request_building`: URLs produced by the resource builders
//! - `fetch_and_paging`: typed decoding, error classification, link following
//! - `submission`: POST /transactions
//! - `federation_flow`: stellar.toml discovery and address resolution

mod fetch_and_paging;
mod request_building;
mod submission;

use std::sync::Arc;
use stellar_horizon::{MockTransport, Server};

pub const TESTNET: &str = "https://horizon-testnet.stellar.org";

/// Route test logs through the test writer; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A testnet `Server` plus the mock behind it
pub fn mock_server() -> (Server, Arc<MockTransport>) {
    init_tracing();
    let mock = Arc::new(MockTransport::new());
    let server =
        Server::with_transport(TESTNET, mock.clone()).expect("Failed to create mock server");
    (server, mock)
}
