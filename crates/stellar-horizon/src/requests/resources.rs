// ============================================================================
// STELLAR-HORIZON - Resource Kinds & Filters
// ============================================================================
// One marker type per Horizon resource. Filters live in inherent impls on
// `RequestBuilder<Kind>`, so each kind only exposes what its endpoint takes.
// ============================================================================

use super::{Paginated, RequestBuilder, ResourceKind};
use crate::account::AccountId;
use crate::asset::Asset;
use crate::page::Page;
use crate::responses::{
    AccountResponse, EffectResponse, LedgerResponse, OfferResponse, OperationResponse,
    OrderBookResponse, PathResponse, TradeResponse, TransactionResponse,
};
use crate::Result;

macro_rules! resource_kind {
    ($(#[$meta:meta])* $name:ident, [$($segment:literal),+], $output:ty, paginated) => {
        resource_kind!($(#[$meta])* $name, [$($segment),+], $output);
        impl Paginated for $name {}
    };
    ($(#[$meta:meta])* $name:ident, [$($segment:literal),+], $output:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl ResourceKind for $name {
            const DEFAULT_SEGMENTS: &'static [&'static str] = &[$($segment),+];
            type Output = $output;
        }
    };
}

resource_kind!(
    /// `/accounts`
    Accounts, ["accounts"], Page<AccountResponse>, paginated
);
resource_kind!(
    /// `/effects`
    Effects, ["effects"], Page<EffectResponse>, paginated
);
resource_kind!(
    /// `/ledgers`
    Ledgers, ["ledgers"], Page<LedgerResponse>, paginated
);
resource_kind!(
    /// `/offers`
    Offers, ["offers"], Page<OfferResponse>, paginated
);
resource_kind!(
    /// `/operations`
    Operations, ["operations"], Page<OperationResponse>, paginated
);
resource_kind!(
    /// `/order_book`, a snapshot with no cursor, limit or order
    OrderBook, ["order_book"], OrderBookResponse
);
resource_kind!(
    /// `/order_book/trades`
    Trades, ["order_book", "trades"], Page<TradeResponse>, paginated
);
resource_kind!(
    /// `/paths`
    Paths, ["paths"], Page<PathResponse>, paginated
);
resource_kind!(
    /// `/payments`
    Payments, ["payments"], Page<OperationResponse>, paginated
);
resource_kind!(
    /// `/transactions`
    Transactions, ["transactions"], Page<TransactionResponse>, paginated
);

// ==================== Scoping Helpers ====================

impl<K: ResourceKind> RequestBuilder<K> {
    /// `/accounts/{account}/{resource}`
    fn scoped_to_account(self, account: &AccountId, resource: &str) -> Self {
        self.set_path_segments(["accounts", account.as_str(), resource])
    }

    /// `/ledgers/{sequence}/{resource}`
    fn scoped_to_ledger(self, sequence: u64, resource: &str) -> Self {
        self.set_path_segments(["ledgers".to_string(), sequence.to_string(), resource.to_string()])
    }

    /// `/transactions/{hash}/{resource}`
    fn scoped_to_transaction(self, hash: &str, resource: &str) -> Self {
        self.set_path_segments(["transactions", hash, resource])
    }

    /// `/operations/{id}/{resource}`
    fn scoped_to_operation(self, operation_id: u64, resource: &str) -> Self {
        self.set_path_segments([
            "operations".to_string(),
            operation_id.to_string(),
            resource.to_string(),
        ])
    }

    fn asset_filter(self, prefix: &str, asset: &Asset) -> Self {
        self.add_query_parameters(asset.query_params(prefix))
    }
}

// ==================== Accounts ====================

impl RequestBuilder<Accounts> {
    /// `GET /accounts/{account}`
    pub async fn account(self, account: &AccountId) -> Result<AccountResponse> {
        self.set_path_segments(["accounts", account.as_str()])
            .fetch_single()
            .await
    }
}

// ==================== Effects ====================

impl RequestBuilder<Effects> {
    pub fn for_account(self, account: &AccountId) -> Self {
        self.scoped_to_account(account, "effects")
    }

    pub fn for_ledger(self, sequence: u64) -> Self {
        self.scoped_to_ledger(sequence, "effects")
    }

    pub fn for_transaction(self, hash: &str) -> Self {
        self.scoped_to_transaction(hash, "effects")
    }

    pub fn for_operation(self, operation_id: u64) -> Self {
        self.scoped_to_operation(operation_id, "effects")
    }
}

// ==================== Ledgers ====================

impl RequestBuilder<Ledgers> {
    /// `GET /ledgers/{sequence}`
    pub async fn ledger(self, sequence: u64) -> Result<LedgerResponse> {
        self.set_path_segments(["ledgers".to_string(), sequence.to_string()])
            .fetch_single()
            .await
    }
}

// ==================== Offers ====================

impl RequestBuilder<Offers> {
    pub fn for_account(self, account: &AccountId) -> Self {
        self.scoped_to_account(account, "offers")
    }
}

// ==================== Operations ====================

impl RequestBuilder<Operations> {
    /// `GET /operations/{id}`
    pub async fn operation(self, operation_id: u64) -> Result<OperationResponse> {
        self.set_path_segments(["operations".to_string(), operation_id.to_string()])
            .fetch_single()
            .await
    }

    pub fn for_account(self, account: &AccountId) -> Self {
        self.scoped_to_account(account, "operations")
    }

    pub fn for_ledger(self, sequence: u64) -> Self {
        self.scoped_to_ledger(sequence, "operations")
    }

    pub fn for_transaction(self, hash: &str) -> Self {
        self.scoped_to_transaction(hash, "operations")
    }
}

// ==================== Order Book ====================

impl RequestBuilder<OrderBook> {
    pub fn buying_asset(self, asset: &Asset) -> Self {
        self.asset_filter("buying", asset)
    }

    pub fn selling_asset(self, asset: &Asset) -> Self {
        self.asset_filter("selling", asset)
    }
}

// ==================== Trades ====================

impl RequestBuilder<Trades> {
    pub fn buying_asset(self, asset: &Asset) -> Self {
        self.asset_filter("buying", asset)
    }

    pub fn selling_asset(self, asset: &Asset) -> Self {
        self.asset_filter("selling", asset)
    }
}

// ==================== Paths ====================

impl RequestBuilder<Paths> {
    pub fn destination_account(self, account: &AccountId) -> Self {
        self.add_query_parameter("destination_account", account.as_str())
    }

    pub fn source_account(self, account: &AccountId) -> Self {
        self.add_query_parameter("source_account", account.as_str())
    }

    pub fn destination_amount(self, amount: &str) -> Self {
        self.add_query_parameter("destination_amount", amount)
    }

    pub fn destination_asset(self, asset: &Asset) -> Self {
        self.asset_filter("destination", asset)
    }
}

// ==================== Payments ====================

impl RequestBuilder<Payments> {
    pub fn for_account(self, account: &AccountId) -> Self {
        self.scoped_to_account(account, "payments")
    }

    pub fn for_ledger(self, sequence: u64) -> Self {
        self.scoped_to_ledger(sequence, "payments")
    }

    pub fn for_transaction(self, hash: &str) -> Self {
        self.scoped_to_transaction(hash, "payments")
    }
}

// ==================== Transactions ====================

impl RequestBuilder<Transactions> {
    /// `GET /transactions/{hash}`
    pub async fn transaction(self, hash: &str) -> Result<TransactionResponse> {
        self.set_path_segments(["transactions", hash])
            .fetch_single()
            .await
    }

    pub fn for_account(self, account: &AccountId) -> Self {
        self.scoped_to_account(account, "transactions")
    }

    pub fn for_ledger(self, sequence: u64) -> Self {
        self.scoped_to_ledger(sequence, "transactions")
    }
}
