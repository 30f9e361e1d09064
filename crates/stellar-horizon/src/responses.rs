// ============================================================================
// STELLAR-HORIZON - Response Records
// ============================================================================
// Typed views of Horizon resources. Identifiers and amounts are passed
// through as the strings Horizon sends; nothing here interprets them.
// ============================================================================

use crate::metadata::{rate_limited_response, RateLimit};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

// ============================================================================
// SHARED PIECES
// ============================================================================

/// Asset as it appears inside Horizon records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFields {
    pub asset_type: String,
    #[serde(default)]
    pub asset_code: Option<String>,
    #[serde(default)]
    pub asset_issuer: Option<String>,
}

/// Exact price as a fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub n: i64,
    pub d: i64,
}

/// Horizon has sent some fields both as JSON strings and numbers across
/// versions; accept either and keep the text.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

pub(crate) fn opt_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    struct Wrapped(#[serde(deserialize_with = "string_or_number")] String);

    Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|w| w.0))
}

// ============================================================================
// ACCOUNTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    /// "native", "credit_alphanum4", "credit_alphanum12" or "liquidity_pool_shares"
    pub asset_type: String,
    #[serde(default)]
    pub asset_code: Option<String>,
    #[serde(default)]
    pub asset_issuer: Option<String>,
    pub balance: String,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub buying_liabilities: Option<String>,
    #[serde(default)]
    pub selling_liabilities: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountThresholds {
    pub low_threshold: u8,
    pub med_threshold: u8,
    pub high_threshold: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountFlags {
    pub auth_required: bool,
    pub auth_revocable: bool,
    #[serde(default)]
    pub auth_immutable: bool,
    #[serde(default)]
    pub auth_clawback_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signer {
    pub key: String,
    pub weight: u32,
    #[serde(rename = "type", default)]
    pub signer_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub account_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub sequence: String,
    #[serde(default)]
    pub paging_token: Option<String>,
    pub subentry_count: u32,
    #[serde(default)]
    pub home_domain: Option<String>,
    #[serde(default)]
    pub inflation_destination: Option<String>,
    #[serde(default)]
    pub last_modified_ledger: Option<u64>,
    #[serde(default)]
    pub thresholds: AccountThresholds,
    #[serde(default)]
    pub flags: AccountFlags,
    #[serde(default)]
    pub balances: Vec<Balance>,
    #[serde(default)]
    pub signers: Vec<Signer>,
    /// Base64 encoded account data entries
    #[serde(default)]
    pub data: HashMap<String, String>,
    #[serde(skip)]
    pub rate_limit: RateLimit,
}

// ============================================================================
// LEDGERS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerResponse {
    pub id: String,
    pub paging_token: String,
    pub hash: String,
    #[serde(default)]
    pub prev_hash: Option<String>,
    pub sequence: u64,
    #[serde(default, alias = "transaction_count")]
    pub successful_transaction_count: Option<u32>,
    #[serde(default)]
    pub failed_transaction_count: Option<u32>,
    pub operation_count: u32,
    pub closed_at: DateTime<Utc>,
    pub total_coins: String,
    pub fee_pool: String,
    #[serde(default)]
    pub base_fee_in_stroops: Option<u32>,
    #[serde(default)]
    pub base_reserve_in_stroops: Option<u32>,
    #[serde(default)]
    pub max_tx_set_size: Option<u32>,
    #[serde(default)]
    pub protocol_version: Option<u32>,
    #[serde(skip)]
    pub rate_limit: RateLimit,
}

// ============================================================================
// TRANSACTIONS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: String,
    pub paging_token: String,
    pub hash: String,
    pub ledger: u64,
    pub created_at: DateTime<Utc>,
    pub source_account: String,
    #[serde(deserialize_with = "string_or_number")]
    pub source_account_sequence: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub fee_charged: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub max_fee: Option<String>,
    pub operation_count: u32,
    pub envelope_xdr: String,
    pub result_xdr: String,
    #[serde(default)]
    pub result_meta_xdr: Option<String>,
    #[serde(default)]
    pub memo_type: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub successful: Option<bool>,
    #[serde(skip)]
    pub rate_limit: RateLimit,
}

// ============================================================================
// OPERATIONS & EFFECTS
// ============================================================================

/// An operation (also the record type of `/payments`).
///
/// Type-specific fields (amount, asset, destination, ...) stay in `details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResponse {
    pub id: String,
    pub paging_token: String,
    pub source_account: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub type_i: u32,
    pub created_at: DateTime<Utc>,
    pub transaction_hash: String,
    #[serde(default)]
    pub transaction_successful: Option<bool>,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
    #[serde(skip)]
    pub rate_limit: RateLimit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectResponse {
    pub id: String,
    pub paging_token: String,
    pub account: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub type_i: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
    #[serde(skip)]
    pub rate_limit: RateLimit,
}

// ============================================================================
// OFFERS, TRADES, ORDER BOOK, PATHS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub paging_token: String,
    pub seller: String,
    pub selling: AssetFields,
    pub buying: AssetFields,
    pub amount: String,
    pub price: String,
    pub price_r: Price,
    #[serde(default)]
    pub last_modified_ledger: Option<u64>,
    #[serde(skip)]
    pub rate_limit: RateLimit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeResponse {
    pub id: String,
    pub paging_token: String,
    pub ledger_close_time: DateTime<Utc>,
    #[serde(default)]
    pub base_account: Option<String>,
    pub base_amount: String,
    pub base_asset_type: String,
    #[serde(default)]
    pub base_asset_code: Option<String>,
    #[serde(default)]
    pub base_asset_issuer: Option<String>,
    #[serde(default)]
    pub counter_account: Option<String>,
    pub counter_amount: String,
    pub counter_asset_type: String,
    #[serde(default)]
    pub counter_asset_code: Option<String>,
    #[serde(default)]
    pub counter_asset_issuer: Option<String>,
    pub base_is_seller: bool,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(skip)]
    pub rate_limit: RateLimit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookRow {
    pub amount: String,
    pub price: String,
    #[serde(default)]
    pub price_r: Option<Price>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookResponse {
    pub base: AssetFields,
    pub counter: AssetFields,
    #[serde(default)]
    pub bids: Vec<OrderBookRow>,
    #[serde(default)]
    pub asks: Vec<OrderBookRow>,
    #[serde(skip)]
    pub rate_limit: RateLimit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResponse {
    pub destination_amount: String,
    pub destination_asset_type: String,
    #[serde(default)]
    pub destination_asset_code: Option<String>,
    #[serde(default)]
    pub destination_asset_issuer: Option<String>,
    pub source_amount: String,
    pub source_asset_type: String,
    #[serde(default)]
    pub source_asset_code: Option<String>,
    #[serde(default)]
    pub source_asset_issuer: Option<String>,
    #[serde(default)]
    pub path: Vec<AssetFields>,
    #[serde(skip)]
    pub rate_limit: RateLimit,
}

// ============================================================================
// SUBMISSION
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultCodes {
    #[serde(default)]
    pub transaction: Option<String>,
    #[serde(default)]
    pub operations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitExtras {
    #[serde(default)]
    pub envelope_xdr: Option<String>,
    #[serde(default)]
    pub result_xdr: Option<String>,
    #[serde(default)]
    pub result_codes: Option<ResultCodes>,
}

/// Body returned by `POST /transactions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitTransactionResponse {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub ledger: Option<u64>,
    #[serde(default)]
    pub envelope_xdr: Option<String>,
    #[serde(default)]
    pub result_xdr: Option<String>,
    #[serde(default)]
    pub result_meta_xdr: Option<String>,
    #[serde(default)]
    pub extras: Option<SubmitExtras>,
}

impl SubmitTransactionResponse {
    /// A transaction is in a ledger once Horizon reports which one
    pub fn is_success(&self) -> bool {
        self.ledger.is_some()
    }
}

rate_limited_response!(
    AccountResponse,
    LedgerResponse,
    TransactionResponse,
    OperationResponse,
    EffectResponse,
    OfferResponse,
    TradeResponse,
    OrderBookResponse,
    PathResponse,
);
