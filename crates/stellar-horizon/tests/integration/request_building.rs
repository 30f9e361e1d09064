//! Integration Tests: Request Building
//!
//! URLs produced by each resource builder against the testnet base:
//! - default collection paths
//! - account / ledger / transaction / operation scoping
//! - asset filters and paging parameters
//! - one-shot path segments

use super::mock_server;
use pretty_assertions::assert_eq;
use stellar_horizon::{AccountId, Asset, HorizonError, Order};

const ACCOUNT: &str = "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H";
const EUR_ISSUER: &str = "GAUPA4HERNBDPVO4IUA3MJXBCRRK5W54EVXTDK6IIUTGDQRB6D5W242W";
const USD_ISSUER: &str = "GDRRHSJMHXDTQBT4JTCILNGF5AS54FEMTXL7KOLMF6TFTHRK6SSUSUZZ";

fn account() -> AccountId {
    AccountId::parse(ACCOUNT).expect("Valid account id")
}

/// Test: accounts collection with all paging parameters
#[test]
fn test_accounts() {
    let (server, _) = mock_server();
    let request = server
        .accounts()
        .cursor("13537736921089")
        .limit(200)
        .order(Order::Asc)
        .build()
        .unwrap();

    assert_eq!(
        request.url().as_str(),
        "https://horizon-testnet.stellar.org/accounts?cursor=13537736921089&limit=200&order=asc"
    );
}

/// Test: effects under every scope
#[test]
fn test_effects_scopes() {
    let (server, _) = mock_server();

    let url = server.effects().limit(200).order(Order::Desc).build().unwrap();
    assert_eq!(
        url.url().as_str(),
        "https://horizon-testnet.stellar.org/effects?limit=200&order=desc"
    );

    let url = server
        .effects()
        .for_account(&account())
        .limit(200)
        .order(Order::Desc)
        .build()
        .unwrap();
    assert_eq!(
        url.url().as_str(),
        format!("https://horizon-testnet.stellar.org/accounts/{}/effects?limit=200&order=desc", ACCOUNT)
    );

    let url = server
        .effects()
        .for_ledger(200000000000)
        .limit(50)
        .order(Order::Asc)
        .build()
        .unwrap();
    assert_eq!(
        url.url().as_str(),
        "https://horizon-testnet.stellar.org/ledgers/200000000000/effects?limit=50&order=asc"
    );

    let url = server
        .effects()
        .for_transaction("991534d902063b7715cd74207bef4e7bd7aa2f108f62d3eba837ce6023b2d4f3")
        .build()
        .unwrap();
    assert_eq!(
        url.url().as_str(),
        "https://horizon-testnet.stellar.org/transactions/991534d902063b7715cd74207bef4e7bd7aa2f108f62d3eba837ce6023b2d4f3/effects"
    );

    let url = server
        .effects()
        .for_operation(28798257847)
        .cursor("85794837")
        .build()
        .unwrap();
    assert_eq!(
        url.url().as_str(),
        "https://horizon-testnet.stellar.org/operations/28798257847/effects?cursor=85794837"
    );
}

/// Test: ledgers, offers and transactions collections
#[test]
fn test_collections() {
    let (server, _) = mock_server();

    let url = server.ledgers().limit(200).order(Order::Asc).build().unwrap();
    assert_eq!(
        url.url().as_str(),
        "https://horizon-testnet.stellar.org/ledgers?limit=200&order=asc"
    );

    let url = server
        .offers()
        .for_account(&account())
        .limit(200)
        .order(Order::Desc)
        .build()
        .unwrap();
    assert_eq!(
        url.url().as_str(),
        format!("https://horizon-testnet.stellar.org/accounts/{}/offers?limit=200&order=desc", ACCOUNT)
    );

    let url = server.transactions().limit(200).order(Order::Desc).build().unwrap();
    assert_eq!(
        url.url().as_str(),
        "https://horizon-testnet.stellar.org/transactions?limit=200&order=desc"
    );

    let url = server
        .transactions()
        .for_ledger(200000000000)
        .limit(50)
        .order(Order::Asc)
        .build()
        .unwrap();
    assert_eq!(
        url.url().as_str(),
        "https://horizon-testnet.stellar.org/ledgers/200000000000/transactions?limit=50&order=asc"
    );
}

/// Test: trades with both asset filters, then paging parameters
#[test]
fn test_trades_with_assets() {
    let (server, _) = mock_server();
    let eur = Asset::credit("EUR", AccountId::parse(EUR_ISSUER).unwrap()).unwrap();
    let usd = Asset::credit("USD", AccountId::parse(USD_ISSUER).unwrap()).unwrap();

    let request = server
        .trades()
        .buying_asset(&eur)
        .selling_asset(&usd)
        .cursor("13537736921089")
        .limit(200)
        .order(Order::Asc)
        .build()
        .unwrap();

    let expected = format!(
        "https://horizon-testnet.stellar.org/order_book/trades?\
         buying_asset_type=credit_alphanum4&\
         buying_asset_code=EUR&\
         buying_asset_issuer={}&\
         selling_asset_type=credit_alphanum4&\
         selling_asset_code=USD&\
         selling_asset_issuer={}&\
         cursor=13537736921089&\
         limit=200&\
         order=asc",
        EUR_ISSUER, USD_ISSUER
    );
    assert_eq!(request.url().as_str(), expected);
}

/// Test: native assets only emit their type
#[test]
fn test_order_book_native_asset() {
    let (server, _) = mock_server();
    let usd = Asset::credit("USD", AccountId::parse(USD_ISSUER).unwrap()).unwrap();

    let request = server
        .order_book()
        .buying_asset(&Asset::native())
        .selling_asset(&usd)
        .build()
        .unwrap();

    let expected = format!(
        "buying_asset_type=native&\
         selling_asset_type=credit_alphanum4&\
         selling_asset_code=USD&\
         selling_asset_issuer={}",
        USD_ISSUER
    );
    assert_eq!(request.url().query(), Some(expected.as_str()));
}

/// Test: path finding parameters
#[test]
fn test_paths() {
    let (server, _) = mock_server();
    let eur = Asset::credit("EUR", AccountId::parse(EUR_ISSUER).unwrap()).unwrap();

    let request = server
        .paths()
        .destination_account(&account())
        .source_account(&AccountId::parse(USD_ISSUER).unwrap())
        .destination_amount("20.1")
        .destination_asset(&eur)
        .build()
        .unwrap();

    let query: Vec<(String, String)> = request
        .url()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let keys: Vec<&str> = query.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "destination_account",
            "source_account",
            "destination_amount",
            "destination_asset_type",
            "destination_asset_code",
            "destination_asset_issuer",
        ]
    );
    assert_eq!(request.url().path(), "/paths");
}

/// Test: scoping twice is rejected at build time
#[test]
fn test_double_scope_is_configuration_error() {
    let (server, mock) = mock_server();
    let result = server
        .payments()
        .for_account(&account())
        .for_ledger(1)
        .build();

    assert!(matches!(result, Err(HorizonError::Configuration(_))));
    assert_eq!(mock.request_count(), 0);
}
