//! Integration Tests: Fetching and Paging
//!
//! Tests the typed fetch pipeline end to end:
//! - single records and HAL pages
//! - rate-limit headers on successful responses
//! - 429 / non-2xx / empty-body classification
//! - following next/prev links

use super::mock_server;
use pretty_assertions::assert_eq;
use stellar_horizon::{AccountId, HorizonError, Order, RawResponse};

const ACCOUNT: &str = "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H";

fn ledger_record(sequence: u64) -> String {
    format!(
        r#"{{
            "id": "ledger-{seq}",
            "paging_token": "{token}",
            "hash": "e8e10918f9c000c73119abe54cf089f59f9015cc93c49ccf00b5e8b9afb6e6b1",
            "sequence": {seq},
            "successful_transaction_count": 0,
            "failed_transaction_count": 0,
            "operation_count": 0,
            "closed_at": "2015-09-30T16:46:54Z",
            "total_coins": "100000000000.0000000",
            "fee_pool": "0.0000000",
            "base_fee_in_stroops": 100,
            "base_reserve_in_stroops": 100000000,
            "max_tx_set_size": 50,
            "protocol_version": 0
        }}"#,
        seq = sequence,
        token = sequence << 32
    )
}

fn ledger_page(sequences: &[u64], next: Option<&str>, prev: Option<&str>) -> String {
    let records: Vec<String> = sequences.iter().map(|s| ledger_record(*s)).collect();
    let link = |href: Option<&str>| match href {
        Some(href) => format!(r#"{{"href": "{}"}}"#, href),
        None => "null".to_string(),
    };
    format!(
        r#"{{
            "_links": {{
                "self": {{"href": "https://horizon-testnet.stellar.org/ledgers?limit=2"}},
                "next": {next},
                "prev": {prev}
            }},
            "_embedded": {{ "records": [{records}] }}
        }}"#,
        next = link(next),
        prev = link(prev),
        records = records.join(",")
    )
}

/// Test: a page decodes, carries rate limits and can walk forward and back
#[tokio::test]
async fn test_page_walk() {
    let (server, mock) = mock_server();
    let first = "https://horizon-testnet.stellar.org/ledgers?limit=2&order=asc";
    let second = "https://horizon-testnet.stellar.org/ledgers?cursor=8589934592&limit=2&order=asc";
    let back = "https://horizon-testnet.stellar.org/ledgers?cursor=12884901888&limit=2&order=desc";

    mock.expect_get(first).return_ok(
        RawResponse::new(200)
            .with_body(ledger_page(&[1, 2], Some(second), None))
            .with_header("X-Ratelimit-Limit", "3600")
            .with_header("X-Ratelimit-Remaining", "3599")
            .with_header("X-Ratelimit-Reset", "42"),
    );
    mock.expect_get(second)
        .return_ok(RawResponse::new(200).with_body(ledger_page(&[3], None, Some(back))));
    mock.expect_get(back)
        .return_ok(RawResponse::new(200).with_body(ledger_page(&[2, 1], None, None)));

    let page = server
        .ledgers()
        .limit(2)
        .order(Order::Asc)
        .execute()
        .await
        .expect("First page");

    assert_eq!(page.len(), 2);
    assert_eq!(page.records[0].sequence, 1);
    assert_eq!(page.rate_limit.limit, 3600);
    assert_eq!(page.rate_limit.remaining, 3599);
    assert_eq!(page.rate_limit.reset, 42);
    assert!(page.prev_page(server.fetcher()).await.unwrap().is_none());

    let next = page
        .next_page(server.fetcher())
        .await
        .expect("Second page")
        .expect("Second page exists");
    assert_eq!(next.records[0].sequence, 3);
    assert_eq!(next.rate_limit.limit, 0, "missing headers read as zero");
    assert!(next.next_page(server.fetcher()).await.unwrap().is_none());

    let previous = next
        .prev_page(server.fetcher())
        .await
        .unwrap()
        .expect("Previous page exists");
    let sequences: Vec<u64> = previous.into_records().iter().map(|l| l.sequence).collect();
    assert_eq!(sequences, vec![2, 1]);

    assert_eq!(mock.request_count(), 3);
    mock.verify();
}

/// Test: single account record
#[tokio::test]
async fn test_single_account() {
    let (server, mock) = mock_server();
    mock.expect_get(&format!("https://horizon-testnet.stellar.org/accounts/{}", ACCOUNT))
        .return_ok(
            RawResponse::new(200)
                .with_body(format!(
                    r#"{{
                        "id": "{id}",
                        "account_id": "{id}",
                        "sequence": "3298702387052545",
                        "subentry_count": 1,
                        "thresholds": {{"low_threshold": 0, "med_threshold": 0, "high_threshold": 0}},
                        "flags": {{"auth_required": false, "auth_revocable": false}},
                        "balances": [{{"balance": "9999.9999900", "asset_type": "native"}}],
                        "signers": [{{"key": "{id}", "weight": 1, "type": "ed25519_public_key"}}],
                        "data": {{}}
                    }}"#,
                    id = ACCOUNT
                ))
                .with_header("X-Ratelimit-Remaining", "17"),
        );

    let account = server
        .accounts()
        .account(&AccountId::parse(ACCOUNT).unwrap())
        .await
        .expect("Account record");

    assert_eq!(account.account_id, ACCOUNT);
    assert_eq!(account.sequence, "3298702387052545");
    assert_eq!(account.balances.len(), 1);
    assert_eq!(account.rate_limit.remaining, 17);
    mock.verify();
}

/// Test: 429 surfaces the retry-after delay and nothing is retried
#[tokio::test]
async fn test_rate_limited() {
    let (server, mock) = mock_server();
    mock.expect_get("https://horizon-testnet.stellar.org/ledgers")
        .return_ok(RawResponse::new(429).with_header("Retry-After", "10"));

    let err = server.ledgers().execute().await.unwrap_err();
    assert_eq!(err, HorizonError::RateLimited { retry_after: 10 });
    assert_eq!(err.retry_after(), Some(10));
    assert!(err.is_recoverable());
    assert_eq!(mock.request_count(), 1);
}

/// Test: other statuses keep their code, empty bodies are protocol errors
#[tokio::test]
async fn test_status_and_empty_body() {
    let (server, mock) = mock_server();
    let hash = "991534d902063b7715cd74207bef4e7bd7aa2f108f62d3eba837ce6023b2d4f3";
    let url = format!("https://horizon-testnet.stellar.org/transactions/{}", hash);
    mock.expect_get(&url).return_ok(
        RawResponse::new(404).with_body(r#"{"type":"https://stellar.org/horizon-errors/not_found"}"#),
    );
    mock.expect_get(&url).return_ok(RawResponse::new(200));

    let err = server.transactions().transaction(hash).await.unwrap_err();
    assert_eq!(
        err,
        HorizonError::HttpStatus {
            status: 404,
            message: "Not Found".to_string()
        }
    );

    let err = server.transactions().transaction(hash).await.unwrap_err();
    assert!(matches!(err, HorizonError::Protocol(_)));
}

/// Test: connection failures are reported once, not retried
#[tokio::test]
async fn test_connection_error() {
    let (server, mock) = mock_server();
    mock.expect_get("https://horizon-testnet.stellar.org/ledgers/5")
        .return_connection_error("connection reset by peer");

    let err = server.ledgers().ledger(5).await.unwrap_err();
    assert!(matches!(err, HorizonError::Connection(_)));
    assert_eq!(mock.request_count(), 1);
}
