//! Integration Tests: Transaction Submission
//!
//! POST /transactions with the `tx` form field, and how the outcome is
//! reported.

use super::mock_server;
use pretty_assertions::assert_eq;
use stellar_horizon::{HorizonError, RawResponse, SignedEnvelope};

const SUBMIT_URL: &str = "https://horizon-testnet.stellar.org/transactions";
const ENVELOPE: &str = "AAAAAKNzvByVS4rBl7nNCaeMB/jLIZ3cjQSMKxMe7oh5QNgFAAAAZAAAAAAAAAABAAAAAA==";

fn envelope() -> SignedEnvelope {
    SignedEnvelope::from_base64(ENVELOPE).expect("Valid base64 envelope")
}

/// Test: accepted transaction
#[tokio::test]
async fn test_submit_success() {
    let (server, mock) = mock_server();
    mock.expect_post(SUBMIT_URL).return_ok(RawResponse::new(200).with_body(
        r#"{
            "hash": "2634d2cf5adcbd3487d1df042166eef53830115844fdde1588828667bf93ff42",
            "ledger": 826150,
            "envelope_xdr": "AAAA",
            "result_xdr": "AAAAAAAAAGQAAAAAAAAAAQAAAAAAAAABAAAAAAAAAAA=",
            "result_meta_xdr": "AAAAAA=="
        }"#,
    ));

    let response = server.submit_transaction(&envelope()).await.expect("Submitted");
    assert!(response.is_success());
    assert_eq!(response.ledger, Some(826150));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].form,
        vec![("tx".to_string(), ENVELOPE.to_string())]
    );
}

/// Test: rejected transaction body still decodes with result codes
#[tokio::test]
async fn test_submit_rejected_body() {
    let (server, mock) = mock_server();
    mock.expect_post(SUBMIT_URL).return_ok(RawResponse::new(200).with_body(
        r#"{
            "hash": "2634d2cf5adcbd3487d1df042166eef53830115844fdde1588828667bf93ff42",
            "extras": {
                "envelope_xdr": "AAAA",
                "result_xdr": "AAAAAAAAAGT/////AAAAAQAAAAAAAAAB////+wAAAAA=",
                "result_codes": {"transaction": "tx_failed", "operations": ["op_no_destination"]}
            }
        }"#,
    ));

    let response = server.submit_transaction(&envelope()).await.unwrap();
    assert!(!response.is_success());
    let codes = response.extras.and_then(|e| e.result_codes).expect("Result codes");
    assert_eq!(codes.transaction.as_deref(), Some("tx_failed"));
}

/// Test: every non-2xx (429 included) is an HTTP status error
#[tokio::test]
async fn test_submit_http_errors() {
    let (server, mock) = mock_server();
    mock.expect_post(SUBMIT_URL).return_ok(RawResponse::new(504));
    mock.expect_post(SUBMIT_URL)
        .return_ok(RawResponse::new(429).with_header("Retry-After", "3"));

    let err = server.submit_transaction(&envelope()).await.unwrap_err();
    assert_eq!(
        err,
        HorizonError::HttpStatus {
            status: 504,
            message: "Gateway Timeout".to_string()
        }
    );

    let err = server.submit_transaction(&envelope()).await.unwrap_err();
    assert!(matches!(err, HorizonError::HttpStatus { status: 429, .. }));
}

/// Test: empty success body is a protocol error
#[tokio::test]
async fn test_submit_empty_body() {
    let (server, mock) = mock_server();
    mock.expect_post(SUBMIT_URL).return_ok(RawResponse::new(200));

    let err = server.submit_transaction(&envelope()).await.unwrap_err();
    assert!(matches!(err, HorizonError::Protocol(_)));
}
