// ============================================================================
// STELLAR-HORIZON - Transaction Submission
// ============================================================================
// POST /transactions with a single form field `tx`. Building and signing
// the envelope is the caller's business; all this needs is its base64 XDR.
//
// Failure mapping is intentionally coarser than the fetcher's: any non-2xx
// is `HttpStatus`, including 429, and the problem body is not decoded.
// ============================================================================

use crate::codec::JsonCodec;
use crate::error::HorizonError;
use crate::responses::SubmitTransactionResponse;
use crate::transport::HttpTransport;
use crate::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{debug, warn};
use url::Url;

/// Anything that can render itself as a base64 `TransactionEnvelope` XDR
pub trait TransactionEnvelope {
    fn to_envelope_xdr_base64(&self) -> Result<String>;
}

/// An already signed and encoded envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedEnvelope {
    xdr_base64: String,
}

impl SignedEnvelope {
    /// Wrap a base64 envelope, checking only that it is valid base64
    pub fn from_base64(xdr_base64: impl Into<String>) -> Result<Self> {
        let xdr_base64 = xdr_base64.into();
        STANDARD
            .decode(xdr_base64.as_bytes())
            .map_err(|e| HorizonError::configuration(format!("Envelope is not base64: {}", e)))?;
        Ok(Self { xdr_base64 })
    }

    /// Encode raw envelope XDR bytes
    pub fn from_xdr_bytes(xdr: &[u8]) -> Self {
        Self {
            xdr_base64: STANDARD.encode(xdr),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.xdr_base64
    }
}

impl TransactionEnvelope for SignedEnvelope {
    fn to_envelope_xdr_base64(&self) -> Result<String> {
        Ok(self.xdr_base64.clone())
    }
}

pub(crate) async fn submit_transaction<T: TransactionEnvelope + ?Sized>(
    transport: &dyn HttpTransport,
    codec: &JsonCodec,
    base: &Url,
    transaction: &T,
) -> Result<SubmitTransactionResponse> {
    let envelope = transaction.to_envelope_xdr_base64()?;

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| HorizonError::configuration(format!("{} cannot be used as a base URL", base)))?
        .pop_if_empty()
        .push("transactions");

    debug!("Submitting transaction...");
    let response = transport.post_form(&url, &[("tx", envelope.as_str())]).await?;

    if !response.is_success() {
        warn!("Transaction submission failed: HTTP {}", response.status);
        return Err(HorizonError::HttpStatus {
            status: response.status,
            message: response.reason,
        });
    }

    if response.body.trim().is_empty() {
        return Err(HorizonError::protocol("Response contains no content"));
    }

    let result: SubmitTransactionResponse = codec.decode(&response.body)?;
    if let Some(hash) = &result.hash {
        debug!("Transaction submitted: {}", hash);
    }
    Ok(result)
}
