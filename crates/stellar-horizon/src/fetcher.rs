// ============================================================================
// STELLAR-HORIZON - Typed Fetcher
// ============================================================================
// One GET, one status classification, one typed decode. Nothing here
// sleeps or retries: every failure goes straight back to the caller.
// ============================================================================

use crate::codec::JsonCodec;
use crate::error::HorizonError;
use crate::metadata::{header_u64, HorizonResponse, RateLimit, HEADER_RETRY_AFTER};
use crate::transport::{HttpTransport, RawResponse};
use crate::Result;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn HttpTransport>,
    codec: JsonCodec,
}

impl Fetcher {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            codec: JsonCodec::new(),
        }
    }

    pub fn with_codec(mut self, codec: JsonCodec) -> Self {
        self.codec = codec;
        self
    }

    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    pub fn codec(&self) -> &JsonCodec {
        &self.codec
    }

    /// GET `url` and decode the body as `T`.
    ///
    /// `T` decides the shape (a single record or a `Page<_>`); the body is
    /// never sniffed.
    pub async fn fetch<T: HorizonResponse>(&self, url: &Url) -> Result<T> {
        debug!("Fetching {}", url);
        let response = self.transport.get(url).await?;
        self.decode(response)
    }

    pub(crate) fn decode<T: HorizonResponse>(&self, response: RawResponse) -> Result<T> {
        if !response.is_success() {
            return Err(classify_failure(&response));
        }

        if response.body.trim().is_empty() {
            return Err(HorizonError::protocol("Response contains no content"));
        }

        let mut value: T = self.codec.decode(&response.body)?;
        value.attach_rate_limit(RateLimit::from_headers(&response.headers));
        Ok(value)
    }
}

/// Maps a non-success status to its error.
///
/// 429 carries the `Retry-After` seconds (0 when absent); everything else is
/// reported with its status code and reason phrase.
pub(crate) fn classify_failure(response: &RawResponse) -> HorizonError {
    if response.status == 429 {
        let retry_after = header_u64(&response.headers, HEADER_RETRY_AFTER);
        warn!("Rate limited, retry after {}s", retry_after);
        return HorizonError::RateLimited { retry_after };
    }

    warn!("HTTP {} {}", response.status, response.reason);
    HorizonError::HttpStatus {
        status: response.status,
        message: response.reason.clone(),
    }
}
