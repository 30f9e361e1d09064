// ============================================================================
// STELLAR-HORIZON - Response Metadata
// ============================================================================
// Rate-limit headers Horizon attaches to every response.
// ============================================================================

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const HEADER_RATE_LIMIT_LIMIT: &str = "X-Ratelimit-Limit";
pub const HEADER_RATE_LIMIT_REMAINING: &str = "X-Ratelimit-Remaining";
pub const HEADER_RATE_LIMIT_RESET: &str = "X-Ratelimit-Reset";
pub const HEADER_RETRY_AFTER: &str = "Retry-After";

/// Rate-limit window reported by the server.
///
/// Each field is read from its own header; a missing header leaves it at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    /// Requests allowed per window
    pub limit: u64,
    /// Requests left in the current window
    pub remaining: u64,
    /// Seconds until the window resets
    pub reset: u64,
}

impl RateLimit {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_u64(headers, HEADER_RATE_LIMIT_LIMIT),
            remaining: header_u64(headers, HEADER_RATE_LIMIT_REMAINING),
            reset: header_u64(headers, HEADER_RATE_LIMIT_RESET),
        }
    }
}

/// Integer header value, 0 when absent or unparseable.
pub(crate) fn header_u64(headers: &HeaderMap, name: &str) -> u64 {
    let Some(value) = headers.get(name) else {
        return 0;
    };

    match value.to_str().ok().and_then(|v| v.trim().parse::<u64>().ok()) {
        Some(parsed) => parsed,
        None => {
            warn!("Ignoring malformed {} header: {:?}", name, value);
            0
        }
    }
}

/// A shape the fetcher can decode a success body into.
///
/// Shapes that carry rate-limit metadata override `attach_rate_limit`;
/// the default drops it.
pub trait HorizonResponse: DeserializeOwned + Send {
    fn attach_rate_limit(&mut self, _rate_limit: RateLimit) {}
}

impl HorizonResponse for serde_json::Value {}

/// Implements `HorizonResponse` for structs with a `rate_limit: RateLimit` field.
macro_rules! rate_limited_response {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::metadata::HorizonResponse for $ty {
                fn attach_rate_limit(&mut self, rate_limit: $crate::metadata::RateLimit) {
                    self.rate_limit = rate_limit;
                }
            }
        )*
    };
}

pub(crate) use rate_limited_response;
