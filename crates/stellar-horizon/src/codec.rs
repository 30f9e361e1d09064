// ============================================================================
// STELLAR-HORIZON - JSON Codec
// ============================================================================

use crate::error::HorizonError;
use crate::Result;
use serde::de::DeserializeOwned;

/// Decodes response bodies.
///
/// Owned by each `Fetcher` / `FederationServer` rather than shared
/// process-wide, so tests can hand in a differently configured instance.
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    max_body_bytes: Option<usize>,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse bodies larger than `bytes` before parsing them
    pub fn with_max_body_bytes(mut self, bytes: usize) -> Self {
        self.max_body_bytes = Some(bytes);
        self
    }

    pub fn decode<T: DeserializeOwned>(&self, body: &str) -> Result<T> {
        if let Some(max) = self.max_body_bytes {
            if body.len() > max {
                return Err(HorizonError::protocol(format!(
                    "Response body of {} bytes exceeds limit of {}",
                    body.len(),
                    max
                )));
            }
        }

        serde_json::from_str(body)
            .map_err(|e| HorizonError::protocol(format!("Failed to decode response: {}", e)))
    }
}
