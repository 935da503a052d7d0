//! Result sink contract.

use crate::extract::ExtractError;

/// Consumer of an extraction result.
pub trait ResultSink {
    /// Called with the digest when extraction succeeds.
    fn on_digest(&mut self, digest: String);

    /// Called when no digest was produced. Ignored unless overridden.
    fn on_absent(&mut self, _reason: &ExtractError) {}
}

/// Sink that keeps a fallback value until a digest arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestSlot {
    value: String,
    delivered: bool,
}

impl DigestSlot {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            value: fallback.into(),
            delivered: false,
        }
    }

    /// Current digest, or the fallback if none was delivered.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_delivered(&self) -> bool {
        self.delivered
    }
}

impl Default for DigestSlot {
    fn default() -> Self {
        Self::new("unknown")
    }
}

impl ResultSink for DigestSlot {
    fn on_digest(&mut self, digest: String) {
        self.value = digest;
        self.delivered = true;
    }
}
