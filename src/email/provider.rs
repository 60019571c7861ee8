//! Email provider trait

use crate::domain::{Envelope, SendReceipt};
use crate::error::Result;
use async_trait::async_trait;

/// Trait for dispatch backends
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Dispatch a single envelope. Implementations make one attempt only.
    async fn send(&self, envelope: &Envelope) -> Result<SendReceipt>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
