use crate::error::ChecklistError;
use async_trait::async_trait;

/// Message courier: delivers one finished chunk of text somewhere.
///
/// Every delivery backend (Telegram Bot API, a relay, a test recorder)
/// implements this trait. One call is one acknowledged send; an `Err`
/// means the remaining work must not be attempted.
#[async_trait]
pub trait Courier: Send + Sync {
    /// Human-readable courier name.
    fn name(&self) -> &str;

    /// Deliver a single chunk and wait for the acknowledgment.
    async fn deliver(&self, text: &str) -> Result<(), ChecklistError>;
}

/// String-keyed durable store with `localStorage` semantics.
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, ChecklistError>;

    /// Insert or overwrite the value under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), ChecklistError>;

    /// Remove every key.
    async fn clear(&self) -> Result<(), ChecklistError>;
}
