//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; `TelegramBotAdapter` implements it via teloxide and tests
//! substitute a recording mock.

use crate::core::error::Result;
use crate::core::types::{Chat, MarkupMode};
use async_trait::async_trait;

/// Outbound side of the transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends `text` to `chat`, parsed with `mode`.
    async fn send_message(&self, chat: &Chat, text: &str, mode: MarkupMode) -> Result<()>;
}
