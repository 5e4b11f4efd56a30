//! Logs each inbound message and the chain's final response.

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};

/// Logs the message in `before()` and the outcome in `after()`; never stops the chain.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let outcome = match response {
            HandlerResponse::Continue => "continue",
            HandlerResponse::Stop => "stop",
            HandlerResponse::Ignore => "ignore",
            HandlerResponse::Reply(_) => "reply",
        };
        let reply_len = match response {
            HandlerResponse::Reply(text) => text.chars().count(),
            _ => 0,
        };
        info!(
            chat_id = message.chat.id,
            message_id = %message.id,
            outcome,
            reply_len,
            "Processed message"
        );
        Ok(())
    }
}
