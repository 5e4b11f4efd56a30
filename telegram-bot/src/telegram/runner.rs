//! REPL runner: converts teloxide messages to core::Message and passes them to the HandlerChain.

use crate::chain::HandlerChain;
use crate::core::{Message, ToCoreMessage};
use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts the long-polling REPL.
///
/// Calls get_me() first and stores the username in `bot_username` (commands addressed as
/// `/cmd@name` are matched against it). Text messages are converted to core::Message and run
/// through the chain to completion; non-text messages are skipped. teloxide dispatches different
/// chats concurrently and one chat's updates sequentially, so a chat sees its updates in order.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => error!(error = %e, "get_me failed; /cmd@name commands will not match"),
    }

    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let chain = handler_chain.clone();
        async move {
            if msg.text().is_none() {
                debug!(chat_id = msg.chat.id.0, "Skipping non-text message");
                return respond(());
            }
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            process_update(&chain, &core_msg).await;
            respond(())
        }
    })
    .await;

    Ok(())
}

/// Runs one update through the chain and waits for it to finish. Chain errors are logged, not
/// returned, so one failed update never stops polling.
pub async fn process_update(chain: &HandlerChain, message: &Message) {
    if let Err(e) = chain.handle(message).await {
        error!(
            error = %e,
            chat_id = message.chat.id,
            user_id = message.user.id,
            "Handler chain failed"
        );
    }
}
