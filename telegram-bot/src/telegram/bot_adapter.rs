//! Wraps teloxide::Bot and implements [`crate::core::Bot`].

use crate::core::{Bot as CoreBot, BotError, Chat, MarkupMode, Result};
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, ParseMode},
};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Maps a core markup mode to Telegram's `parse_mode`; `None` sends plain text.
#[allow(deprecated)]
pub(crate) fn parse_mode(mode: MarkupMode) -> Option<ParseMode> {
    match mode {
        MarkupMode::Plain => None,
        MarkupMode::Markdown => Some(ParseMode::Markdown),
        MarkupMode::MarkdownV2 => Some(ParseMode::MarkdownV2),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str, mode: MarkupMode) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat.id), text);
        let request = match parse_mode(mode) {
            Some(pm) => request.parse_mode(pm),
            None => request,
        };
        request.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
