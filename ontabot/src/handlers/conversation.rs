//! Ontabot's conversation handler: commands, timezone setup, greetings and free-text chat.

use async_trait::async_trait;
use chrono::Utc;
use prompt::{ChatMessage, MessageRole, QUOTE_PROMPT};
use std::sync::Arc;
use telegram_bot::{Bot, Chat, Handler, HandlerError, HandlerResponse, MarkupMode, Message, Result};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

use crate::command::{parse_command, OntaCommand};
use crate::completion::CompletionService;
use crate::greeting::GreetingBand;
use crate::markdown::escape_markdown_v2;
use crate::replies::{
    timezone_confirmation, HELP_TEXT, ONBOARDING, SETTIMEZONE_USAGE, SET_TIMEZONE_FIRST,
};
use crate::session::{ChatSession, SessionStore, DEFAULT_HISTORY_LIMIT};
use crate::timezone::TimezoneAliases;

/// Handles every text message for a chat while holding that chat's session lock, so updates from
/// one chat never interleave. Arrival order comes from the runner, which finishes each update
/// before the dispatcher hands it the chat's next one.
///
/// Returns `Reply(last sent text)` for handled updates and `Ignore` for unknown commands.
pub struct ConversationHandler {
    bot: Arc<dyn Bot>,
    completion: CompletionService,
    sessions: Arc<SessionStore>,
    aliases: Arc<TimezoneAliases>,
    bot_username: Arc<RwLock<Option<String>>>,
    history_limit: usize,
}

impl ConversationHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        completion: CompletionService,
        sessions: Arc<SessionStore>,
        aliases: Arc<TimezoneAliases>,
    ) -> Self {
        Self {
            bot,
            completion,
            sessions,
            aliases,
            bot_username: Arc::new(RwLock::new(None)),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Shared slot the runner fills from get_me(); used to match `/cmd@name`.
    pub fn with_bot_username(mut self, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        self.bot_username = bot_username;
        self
    }

    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }

    async fn send(&self, chat: &Chat, text: &str, mode: MarkupMode) -> Result<()> {
        self.bot
            .send_message(chat, text, mode)
            .await
            .map_err(|e| {
                error!(chat_id = chat.id, error = %e, "Failed to send message");
                e
            })
    }

    /// Sends an assistant reply, records it in history and trims.
    async fn reply_and_record(
        &self,
        chat: &Chat,
        session: &mut ChatSession,
        text: String,
        mode: MarkupMode,
    ) -> Result<String> {
        self.send(chat, &text, mode).await?;
        session.append(MessageRole::Assistant, text.clone());
        session.trim_history(self.history_limit);
        Ok(text)
    }

    async fn greet(&self, chat: &Chat, session: &mut ChatSession) -> Result<String> {
        let band = GreetingBand::at(session.timezone(), Utc::now());
        let greeting = self
            .completion
            .complete(&[ChatMessage::user(band.prompt())])
            .await;
        info!(chat_id = chat.id, band = band.label(), "Sending greeting");
        self.reply_and_record(chat, session, greeting, MarkupMode::Markdown)
            .await
    }

    async fn start(&self, chat: &Chat, session: &mut ChatSession) -> Result<String> {
        session.reset_history();
        if session.timezone().is_some() {
            self.greet(chat, session).await
        } else {
            self.send(chat, ONBOARDING, MarkupMode::Plain).await?;
            Ok(ONBOARDING.to_string())
        }
    }

    async fn help(&self, chat: &Chat, session: &mut ChatSession) -> Result<String> {
        session.ensure_history();
        self.reply_and_record(chat, session, escape_markdown_v2(HELP_TEXT), MarkupMode::MarkdownV2)
            .await
    }

    async fn quote(&self, chat: &Chat, session: &mut ChatSession) -> Result<String> {
        let quote = self
            .completion
            .complete(&[ChatMessage::user(QUOTE_PROMPT)])
            .await;
        self.reply_and_record(chat, session, escape_markdown_v2(&quote), MarkupMode::MarkdownV2)
            .await
    }

    async fn set_timezone(
        &self,
        chat: &Chat,
        session: &mut ChatSession,
        argument: &str,
    ) -> Result<String> {
        let timezone = match self.aliases.resolve(argument) {
            Ok(timezone) => timezone,
            Err(e) => {
                info!(chat_id = chat.id, argument = %argument, error = %e, "Rejected timezone");
                self.send(chat, SETTIMEZONE_USAGE, MarkupMode::Plain).await?;
                return Ok(SETTIMEZONE_USAGE.to_string());
            }
        };

        session.set_timezone(timezone);
        info!(chat_id = chat.id, timezone = %timezone, "Timezone set");
        let confirmation = timezone_confirmation(&timezone);
        self.send(chat, &confirmation, MarkupMode::Plain).await?;

        if session.has_history() {
            return self.greet(chat, session).await;
        }
        Ok(confirmation)
    }

    async fn handle_command(&self, message: &Message, command: OntaCommand) -> Result<String> {
        let chat = &message.chat;
        let mut session = self.sessions.lock(chat.id).await;
        debug!(chat_id = chat.id, command = ?command, "Handling command");
        match command {
            OntaCommand::Start => self.start(chat, &mut session).await,
            OntaCommand::Help => self.help(chat, &mut session).await,
            OntaCommand::Quote => self.quote(chat, &mut session).await,
            OntaCommand::SetTimezone(argument) => {
                self.set_timezone(chat, &mut session, &argument).await
            }
        }
    }

    async fn handle_text(&self, message: &Message) -> Result<String> {
        let chat = &message.chat;
        let mut session = self.sessions.lock(chat.id).await;
        if session.timezone().is_none() {
            self.send(chat, SET_TIMEZONE_FIRST, MarkupMode::Plain).await?;
            return Ok(SET_TIMEZONE_FIRST.to_string());
        }

        session.append(MessageRole::User, message.content.to_lowercase());
        let reply = self.completion.complete(session.history()).await;
        self.reply_and_record(chat, &mut session, escape_markdown_v2(&reply), MarkupMode::MarkdownV2)
            .await
    }
}

#[async_trait]
impl Handler for ConversationHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.content.trim();
        if text.is_empty() {
            return Err(HandlerError::NoText.into());
        }

        let reply = if message.is_command() {
            let username = self.bot_username.read().await.clone().unwrap_or_default();
            match parse_command(text, &username) {
                Some(command) => self.handle_command(message, command).await?,
                None => {
                    debug!(command = %text, "Ignoring unknown command");
                    return Ok(HandlerResponse::Ignore);
                }
            }
        } else {
            self.handle_text(message).await?
        };

        Ok(HandlerResponse::Reply(reply))
    }
}
