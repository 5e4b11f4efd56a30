//! Wires handlers into a [`HandlerChain`].

use llm_client::LlmClient;
use std::sync::Arc;
use telegram_bot::{Bot, HandlerChain, LoggingHandler};
use tokio::sync::RwLock;

use crate::completion::CompletionService;
use crate::config::OntabotConfig;
use crate::handlers::ConversationHandler;
use crate::session::SessionStore;
use crate::timezone::TimezoneAliases;

/// Everything the handlers share besides config.
pub struct BotComponents {
    pub bot: Arc<dyn Bot>,
    pub llm: Arc<dyn LlmClient>,
    pub sessions: Arc<SessionStore>,
    pub aliases: Arc<TimezoneAliases>,
    pub bot_username: Arc<RwLock<Option<String>>>,
}

/// Chain order: logging, then conversation.
pub fn build_handler_chain(config: &OntabotConfig, components: BotComponents) -> HandlerChain {
    let completion = CompletionService::new(components.llm, &config.support_contact);
    let conversation = ConversationHandler::new(
        components.bot,
        completion,
        components.sessions,
        components.aliases,
    )
    .with_bot_username(components.bot_username)
    .with_history_limit(config.history_limit);

    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(conversation))
}
