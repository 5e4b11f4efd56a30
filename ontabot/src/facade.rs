//! Process entry: validate config, set up logging and collaborators, run the polling loop.

use anyhow::{Context, Result};
use llm_client::{LlmClient, OpenAILlmClient};
use std::sync::Arc;
use telegram_bot::{init_tracing, run_repl, Bot, TelegramBotAdapter};
use teloxide::prelude::Requester;
use teloxide::utils::command::BotCommands;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::assembly::{build_handler_chain, BotComponents};
use crate::command::OntaCommand;
use crate::config::OntabotConfig;
use crate::session::SessionStore;
use crate::timezone::TimezoneAliases;

/// Runs Ontabot until the polling loop exits. Fails before polling on invalid config or an
/// unreadable alias table.
pub async fn run_bot(config: OntabotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.base.log_file)?;

    info!(
        model = %config.llm.model,
        base_url = %config.llm.base_url,
        history_limit = config.history_limit,
        "Starting Ontabot"
    );

    let aliases = TimezoneAliases::load(&config.timezone_aliases_path).with_context(|| {
        format!(
            "Failed to load timezone aliases from {}",
            config.timezone_aliases_path
        )
    })?;

    let teloxide_bot = config.base.teloxide_bot()?;
    if let Err(e) = teloxide_bot
        .set_my_commands(OntaCommand::bot_commands())
        .await
    {
        warn!(error = %e, "Failed to register command menu");
    }

    let bot_username = Arc::new(RwLock::new(None));
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let llm: Arc<dyn LlmClient> = Arc::new(OpenAILlmClient::from_config(&config.llm));

    let chain = build_handler_chain(
        &config,
        BotComponents {
            bot,
            llm,
            sessions: Arc::new(SessionStore::new()),
            aliases: Arc::new(aliases),
            bot_username: bot_username.clone(),
        },
    );

    run_repl(teloxide_bot, chain, bot_username).await
}
