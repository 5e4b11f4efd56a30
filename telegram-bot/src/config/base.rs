//! Base config: Telegram Bot connection and logging. Loaded from env.

use anyhow::{bail, Result};
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/ontabot.log";

/// Base config: Telegram-related and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// TELEGRAM_TOKEN (or BOT_TOKEN)
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides TELEGRAM_TOKEN if provided.
    /// Fails when no token is available from either source.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token.filter(|t| !t.trim().is_empty()) {
            Some(t) => t,
            None => match env::var("TELEGRAM_TOKEN").or_else(|_| env::var("BOT_TOKEN")) {
                Ok(t) if !t.trim().is_empty() => t,
                _ => bail!("TELEGRAM_TOKEN environment variable not set"),
            },
        };
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Validate config (telegram_api_url must be a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Builds the teloxide bot, pointed at `telegram_api_url` when set. Call `validate` first.
    pub fn teloxide_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(&self.bot_token);
        match self.telegram_api_url {
            Some(ref url) => Ok(bot.set_api_url(reqwest::Url::parse(url)?)),
            None => Ok(bot),
        }
    }
}
