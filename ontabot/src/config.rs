//! Ontabot config: base Telegram config + LLM config + session settings. Loaded from env.

use anyhow::{bail, Context, Result};
use llm_client::EnvLlmConfig;
use std::env;
use telegram_bot::BaseConfig;

use crate::session::DEFAULT_HISTORY_LIMIT;

pub const DEFAULT_TIMEZONE_ALIASES_PATH: &str = "config/timezones.json";
pub const DEFAULT_SUPPORT_CONTACT: &str = "@ramidze";

/// Full application config. Use [`OntabotConfig::load`] then [`OntabotConfig::validate`].
#[derive(Debug, Clone)]
pub struct OntabotConfig {
    pub base: BaseConfig,
    pub llm: EnvLlmConfig,
    /// TIMEZONE_ALIASES_PATH: JSON object of alias → zone name
    pub timezone_aliases_path: String,
    /// HISTORY_LIMIT: max messages kept per chat
    pub history_limit: usize,
    /// SUPPORT_CONTACT: shown in the LLM failure message
    pub support_contact: String,
}

impl OntabotConfig {
    /// Loads from env. `token` overrides TELEGRAM_TOKEN. Fails if the Telegram token or the LLM
    /// API key is missing, or HISTORY_LIMIT is set but not a number.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let llm = EnvLlmConfig::from_env()?;
        let timezone_aliases_path = env::var("TIMEZONE_ALIASES_PATH")
            .unwrap_or_else(|_| DEFAULT_TIMEZONE_ALIASES_PATH.to_string());
        let history_limit = match env::var("HISTORY_LIMIT") {
            Ok(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("HISTORY_LIMIT must be a positive integer, got {:?}", raw)
            })?,
            Err(_) => DEFAULT_HISTORY_LIMIT,
        };
        let support_contact =
            env::var("SUPPORT_CONTACT").unwrap_or_else(|_| DEFAULT_SUPPORT_CONTACT.to_string());

        Ok(Self {
            base,
            llm,
            timezone_aliases_path,
            history_limit,
            support_contact,
        })
    }

    /// Checks config before any network or file access.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if self.history_limit == 0 {
            bail!("HISTORY_LIMIT must be at least 1");
        }
        Ok(())
    }
}
