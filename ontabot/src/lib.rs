//! # Ontabot
//!
//! Telegram AI assistant: per-chat timezone, time-of-day greetings, motivational quotes and a
//! rolling conversation history answered by an OpenAI-compatible model (Groq by default).

pub mod assembly;
pub mod command;
pub mod completion;
pub mod config;
pub mod facade;
pub mod greeting;
pub mod handlers;
pub mod markdown;
pub mod replies;
pub mod session;
pub mod timezone;

pub use assembly::{build_handler_chain, BotComponents};
pub use command::{parse_command, OntaCommand};
pub use completion::CompletionService;
pub use config::OntabotConfig;
pub use facade::run_bot;
pub use greeting::GreetingBand;
pub use handlers::ConversationHandler;
pub use markdown::escape_markdown_v2;
pub use session::{ChatSession, SessionStore, DEFAULT_HISTORY_LIMIT};
pub use timezone::{AliasTableError, ChatTimezone, TimezoneAliases, TimezoneError};
