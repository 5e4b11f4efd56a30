//! # Telegram bot framework
//!
//! Transport layer the application builds on: core types (`Message`, `Chat`, `User`, `MarkupMode`),
//! the [`Bot`] and [`Handler`] traits, [`HandlerChain`], a teloxide-backed [`TelegramBotAdapter`],
//! the REPL runner, tracing setup, base config and CLI.

pub mod chain;
pub mod cli;
pub mod config;
pub mod core;
pub mod handlers;
pub mod telegram;

pub use cli::{Cli, Commands};

pub use core::{
    init_tracing, BotError, Bot, Chat, Handler, HandlerError, HandlerResponse, MarkupMode,
    Message, Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use telegram::{
    process_update, run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper,
};

pub use config::BaseConfig;
pub use handlers::LoggingHandler;
