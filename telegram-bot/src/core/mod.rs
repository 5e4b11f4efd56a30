//! Core types and traits: Handler, Bot, Message, HandlerResponse, MarkupMode, error, logger.
//! Transport-agnostic.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, MarkupMode, Message, ToCoreMessage, ToCoreUser, User,
};
