//! Core types: user, chat, message, markup mode, handler response, and Handler trait.

mod chat;
mod handler;
mod markup;
mod message;
mod response;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use markup::MarkupMode;
pub use message::Message;
pub use response::HandlerResponse;
pub use user::User;
