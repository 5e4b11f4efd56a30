//! Handler trait and transport conversion traits.

use async_trait::async_trait;

use super::{message::Message, response::HandlerResponse, user::User};
use crate::core::error::Result;

/// Builds a core [`User`] from a transport user.
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Builds a core [`Message`] from a transport update.
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// One step of a [`crate::HandlerChain`]. Every hook has a pass-through default, so a handler
/// overrides only the phases it cares about.
#[async_trait]
pub trait Handler: Send + Sync {
    /// `false` vetoes the update; the chain returns Stop without handling it.
    async fn before(&self, _message: &Message) -> Result<bool> {
        Ok(true)
    }

    /// Stop or Reply ends the handle phase; Continue and Ignore pass to the next handler.
    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }

    /// Sees the final response. Called in reverse chain order.
    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> Result<()> {
        Ok(())
    }
}
