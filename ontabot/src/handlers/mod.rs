mod conversation;

pub use conversation::ConversationHandler;
