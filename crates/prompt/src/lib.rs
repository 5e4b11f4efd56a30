//! # Prompt
//!
//! Role-tagged chat messages and the fixed prompt texts the bot sends to the model.
//!
//! ## Usage
//!
//! [`ChatMessage`] is the unit of a chat's rolling history and of every chat-completion
//! request. [`with_persona`] builds the request list: the persona line first, then the
//! history in conversation order.
//!
//! ## External interactions
//!
//! - **AI models**: messages are converted to OpenAI-compatible `messages` entries by `llm-client`.

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

impl MessageRole {
    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Persona line placed in front of every request. Sent with the assistant role so the
/// model speaks as the bot from the first turn.
pub const PERSONA_MESSAGE: &str = "I'm Ontabot, also known as Onta, a Telegram Bot AI Asisstant.";

/// Prompt for `/quote`. The model is asked for MarkdownV2 blockquote lines; the reply is
/// escaped before sending, so only the layout (not the markup) survives.
pub const QUOTE_PROMPT: &str = "Give me a random quote in MarkdownV2 format. Make sure to use '>' at the beginning of each quote line without spaces between '>' and the quote text.\
The quote text should also not use \". Do not include any additional text of preface, only the quote in the folowing format:\n\
>Quote text\n\
- Author\n\n\
Quote explanation\n\n";

/// Builds the greeting instruction for a time-of-day label such as `morning`.
pub fn greeting_prompt(label: &str) -> String {
    format!("Give a friendly {} greeting", label)
}

/// Returns the persona message followed by `history` in order.
pub fn with_persona<'a, I>(history: I) -> Vec<ChatMessage>
where
    I: IntoIterator<Item = &'a ChatMessage>,
{
    let mut messages = vec![ChatMessage::assistant(PERSONA_MESSAGE)];
    messages.extend(history.into_iter().cloned());
    messages
}
