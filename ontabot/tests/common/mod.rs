//! Test doubles shared by ontabot integration tests: a recording [`Bot`], a scripted
//! [`LlmClient`] and message builders. No Telegram or LLM network calls.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use llm_client::LlmClient;
use ontabot::{CompletionService, ConversationHandler, SessionStore, TimezoneAliases};
use prompt::ChatMessage;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use telegram_bot::{Bot, BotError, Chat, MarkupMode, Message, Result, User};
use tokio::sync::RwLock;

pub const BOT_USERNAME: &str = "ontabot";
pub const SUPPORT_CONTACT: &str = "@ramidze";

/// One recorded `send_message` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
    pub mode: MarkupMode,
}

/// Bot that records every sent message; optionally fails every send.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentMessage>>,
    fail: bool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, chat_id: i64) -> Vec<SentMessage> {
        self.sent()
            .into_iter()
            .filter(|m| m.chat_id == chat_id)
            .collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str, mode: MarkupMode) -> Result<()> {
        if self.fail {
            return Err(BotError::Bot("network unreachable".to_string()));
        }
        self.sent.lock().unwrap().push(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
            mode,
        });
        Ok(())
    }
}

/// How [`MockLlm`] answers.
pub enum LlmBehavior {
    /// Always the same text.
    Fixed(String),
    /// `echo <content of the last message>`.
    Echo,
    /// Always an error.
    Fail,
}

/// LLM client that records each request and answers per [`LlmBehavior`].
pub struct MockLlm {
    behavior: LlmBehavior,
    delay: Option<Duration>,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockLlm {
    pub fn new(behavior: LlmBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            delay: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn fixed(reply: &str) -> Arc<Self> {
        Self::new(LlmBehavior::Fixed(reply.to_string()))
    }

    /// Echoes after `delay`, so concurrent callers overlap.
    pub fn slow_echo(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            behavior: LlmBehavior::Echo,
            delay: Some(delay),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    fn model(&self) -> &str {
        "mock-model"
    }

    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> anyhow::Result<String> {
        let last = messages.last().map(|m| m.content.clone()).unwrap_or_default();
        self.requests.lock().unwrap().push(messages);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.behavior {
            LlmBehavior::Fixed(reply) => Ok(reply.clone()),
            LlmBehavior::Echo => Ok(format!("echo {}", last)),
            LlmBehavior::Fail => Err(anyhow::anyhow!("status 500: upstream unavailable")),
        }
    }
}

pub fn test_aliases() -> TimezoneAliases {
    TimezoneAliases::from_json(
        r#"{"jakarta": "Asia/Jakarta", "wib": "Asia/Jakarta", "tokyo": "Asia/Tokyo"}"#,
    )
    .unwrap()
}

/// Handler under test plus its collaborators.
pub struct Harness {
    pub handler: Arc<ConversationHandler>,
    pub bot: Arc<MockBot>,
    pub llm: Arc<MockLlm>,
    pub sessions: Arc<SessionStore>,
}

pub fn harness(llm: Arc<MockLlm>) -> Harness {
    harness_with(MockBot::new(), llm, 20)
}

pub fn harness_with(bot: Arc<MockBot>, llm: Arc<MockLlm>, history_limit: usize) -> Harness {
    let sessions = Arc::new(SessionStore::new());
    let completion = CompletionService::new(llm.clone(), SUPPORT_CONTACT);
    let handler = ConversationHandler::new(
        bot.clone(),
        completion,
        sessions.clone(),
        Arc::new(test_aliases()),
    )
    .with_bot_username(Arc::new(RwLock::new(Some(BOT_USERNAME.to_string()))))
    .with_history_limit(history_limit);

    Harness {
        handler: Arc::new(handler),
        bot,
        llm,
        sessions,
    }
}

pub fn text_message(chat_id: i64, content: &str) -> Message {
    Message {
        id: format!("{}-{}", chat_id, content.len()),
        user: User {
            id: chat_id,
            username: Some("tester".to_string()),
            first_name: Some("Tester".to_string()),
        },
        chat: Chat::private(chat_id),
        content: content.to_string(),
        created_at: Utc::now(),
    }
}
