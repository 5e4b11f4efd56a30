//! In-memory per-chat session state: timezone preference and rolling message history.
//!
//! Each chat's [`ChatSession`] sits behind its own async mutex. The conversation handler holds a
//! [`SessionGuard`] for a whole update (including the LLM call), so updates for one chat apply in
//! order while different chats run in parallel. Nothing is persisted.

use prompt::{ChatMessage, MessageRole};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::timezone::ChatTimezone;

/// Default cap on history length.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// State kept for one chat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSession {
    timezone: Option<ChatTimezone>,
    /// `None` until the chat opens a conversation (`/start`, `/help`, `/quote` or free text).
    history: Option<Vec<ChatMessage>>,
}

impl ChatSession {
    pub fn timezone(&self) -> Option<&ChatTimezone> {
        self.timezone.as_ref()
    }

    pub fn set_timezone(&mut self, timezone: ChatTimezone) {
        self.timezone = Some(timezone);
    }

    /// True once a conversation has been opened, even if the history is currently empty.
    pub fn has_history(&self) -> bool {
        self.history.is_some()
    }

    /// Messages oldest-first; empty when no conversation was opened.
    pub fn history(&self) -> &[ChatMessage] {
        self.history.as_deref().unwrap_or(&[])
    }

    /// Opens the conversation if needed and returns the history.
    pub fn ensure_history(&mut self) -> &mut Vec<ChatMessage> {
        self.history.get_or_insert_with(Vec::new)
    }

    /// Replaces the history with an empty one.
    pub fn reset_history(&mut self) {
        self.history = Some(Vec::new());
    }

    pub fn append(&mut self, role: MessageRole, content: impl Into<String>) {
        self.ensure_history().push(ChatMessage::new(role, content));
    }

    /// Drops the oldest messages so at most `max_len` remain.
    pub fn trim_history(&mut self, max_len: usize) {
        if let Some(history) = self.history.as_mut() {
            if history.len() > max_len {
                history.drain(..history.len() - max_len);
            }
        }
    }
}

/// Exclusive access to one chat's session; released on drop.
pub type SessionGuard = OwnedMutexGuard<ChatSession>;

/// Process-wide map of chat id to session.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<i64, Arc<Mutex<ChatSession>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn existing(&self, chat_id: i64) -> Option<Arc<Mutex<ChatSession>>> {
        self.sessions.read().await.get(&chat_id).cloned()
    }

    async fn entry(&self, chat_id: i64) -> Arc<Mutex<ChatSession>> {
        if let Some(session) = self.existing(chat_id).await {
            return session;
        }
        self.sessions
            .write()
            .await
            .entry(chat_id)
            .or_default()
            .clone()
    }

    /// Locks the chat's session, creating an empty one on first use. Waits while another update
    /// for the same chat holds it.
    pub async fn lock(&self, chat_id: i64) -> SessionGuard {
        self.entry(chat_id).await.lock_owned().await
    }

    /// Number of chats seen.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    pub async fn get_timezone(&self, chat_id: i64) -> Option<ChatTimezone> {
        let session = self.existing(chat_id).await?;
        let timezone = session.lock().await.timezone().copied();
        timezone
    }

    pub async fn set_timezone(&self, chat_id: i64, timezone: ChatTimezone) {
        self.lock(chat_id).await.set_timezone(timezone);
    }

    pub async fn has_history(&self, chat_id: i64) -> bool {
        let Some(session) = self.existing(chat_id).await else {
            return false;
        };
        let has_history = session.lock().await.has_history();
        has_history
    }

    /// Snapshot of the chat's history, opening an empty one if absent.
    pub async fn get_history(&self, chat_id: i64) -> Vec<ChatMessage> {
        self.lock(chat_id).await.ensure_history().clone()
    }

    pub async fn reset_history(&self, chat_id: i64) {
        self.lock(chat_id).await.reset_history();
    }

    pub async fn append_message(&self, chat_id: i64, role: MessageRole, content: impl Into<String>) {
        self.lock(chat_id).await.append(role, content);
    }

    pub async fn trim_history(&self, chat_id: i64, max_len: usize) {
        self.lock(chat_id).await.trim_history(max_len);
    }
}
