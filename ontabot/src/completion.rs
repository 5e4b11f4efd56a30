//! Chat completion with the bot persona and a fixed fallback on failure.

use llm_client::LlmClient;
use prompt::ChatMessage;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::replies::llm_fallback;

/// Wraps the [`LlmClient`]: prepends the persona line and never fails.
#[derive(Clone)]
pub struct CompletionService {
    llm: Arc<dyn LlmClient>,
    fallback: String,
}

impl CompletionService {
    pub fn new(llm: Arc<dyn LlmClient>, support_contact: &str) -> Self {
        Self {
            llm,
            fallback: llm_fallback(support_contact),
        }
    }

    /// Text returned when the model call fails.
    pub fn fallback_message(&self) -> &str {
        &self.fallback
    }

    /// Logs error and its cause chain. First item with `first_msg`, rest with "Caused by".
    fn log_error_chain(e: &anyhow::Error, first_msg: &str) {
        for (i, cause) in e.chain().enumerate() {
            if i == 0 {
                error!(cause = %cause, "{}", first_msg);
            } else {
                error!(cause = %cause, "Caused by");
            }
        }
    }

    /// Returns the model's reply to `history` (persona prepended), or the fallback text when the
    /// call errors or the model returns nothing.
    #[instrument(skip(self, history), fields(model = %self.llm.model(), history_len = history.len()))]
    pub async fn complete(&self, history: &[ChatMessage]) -> String {
        let messages = prompt::with_persona(history);
        match self.llm.chat_completion(messages).await {
            Ok(reply) if !reply.trim().is_empty() => {
                info!(reply_len = reply.chars().count(), "LLM reply received");
                reply
            }
            Ok(_) => {
                warn!("LLM returned an empty reply; sending fallback");
                self.fallback.clone()
            }
            Err(e) => {
                Self::log_error_chain(&e, "Failed to get LLM response");
                let err_str = e.to_string();
                if err_str.contains("401") || err_str.to_lowercase().contains("api key") {
                    error!("Hint: 401/API key errors usually mean GROQ_API_KEY is invalid or does not match OPENAI_BASE_URL; check .env");
                }
                self.fallback.clone()
            }
        }
    }
}
