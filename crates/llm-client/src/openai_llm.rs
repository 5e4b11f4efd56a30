//! OpenAI-compatible [`LlmClient`]: converts messages and delegates to openai-client.

use anyhow::Result;
use async_trait::async_trait;
use prompt::ChatMessage;
use tracing::instrument;

use super::{chat_message_to_openai, LlmClient, LlmConfig, DEFAULT_MODEL};

/// [`LlmClient`] backed by [`openai_client::OpenAIClient`].
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
}

impl OpenAILlmClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::new(api_key, base_url),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Builds a client from any [`LlmConfig`].
    pub fn from_config(config: &dyn LlmConfig) -> Self {
        Self::new(config.api_key().to_string(), config.base_url().to_string())
            .with_model(config.model().to_string())
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let openai_messages = messages
            .iter()
            .map(chat_message_to_openai)
            .collect::<Result<Vec<_>>>()?;
        self.client.chat_completion(&self.model, openai_messages).await
    }
}
