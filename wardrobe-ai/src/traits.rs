use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single message in a chat completion exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A text-generation backend.
///
/// Providers report failures through `anyhow`; callers decide how a
/// failed completion maps into their own error taxonomy.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Provider name, e.g. "openai"
    fn name(&self) -> &str;

    /// Chat completion at the given sampling temperature, returning the
    /// assistant's raw reply text.
    async fn chat(&self, messages: Vec<ChatMessage>, temperature: f32) -> anyhow::Result<String>;
}
