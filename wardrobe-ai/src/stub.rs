use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::traits::{ChatMessage, ModelProvider};

/// A provider that always returns the same canned reply. Used in tests
/// and development setups where no API key is available.
pub struct StaticProvider {
    reply: String,
    calls: AtomicUsize,
}

impl StaticProvider {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many chat calls this provider has served.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn chat(&self, _messages: Vec<ChatMessage>, _temperature: f32) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

/// A provider whose calls always fail.
pub struct FailingProvider;

#[async_trait]
impl ModelProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn chat(&self, _messages: Vec<ChatMessage>, _temperature: f32) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("model backend unavailable"))
    }
}
