use reqwest::Client;
use serde_json::json;

use async_trait::async_trait;

use crate::models::ProviderConfig;
use crate::traits::{ChatMessage, ModelProvider};

/// OpenAI chat-completions provider
pub struct OpenAiProvider {
    config: ProviderConfig,
    client: Client,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider with the given configuration
    pub fn new(config: ProviderConfig) -> Self {
        let client = Client::new();
        Self { config, client }
    }

    fn api_base(&self) -> String {
        self.config
            .api_base
            .clone()
            .unwrap_or_else(|| "https://api.openai.com/v1".to_string())
    }
}

#[async_trait]
impl ModelProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn chat(&self, messages: Vec<ChatMessage>, temperature: f32) -> anyhow::Result<String> {
        let api_base = self.api_base();

        let formatted_messages: Vec<serde_json::Value> = messages
            .iter()
            .map(|msg| {
                json!({
                    "role": msg.role,
                    "content": msg.content
                })
            })
            .collect();

        let request_payload = json!({
            "model": self.config.default_model,
            "messages": formatted_messages,
            "temperature": temperature,
        });

        tracing::debug!("Making API call to {}/chat/completions", api_base);

        let response = self
            .client
            .post(format!("{}/chat/completions", api_base))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request_payload)
            .send()
            .await?;

        // Get the raw response text first for better error handling
        let response_text = response.text().await?;
        tracing::debug!("Raw API response: {}", response_text);

        let data = match serde_json::from_str::<serde_json::Value>(&response_text) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to parse API response as JSON: {:?}", e);
                return Err(anyhow::anyhow!("API returned non-JSON response: {}", e));
            }
        };

        if let Some(error) = data.get("error") {
            tracing::error!("API returned error: {:?}", error);
            let error_message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error");
            return Err(anyhow::anyhow!("API error: {}", error_message));
        }

        let choices = match data.get("choices").and_then(|c| c.as_array()) {
            Some(choices) => choices,
            None => {
                tracing::error!("Response missing 'choices' array: {:?}", data);
                return Err(anyhow::anyhow!("Response missing 'choices' array"));
            }
        };

        if choices.is_empty() {
            return Err(anyhow::anyhow!("No completions returned"));
        }

        let message = choices[0]
            .get("message")
            .ok_or_else(|| anyhow::anyhow!("Response choice missing 'message'"))?;

        let content = message
            .get("content")
            .and_then(|c| c.as_str())
            .ok_or_else(|| anyhow::anyhow!("Response message missing 'content'"))?
            .to_string();

        Ok(content)
    }
}
