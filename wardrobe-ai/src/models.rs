use serde::{Deserialize, Serialize};

/// Configuration for a chat-completion provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL for API requests; provider-specific default when absent
    pub api_base: Option<String>,

    /// API key for authentication
    pub api_key: String,

    /// Model to request completions from
    pub default_model: String,
}
