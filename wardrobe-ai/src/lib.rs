pub mod models;
pub mod provider;
pub mod stub;
pub mod traits;

// Re-export public APIs
pub use models::ProviderConfig;
pub use provider::OpenAiProvider;
pub use stub::{FailingProvider, StaticProvider};
pub use traits::{ChatMessage, ModelProvider};
