//! Text-generation provider implementations

mod anthropic;
mod factory;
mod gemini;
mod http_client;

pub use anthropic::AnthropicProvider;
pub use factory::LlmProviderFactory;
pub use gemini::GeminiProvider;
pub use http_client::{HttpClient, HttpClientTrait};
