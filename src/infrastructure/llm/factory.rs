use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::http_client::HttpClient;
use super::{AnthropicProvider, GeminiProvider};
use crate::config::LlmConfig;
use crate::domain::{DomainError, ProviderChain, TextProvider};

/// Factory for building the text-generation chain from configuration
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Build a chain containing every provider with a usable API key
    ///
    /// Registration order is Gemini, then Anthropic. Providers whose key is
    /// missing or still a `your_...` placeholder are left out. An empty chain
    /// is valid: generation then fails with `Unavailable`.
    pub fn create_chain(config: &LlmConfig) -> Result<ProviderChain, DomainError> {
        let http_client = HttpClient::with_timeout(Duration::from_secs(config.request_timeout_secs))?;
        let mut providers: Vec<Arc<dyn TextProvider>> = Vec::new();

        if let Some(api_key) = config.gemini.usable_api_key() {
            let provider = match config.gemini.base_url.as_deref() {
                Some(base_url) => GeminiProvider::with_base_url(
                    http_client.clone(),
                    api_key,
                    &config.gemini.model,
                    base_url,
                ),
                None => GeminiProvider::new(http_client.clone(), api_key, &config.gemini.model),
            };
            info!(model = %config.gemini.model, "Initialized Gemini provider");
            providers.push(Arc::new(provider));
        }

        if let Some(api_key) = config.anthropic.usable_api_key() {
            let provider = match config.anthropic.base_url.as_deref() {
                Some(base_url) => AnthropicProvider::with_base_url(
                    http_client.clone(),
                    api_key,
                    &config.anthropic.model,
                    base_url,
                ),
                None => {
                    AnthropicProvider::new(http_client.clone(), api_key, &config.anthropic.model)
                }
            };
            info!(model = %config.anthropic.model, "Initialized Anthropic provider");
            providers.push(Arc::new(provider));
        }

        let chain = ProviderChain::new(providers)
            .with_preferred(config.default_provider.clone())
            .with_fallback(config.fallback_enabled);

        if chain.is_empty() {
            warn!("No LLM providers configured; narrative features will use fallbacks");
        } else {
            info!(providers = ?chain.available_providers(), "Available LLM providers");
        }

        Ok(chain)
    }
}
