//! Ordered provider selection with fallback

use std::sync::Arc;

use tracing::{debug, warn};

use super::TextProvider;
use crate::domain::DomainError;

/// Text-generation strategy over an ordered list of providers
///
/// The preferred provider is tried first. With fallback enabled, the
/// remaining available providers follow in registration order. Providers that
/// report themselves unavailable at call time are skipped.
#[derive(Debug, Clone)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn TextProvider>>,
    preferred: Option<String>,
    fallback_enabled: bool,
}

impl ProviderChain {
    pub fn new(providers: Vec<Arc<dyn TextProvider>>) -> Self {
        Self {
            providers,
            preferred: None,
            fallback_enabled: true,
        }
    }

    pub fn with_preferred(mut self, name: impl Into<String>) -> Self {
        self.preferred = Some(name.into());
        self
    }

    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback_enabled = enabled;
        self
    }

    pub fn preferred(&self) -> Option<&str> {
        self.preferred.as_deref()
    }

    pub fn fallback_enabled(&self) -> bool {
        self.fallback_enabled
    }

    /// Number of registered providers, available or not
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn providers(&self) -> &[Arc<dyn TextProvider>] {
        &self.providers
    }

    /// Names of providers that are currently available, in registration order
    pub fn available_providers(&self) -> Vec<&'static str> {
        self.providers
            .iter()
            .filter(|p| p.is_available())
            .map(|p| p.provider_name())
            .collect()
    }

    /// Providers in the order `generate` will try them
    pub fn attempt_order(&self) -> Vec<Arc<dyn TextProvider>> {
        let mut order: Vec<Arc<dyn TextProvider>> = Vec::new();

        if let Some(preferred) = self.preferred.as_deref() {
            if let Some(provider) = self
                .providers
                .iter()
                .find(|p| p.provider_name() == preferred)
            {
                order.push(Arc::clone(provider));
            }
        }

        if self.fallback_enabled {
            for provider in &self.providers {
                let already_listed = order
                    .iter()
                    .any(|p| p.provider_name() == provider.provider_name());

                if provider.is_available() && !already_listed {
                    order.push(Arc::clone(provider));
                }
            }
        }

        order
    }

    /// Generate text with the first provider that succeeds
    ///
    /// # Errors
    /// * `Unavailable` if no provider could be attempted
    /// * The last provider error if every attempt failed
    pub async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        let order = self.attempt_order();

        debug!(
            providers = ?order.iter().map(|p| p.provider_name()).collect::<Vec<_>>(),
            "Resolved provider attempt order"
        );

        let mut last_error = None;

        for provider in order {
            if !provider.is_available() {
                debug!(provider = provider.provider_name(), "Skipping unavailable provider");
                continue;
            }

            match provider.generate(prompt).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    warn!(
                        provider = provider.provider_name(),
                        error = %e,
                        "Provider failed, trying next"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| DomainError::unavailable("No LLM providers are available")))
    }
}
