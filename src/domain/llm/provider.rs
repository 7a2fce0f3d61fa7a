use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for text-generation providers (Gemini, Anthropic, etc.)
#[async_trait]
pub trait TextProvider: Send + Sync + Debug {
    /// Generate a completion for a single user prompt
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;

    /// Whether the provider is configured and may be called
    fn is_available(&self) -> bool;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Model used for generation
    fn model_name(&self) -> &str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    pub struct MockTextProvider {
        name: &'static str,
        available: bool,
        response: Option<String>,
        error: Option<String>,
        calls: AtomicUsize,
    }

    impl MockTextProvider {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                available: true,
                response: None,
                error: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn with_response(mut self, response: impl Into<String>) -> Self {
            self.response = Some(response.into());
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        pub fn unavailable(mut self) -> Self {
            self.available = false;
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextProvider for MockTextProvider {
        async fn generate(&self, _prompt: &str) -> Result<String, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(ref error) = self.error {
                return Err(DomainError::provider(self.name, error));
            }

            self.response
                .clone()
                .ok_or_else(|| DomainError::provider(self.name, "No mock response configured"))
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn provider_name(&self) -> &'static str {
            self.name
        }

        fn model_name(&self) -> &str {
            "mock-model"
        }
    }
}
