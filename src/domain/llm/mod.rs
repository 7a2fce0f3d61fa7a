//! Text-generation provider abstractions

mod chain;
mod provider;

pub use chain::ProviderChain;
pub use provider::TextProvider;

#[cfg(test)]
pub use provider::mock::MockTextProvider;
