//! Configuration loaded from `config/*.toml` files and `APP__*` environment variables

mod app_config;

pub use app_config::{AppConfig, LlmConfig, LogFormat, LoggingConfig, ProviderSettings, ServerConfig};
