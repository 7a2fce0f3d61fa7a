//! A/B Test Advisor
//!
//! Statistical planning and analysis of conversion-rate experiments:
//! - Sample size, duration and effect-size trade-offs for a proposed test
//! - Two-proportion significance testing, overall and per segment
//! - Narrative interpretation through Gemini or Anthropic with fallback

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
