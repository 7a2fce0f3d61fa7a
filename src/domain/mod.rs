//! Domain layer - statistics engine, text generation abstractions, insights

pub mod error;
pub mod insight;
pub mod llm;
pub mod statistics;

pub use error::DomainError;
pub use llm::{ProviderChain, TextProvider};
pub use statistics::{
    ConversionMetrics, EffectKind, Segment, SegmentAnalysis, StatisticsError,
    TestDesignParameters, TradeoffRow, Variant,
};
