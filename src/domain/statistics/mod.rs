//! Statistical engine for two-proportion experiments
//!
//! Pure functions for planning (sample size, duration, trade-off matrix) and
//! analysis (conversion metrics, per-segment comparison). Nothing here holds
//! state or performs I/O.

mod conversion;
mod design;
mod duration;
mod error;
mod normal;
mod sample_size;
mod segment;
mod tradeoff;

pub use conversion::{
    calculate_conversion_metrics, ConfidenceInterval, ConversionMetrics, Variant,
    SIGNIFICANCE_THRESHOLD,
};
pub use design::{EffectKind, TestDesignParameters};
pub use duration::calculate_test_duration;
pub use error::StatisticsError;
pub use normal::{normal_cdf, normal_quantile, two_tailed_p_value};
pub use sample_size::{calculate_sample_size, total_sample_size};
pub use segment::{analyze_segments, Segment, SegmentAnalysis};
pub use tradeoff::{default_effect_sweep, generate_tradeoff_matrix, TradeoffRow};

/// Round to a fixed number of decimal places
///
/// Rounds the exact binary value half to even, so `2.25` becomes `2.2` and
/// `0.03125` becomes `0.0312`.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123456, 4), 0.1235);
        assert_eq!(round_to(3.10159, 3), 3.102);
        assert_eq!(round_to(8.16, 1), 8.2);
        assert_eq!(round_to(-0.00004, 4), 0.0);
    }

    #[test]
    fn test_round_half_to_even() {
        assert_eq!(round_to(2.25, 1), 2.2);
        assert_eq!(round_to(2.35, 1), 2.4);
        assert_eq!(round_to(0.03125, 4), 0.0312);
    }
}
