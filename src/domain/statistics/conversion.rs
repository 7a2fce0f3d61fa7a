//! Conversion rates, lift and the two-proportion z-test

use serde::{Deserialize, Serialize};

use super::error::StatisticsError;
use super::normal::two_tailed_p_value;
use super::round_to;

/// Fixed threshold behind `ConversionMetrics::is_significant`.
///
/// Independent of the significance level a test was planned with.
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.05;

/// z multiplier for the 95% confidence interval
const CI_Z_95: f64 = 1.96;

const RATE_PLACES: usize = 4;
const Z_SCORE_PLACES: usize = 3;

// ============================================================================
// Variant
// ============================================================================

/// Raw counts observed for one arm of an experiment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    name: String,
    users: u64,
    conversions: u64,
}

impl Variant {
    /// Create a variant, rejecting more conversions than users
    pub fn new(
        name: impl Into<String>,
        users: u64,
        conversions: u64,
    ) -> Result<Self, StatisticsError> {
        let name = name.into();

        if conversions > users {
            return Err(StatisticsError::ConversionsExceedUsers {
                variant: name,
                users,
                conversions,
            });
        }

        Ok(Self {
            name,
            users,
            conversions,
        })
    }

    pub fn users(&self) -> u64 {
        self.users
    }

    pub fn conversions(&self) -> u64 {
        self.conversions
    }

    /// Conversion rate, or 0 for a variant without traffic
    pub fn conversion_rate(&self) -> f64 {
        rate(self.conversions, self.users)
    }
}

// ============================================================================
// ConversionMetrics
// ============================================================================

/// Interval on the absolute difference between treatment and control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    fn point(value: f64) -> Self {
        Self {
            lower: value,
            upper: value,
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Comparison of a treatment against a control, rounded for presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionMetrics {
    pub control_conversion_rate: f64,
    pub treatment_conversion_rate: f64,
    pub absolute_lift: f64,
    pub relative_lift: f64,
    pub z_score: f64,
    pub p_value: f64,
    pub is_significant: bool,
    pub confidence_interval: ConfidenceInterval,
}

impl ConversionMetrics {
    /// Compare two variants, the first being the control
    pub fn compare(control: &Variant, treatment: &Variant) -> Self {
        calculate_conversion_metrics(
            control.users,
            control.conversions,
            treatment.users,
            treatment.conversions,
        )
    }
}

/// Calculate conversion rates, lift and significance from raw counts
///
/// Counts are expected to satisfy `conversions <= users`; use [`Variant::new`]
/// to enforce that. A variant with zero users has rate 0. When either side has
/// no users, or the pooled variance is zero, the test reports `z = 0`,
/// `p = 1` and a zero-width interval at the absolute lift.
pub fn calculate_conversion_metrics(
    control_users: u64,
    control_conversions: u64,
    treatment_users: u64,
    treatment_conversions: u64,
) -> ConversionMetrics {
    let control_rate = rate(control_conversions, control_users);
    let treatment_rate = rate(treatment_conversions, treatment_users);

    let absolute_lift = treatment_rate - control_rate;
    let relative_lift = if control_rate > 0.0 {
        absolute_lift / control_rate
    } else {
        0.0
    };

    let mut z_score = 0.0;
    let mut p_value = 1.0;
    let mut interval = ConfidenceInterval::point(absolute_lift);

    if control_users > 0 && treatment_users > 0 {
        let n_c = control_users as f64;
        let n_t = treatment_users as f64;

        let pooled = (control_conversions + treatment_conversions) as f64 / (n_c + n_t);
        let pooled_se = (pooled * (1.0 - pooled) * (1.0 / n_c + 1.0 / n_t)).sqrt();

        if pooled_se > 0.0 {
            z_score = absolute_lift / pooled_se;
            p_value = two_tailed_p_value(z_score);

            let diff_se = (control_rate * (1.0 - control_rate) / n_c
                + treatment_rate * (1.0 - treatment_rate) / n_t)
                .sqrt();
            let margin = CI_Z_95 * diff_se;

            interval = ConfidenceInterval {
                lower: absolute_lift - margin,
                upper: absolute_lift + margin,
            };
        }
    }

    ConversionMetrics {
        control_conversion_rate: round_to(control_rate, RATE_PLACES),
        treatment_conversion_rate: round_to(treatment_rate, RATE_PLACES),
        absolute_lift: round_to(absolute_lift, RATE_PLACES),
        relative_lift: round_to(relative_lift, RATE_PLACES),
        z_score: round_to(z_score, Z_SCORE_PLACES),
        p_value: round_to(p_value, RATE_PLACES),
        is_significant: p_value < SIGNIFICANCE_THRESHOLD,
        confidence_interval: ConfidenceInterval {
            lower: round_to(interval.lower, RATE_PLACES),
            upper: round_to(interval.upper, RATE_PLACES),
        },
    }
}

fn rate(conversions: u64, users: u64) -> f64 {
    if users > 0 {
        conversions as f64 / users as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_conversion_calculation() {
        let metrics = calculate_conversion_metrics(1000, 50, 1000, 60);

        assert_eq!(metrics.control_conversion_rate, 0.05);
        assert_eq!(metrics.treatment_conversion_rate, 0.06);
        assert_eq!(metrics.absolute_lift, 0.01);
        assert!((metrics.relative_lift - 0.2).abs() < 0.01);
        assert!(!metrics.is_significant);
        assert!(metrics.confidence_interval.contains(0.0));
    }

    #[test]
    fn test_no_conversions() {
        let metrics = calculate_conversion_metrics(1000, 0, 1000, 0);

        assert_eq!(metrics.control_conversion_rate, 0.0);
        assert_eq!(metrics.treatment_conversion_rate, 0.0);
        assert_eq!(metrics.absolute_lift, 0.0);
        assert_eq!(metrics.relative_lift, 0.0);
        assert_eq!(metrics.z_score, 0.0);
        assert_eq!(metrics.p_value, 1.0);
        assert!(!metrics.is_significant);
        assert_eq!(metrics.confidence_interval.width(), 0.0);
    }

    #[test]
    fn test_all_converted_is_degenerate() {
        let metrics = calculate_conversion_metrics(200, 200, 300, 300);

        assert_eq!(metrics.control_conversion_rate, 1.0);
        assert_eq!(metrics.z_score, 0.0);
        assert_eq!(metrics.p_value, 1.0);
        assert!(!metrics.is_significant);
    }

    #[test]
    fn test_statistical_significance() {
        let metrics = calculate_conversion_metrics(10000, 500, 10000, 600);

        assert!(metrics.p_value < 0.05);
        assert!(metrics.is_significant);
        // z ≈ 0.01 / 0.003224
        assert!((metrics.z_score - 3.102).abs() < 0.002);
        assert!(metrics.confidence_interval.lower > 0.0);
        assert!(metrics.confidence_interval.upper > metrics.absolute_lift);
    }

    #[test]
    fn test_negative_lift() {
        let metrics = calculate_conversion_metrics(10000, 600, 10000, 500);

        assert_eq!(metrics.absolute_lift, -0.01);
        assert!(metrics.z_score < 0.0);
        assert!(metrics.is_significant);
        assert!(metrics.confidence_interval.upper < 0.0);
    }

    #[test]
    fn test_zero_traffic_variant() {
        let metrics = calculate_conversion_metrics(0, 0, 500, 50);

        assert_eq!(metrics.control_conversion_rate, 0.0);
        assert_eq!(metrics.treatment_conversion_rate, 0.1);
        assert_eq!(metrics.relative_lift, 0.0);
        assert_eq!(metrics.p_value, 1.0);
        assert_eq!(metrics.confidence_interval.lower, 0.1);
        assert_eq!(metrics.confidence_interval.upper, 0.1);
    }

    #[test]
    fn test_rounding_precision() {
        let metrics = calculate_conversion_metrics(3, 1, 7, 3);

        assert_eq!(metrics.control_conversion_rate, 0.3333);
        assert_eq!(metrics.treatment_conversion_rate, 0.4286);
        assert_eq!(metrics.absolute_lift, 0.0952);
        assert_eq!(metrics.relative_lift, 0.2857);
        assert_eq!(metrics.z_score, 0.282);
    }

    #[test]
    fn test_exact_half_rounds_to_even() {
        // 1/32 = 0.03125 and 3/64 = 0.046875 are exact in binary
        let metrics = calculate_conversion_metrics(32, 1, 64, 3);

        assert_eq!(metrics.control_conversion_rate, 0.0312);
        assert_eq!(metrics.treatment_conversion_rate, 0.0469);
    }

    #[test]
    fn test_compare_variants() {
        let control = Variant::new("control", 1000, 50).unwrap();
        let treatment = Variant::new("treatment", 1000, 60).unwrap();

        assert_eq!(
            ConversionMetrics::compare(&control, &treatment),
            calculate_conversion_metrics(1000, 50, 1000, 60)
        );
    }

    #[test]
    fn test_variant_rejects_excess_conversions() {
        let result = Variant::new("broken", 10, 11);

        assert!(matches!(
            result,
            Err(StatisticsError::ConversionsExceedUsers { users: 10, conversions: 11, .. })
        ));
    }

    #[test]
    fn test_variant_rate() {
        assert_eq!(Variant::new("a", 0, 0).unwrap().conversion_rate(), 0.0);
        assert_eq!(Variant::new("b", 4, 1).unwrap().conversion_rate(), 0.25);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        assert_eq!(
            calculate_conversion_metrics(4321, 123, 4100, 150),
            calculate_conversion_metrics(4321, 123, 4100, 150)
        );
    }
}
