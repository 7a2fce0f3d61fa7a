//! Required sample size per variant for a two-proportion test

use super::design::TestDesignParameters;
use super::error::StatisticsError;
use super::normal::normal_quantile;

/// Calculate the required sample size per variant
///
/// Uses the pooled-proportion effect size `|p2 - p1| / sqrt(p̄(1 - p̄))` and
/// `n = ((z_(1-α/2) + z_power) / d)²`, rounded up. The target rate is clamped
/// into `[0, 1]` before the effect size is computed.
///
/// # Errors
/// * `InvalidParameter` if a rate or probability is outside its domain
/// * `UndefinedEffectSize` if baseline and target rate coincide after clamping
/// * `SampleSizeOverflow` if the effect is too small for the result to fit a `u64`
pub fn calculate_sample_size(design: &TestDesignParameters) -> Result<u64, StatisticsError> {
    let p1 = design.baseline_conversion_rate;
    validate_inputs(design)?;

    let p2 = design.effect_kind.target_rate(p1, design.effect).clamp(0.0, 1.0);

    let pooled = (p1 + p2) / 2.0;
    let spread = (pooled * (1.0 - pooled)).sqrt();
    let difference = (p2 - p1).abs();

    if difference == 0.0 || spread == 0.0 {
        return Err(StatisticsError::UndefinedEffectSize { rate: p1 });
    }

    let effect_size = difference / spread;

    let z_alpha = normal_quantile(1.0 - design.significance_level / 2.0);
    let z_beta = normal_quantile(design.statistical_power);

    let n = ((z_alpha + z_beta) / effect_size).powi(2).ceil();

    // u64::MAX as f64 rounds up to 2^64, which no u64 can hold
    if !n.is_finite() || n >= u64::MAX as f64 {
        return Err(StatisticsError::SampleSizeOverflow { required: n });
    }

    Ok((n as u64).max(1))
}

/// Total sample size across all variants
pub fn total_sample_size(
    sample_size_per_variant: u64,
    num_variants: u32,
) -> Result<u64, StatisticsError> {
    sample_size_per_variant
        .checked_mul(u64::from(num_variants))
        .ok_or(StatisticsError::SampleSizeOverflow {
            required: sample_size_per_variant as f64 * f64::from(num_variants),
        })
}

fn validate_inputs(design: &TestDesignParameters) -> Result<(), StatisticsError> {
    let baseline = design.baseline_conversion_rate;

    if !baseline.is_finite() || !(0.0..=1.0).contains(&baseline) {
        return Err(StatisticsError::invalid_parameter(
            "baseline_conversion_rate",
            baseline,
        ));
    }

    if !design.effect.is_finite() {
        return Err(StatisticsError::invalid_parameter("effect", design.effect));
    }

    if !is_open_probability(design.statistical_power) {
        return Err(StatisticsError::invalid_parameter(
            "statistical_power",
            design.statistical_power,
        ));
    }

    if !is_open_probability(design.significance_level) {
        return Err(StatisticsError::invalid_parameter(
            "significance_level",
            design.significance_level,
        ));
    }

    Ok(())
}

fn is_open_probability(p: f64) -> bool {
    p.is_finite() && p > 0.0 && p < 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::statistics::EffectKind;

    fn relative(baseline: f64, effect: f64) -> TestDesignParameters {
        TestDesignParameters::new(baseline, effect, EffectKind::Relative)
    }

    #[test]
    fn test_relative_effect() {
        let n = calculate_sample_size(&relative(0.05, 0.20)).unwrap();

        // p2 = 0.06, d ≈ 0.04386, (2.8016 / d)² ≈ 4079.5
        assert_eq!(n, 4080);
    }

    #[test]
    fn test_absolute_effect_matches_equivalent_relative() {
        let absolute = TestDesignParameters::new(0.05, 0.01, EffectKind::Absolute);
        let n_abs = calculate_sample_size(&absolute).unwrap();
        let n_rel = calculate_sample_size(&relative(0.05, 0.20)).unwrap();

        assert_eq!(n_abs, 4080);
        assert_eq!(n_abs, n_rel);
    }

    #[test]
    fn test_higher_power_requires_larger_sample() {
        let base = relative(0.05, 0.20);
        let mut previous = 0;

        for power in [0.5, 0.6, 0.7, 0.8, 0.9, 0.95, 0.99] {
            let n = calculate_sample_size(&base.with_power(power)).unwrap();
            assert!(n >= previous, "power {} gave {} < {}", power, n, previous);
            previous = n;
        }

        let n80 = calculate_sample_size(&base.with_power(0.8)).unwrap();
        let n90 = calculate_sample_size(&base.with_power(0.9)).unwrap();
        assert!(n90 > n80);
    }

    #[test]
    fn test_larger_effect_requires_smaller_sample() {
        let mut previous = u64::MAX;

        for effect in [0.05, 0.1, 0.2, 0.3, 0.5, 1.0] {
            let n = calculate_sample_size(&relative(0.1, effect)).unwrap();
            assert!(n <= previous);
            previous = n;
        }
    }

    #[test]
    fn test_negative_effect_uses_magnitude() {
        let up = calculate_sample_size(&TestDesignParameters::new(
            0.5,
            0.05,
            EffectKind::Absolute,
        ))
        .unwrap();
        let down = calculate_sample_size(&TestDesignParameters::new(
            0.5,
            -0.05,
            EffectKind::Absolute,
        ))
        .unwrap();

        assert_eq!(up, down);
    }

    #[test]
    fn test_target_rate_is_clamped() {
        // Both targets clamp to 1.0
        let clamped = TestDesignParameters::new(0.9, 0.5, EffectKind::Absolute);
        let exact = TestDesignParameters::new(0.9, 0.3, EffectKind::Absolute);

        assert_eq!(
            calculate_sample_size(&clamped).unwrap(),
            calculate_sample_size(&exact).unwrap()
        );
    }

    #[test]
    fn test_zero_effect_is_undefined() {
        let result = calculate_sample_size(&relative(0.05, 0.0));
        assert_eq!(
            result,
            Err(StatisticsError::UndefinedEffectSize { rate: 0.05 })
        );
    }

    #[test]
    fn test_zero_baseline_relative_effect_is_undefined() {
        let result = calculate_sample_size(&relative(0.0, 0.5));
        assert!(matches!(
            result,
            Err(StatisticsError::UndefinedEffectSize { .. })
        ));
    }

    #[test]
    fn test_clamp_collapsing_rates_is_undefined() {
        let design = TestDesignParameters::new(1.0, 0.2, EffectKind::Absolute);
        assert!(matches!(
            calculate_sample_size(&design),
            Err(StatisticsError::UndefinedEffectSize { .. })
        ));
    }

    #[test]
    fn test_invalid_parameters() {
        let design = relative(0.05, 0.2);

        assert_eq!(
            calculate_sample_size(&design.with_power(1.0)),
            Err(StatisticsError::invalid_parameter("statistical_power", 1.0))
        );
        assert_eq!(
            calculate_sample_size(&design.with_significance_level(0.0)),
            Err(StatisticsError::invalid_parameter("significance_level", 0.0))
        );
        assert!(calculate_sample_size(&relative(1.5, 0.1)).is_err());
        assert!(calculate_sample_size(&relative(0.05, f64::NAN)).is_err());
    }

    #[test]
    fn test_minimum_is_one() {
        // Huge effect with a permissive design
        let design = TestDesignParameters::new(0.0, 1.0, EffectKind::Absolute)
            .with_power(0.5)
            .with_significance_level(0.49);

        assert_eq!(calculate_sample_size(&design).unwrap(), 1);
    }

    #[test]
    fn test_tiny_effect_overflows() {
        let result = calculate_sample_size(&relative(0.5, 1e-12));
        assert!(matches!(
            result,
            Err(StatisticsError::SampleSizeOverflow { .. })
        ));
    }

    #[test]
    fn test_total_sample_size() {
        assert_eq!(total_sample_size(4080, 3), Ok(12240));
        assert!(matches!(
            total_sample_size(u64::MAX / 2, 3),
            Err(StatisticsError::SampleSizeOverflow { .. })
        ));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let design = relative(0.12, 0.07);
        assert_eq!(
            calculate_sample_size(&design),
            calculate_sample_size(&design)
        );
    }
}
