//! Standard normal distribution helpers

use once_cell::sync::Lazy;
use statrs::distribution::{ContinuousCDF, Normal};

static STANDARD_NORMAL: Lazy<Normal> =
    Lazy::new(|| Normal::new(0.0, 1.0).expect("standard normal parameters are valid"));

/// Standard normal cumulative distribution function Φ(x)
pub fn normal_cdf(x: f64) -> f64 {
    STANDARD_NORMAL.cdf(x)
}

/// Standard normal quantile (inverse CDF)
///
/// Returns ±∞ at 0 and 1; callers validate probabilities before calling.
pub fn normal_quantile(p: f64) -> f64 {
    STANDARD_NORMAL.inverse_cdf(p)
}

/// Two-tailed p-value for a z statistic
pub fn two_tailed_p_value(z: f64) -> f64 {
    2.0 * (1.0 - normal_cdf(z.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_cdf() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-9);
        assert!((normal_cdf(1.959964) - 0.975).abs() < 1e-6);
        assert!(normal_cdf(3.0) > 0.998);
        assert!(normal_cdf(-3.0) < 0.002);
    }

    #[test]
    fn test_normal_quantile() {
        assert!(normal_quantile(0.5).abs() < 1e-9);
        assert!((normal_quantile(0.975) - 1.959964).abs() < 1e-5);
        assert!((normal_quantile(0.8) - 0.841621).abs() < 1e-5);
        assert!((normal_quantile(0.2) + 0.841621).abs() < 1e-5);
    }

    #[test]
    fn test_quantile_inverts_cdf() {
        for x in [-2.5, -1.0, 0.3, 1.7] {
            assert!((normal_quantile(normal_cdf(x)) - x).abs() < 1e-6);
        }
    }

    #[test]
    fn test_two_tailed_p_value() {
        assert!((two_tailed_p_value(0.0) - 1.0).abs() < 1e-12);
        assert!((two_tailed_p_value(1.959964) - 0.05).abs() < 1e-5);
        assert_eq!(two_tailed_p_value(-2.0), two_tailed_p_value(2.0));
    }
}
