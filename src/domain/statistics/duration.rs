//! Calendar duration of a test given its traffic

use super::error::StatisticsError;

/// Estimated test duration in days
///
/// `(sample_size_per_variant * num_variants) / daily_users`, unrounded.
pub fn calculate_test_duration(
    sample_size_per_variant: u64,
    daily_users: u64,
    num_variants: u32,
) -> Result<f64, StatisticsError> {
    if daily_users == 0 {
        return Err(StatisticsError::DivideByZero);
    }

    let total = sample_size_per_variant as f64 * f64::from(num_variants);
    Ok(total / daily_users as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_calculation() {
        assert_eq!(calculate_test_duration(1000, 500, 2).unwrap(), 4.0);
    }

    #[test]
    fn test_more_variants_longer_duration() {
        let two = calculate_test_duration(1000, 500, 2).unwrap();
        let three = calculate_test_duration(1000, 500, 3).unwrap();

        assert!(three > two);
        assert_eq!(three, 6.0);
    }

    #[test]
    fn test_linear_in_sample_size_and_inverse_in_traffic() {
        let base = calculate_test_duration(1200, 300, 2).unwrap();

        assert_eq!(calculate_test_duration(2400, 300, 2).unwrap(), base * 2.0);
        assert_eq!(calculate_test_duration(1200, 600, 2).unwrap(), base / 2.0);
        assert_eq!(calculate_test_duration(1200, 300, 4).unwrap(), base * 2.0);
    }

    #[test]
    fn test_fractional_days() {
        let days = calculate_test_duration(4080, 1000, 2).unwrap();
        assert!((days - 8.16).abs() < 1e-12);
    }

    #[test]
    fn test_zero_daily_users() {
        assert_eq!(
            calculate_test_duration(1000, 0, 2),
            Err(StatisticsError::DivideByZero)
        );
    }
}
