//! Statistical engine errors

use thiserror::Error;

/// Hard failures of the statistical engine
///
/// Degenerate variance in the significance test and segments with fewer than
/// two variants are not represented here: both have defined fallbacks.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatisticsError {
    #[error("Effect size is undefined: baseline and target rates coincide at {rate}")]
    UndefinedEffectSize { rate: f64 },

    #[error("Cannot estimate duration with zero daily users")]
    DivideByZero,

    #[error("Variant '{variant}' has {conversions} conversions but only {users} users")]
    ConversionsExceedUsers {
        variant: String,
        users: u64,
        conversions: u64,
    },

    #[error("Required sample size is too large to represent: {required}")]
    SampleSizeOverflow { required: f64 },

    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl StatisticsError {
    pub fn invalid_parameter(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StatisticsError::DivideByZero.to_string(),
            "Cannot estimate duration with zero daily users"
        );
        assert_eq!(
            StatisticsError::invalid_parameter("statistical_power", 1.5).to_string(),
            "Invalid parameter 'statistical_power': 1.5"
        );
        assert!(StatisticsError::SampleSizeOverflow { required: f64::INFINITY }
            .to_string()
            .contains("too large"));
    }
}
