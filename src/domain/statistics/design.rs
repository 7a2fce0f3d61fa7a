//! Test design parameters

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a minimum detectable effect is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    /// Fraction of the baseline rate (0.1 = +10% of baseline)
    #[default]
    Relative,
    /// Percentage points added to the baseline rate
    Absolute,
}

impl EffectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Absolute => "absolute",
        }
    }

    pub fn is_relative(&self) -> bool {
        matches!(self, Self::Relative)
    }

    /// Target conversion rate after applying `effect` to `baseline`
    pub fn target_rate(&self, baseline: f64, effect: f64) -> f64 {
        match self {
            Self::Relative => baseline * (1.0 + effect),
            Self::Absolute => baseline + effect,
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for sizing a fixed-horizon two-proportion test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestDesignParameters {
    pub baseline_conversion_rate: f64,
    pub effect: f64,
    pub effect_kind: EffectKind,
    pub statistical_power: f64,
    pub significance_level: f64,
}

impl TestDesignParameters {
    pub fn new(baseline_conversion_rate: f64, effect: f64, effect_kind: EffectKind) -> Self {
        Self {
            baseline_conversion_rate,
            effect,
            effect_kind,
            statistical_power: 0.8,
            significance_level: 0.05,
        }
    }

    pub fn with_power(mut self, statistical_power: f64) -> Self {
        self.statistical_power = statistical_power;
        self
    }

    pub fn with_significance_level(mut self, significance_level: f64) -> Self {
        self.significance_level = significance_level;
        self
    }

    /// Same design with a different effect magnitude
    pub fn with_effect(mut self, effect: f64) -> Self {
        self.effect = effect;
        self
    }
}
