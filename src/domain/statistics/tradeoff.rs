//! Trade-off matrix across candidate effect sizes

use serde::{Deserialize, Serialize};

use super::design::{EffectKind, TestDesignParameters};
use super::duration::calculate_test_duration;
use super::error::StatisticsError;
use super::round_to;
use super::sample_size::{calculate_sample_size, total_sample_size};

const DURATION_PLACES: usize = 1;

/// One candidate design in the trade-off matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeoffRow {
    #[serde(rename = "mde")]
    pub effect: f64,
    #[serde(rename = "mde_type")]
    pub effect_kind: EffectKind,
    pub sample_size_per_variant: u64,
    pub total_sample_size: u64,
    pub estimated_duration_days: f64,
}

/// Size and schedule a test for every effect in `effects`
///
/// Rows come back in the order of `effects`; duplicates and non-monotonic
/// sweeps are kept as given. `design.effect` is ignored in favour of each
/// sweep value. Any failing row fails the whole matrix.
pub fn generate_tradeoff_matrix(
    design: &TestDesignParameters,
    daily_users: u64,
    effects: &[f64],
    num_variants: u32,
) -> Result<Vec<TradeoffRow>, StatisticsError> {
    effects
        .iter()
        .map(|&effect| tradeoff_row(&design.with_effect(effect), daily_users, num_variants))
        .collect()
}

fn tradeoff_row(
    design: &TestDesignParameters,
    daily_users: u64,
    num_variants: u32,
) -> Result<TradeoffRow, StatisticsError> {
    let sample_size = calculate_sample_size(design)?;
    let duration = calculate_test_duration(sample_size, daily_users, num_variants)?;

    Ok(TradeoffRow {
        effect: design.effect,
        effect_kind: design.effect_kind,
        sample_size_per_variant: sample_size,
        total_sample_size: total_sample_size(sample_size, num_variants)?,
        estimated_duration_days: round_to(duration, DURATION_PLACES),
    })
}

/// Default sweep around a chosen effect: 50% to 150% in quarter steps
pub fn default_effect_sweep(effect: f64) -> Vec<f64> {
    [0.5, 0.75, 1.0, 1.25, 1.5]
        .iter()
        .map(|factor| effect * factor)
        .collect()
}
