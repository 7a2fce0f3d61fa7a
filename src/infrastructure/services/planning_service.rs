//! Experiment planning service
//!
//! Sizes a proposed experiment, sweeps the effect size to show the cost of
//! detecting smaller or larger changes, and asks the text-generation chain to
//! review the hypothesis.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::domain::insight::{
    hypothesis_assessment_prompt, parse_hypothesis_assessment, HypothesisAssessment,
};
use crate::domain::statistics::{
    calculate_sample_size, calculate_test_duration, default_effect_sweep,
    generate_tradeoff_matrix, round_to, total_sample_size, EffectKind, TestDesignParameters,
    TradeoffRow,
};
use crate::domain::{DomainError, ProviderChain};

const DURATION_EXPLANATION: &str = "Time needed to collect sufficient data for reliable results";

// ============================================================================
// Request Types
// ============================================================================

/// A proposed experiment to validate
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentPlanRequest {
    pub hypothesis: String,
    pub design: TestDesignParameters,
    pub variants: u32,
    pub estimated_daily_users: u64,
}

// ============================================================================
// Response Types
// ============================================================================

/// Echo of the validated inputs
#[derive(Debug, Clone, Serialize)]
pub struct InputsSummary {
    pub hypothesis: String,
    pub baseline_conversion_rate: f64,
    pub minimum_detectable_effect: f64,
    pub mde_type: EffectKind,
    pub statistical_power: f64,
    pub significance_level: f64,
    pub variants: u32,
    pub estimated_daily_users: u64,
    pub explanations: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendedPlan {
    pub sample_size_per_variant: u64,
    pub total_sample_size: u64,
    pub estimated_duration_days: f64,
    pub duration_explanation: &'static str,
}

/// Recommended plan plus the effect-size sweep around it
#[derive(Debug, Clone, Serialize)]
pub struct FeasibilityAnalysis {
    pub recommended_plan: RecommendedPlan,
    pub tradeoff_matrix: Vec<TradeoffRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetupValidation {
    pub inputs_summary: InputsSummary,
    pub feasibility_analysis: FeasibilityAnalysis,
    pub hypothesis_assessment: HypothesisAssessment,
}

impl InputsSummary {
    fn from_request(request: &ExperimentPlanRequest) -> Self {
        Self {
            hypothesis: request.hypothesis.clone(),
            baseline_conversion_rate: request.design.baseline_conversion_rate,
            minimum_detectable_effect: request.design.effect,
            mde_type: request.design.effect_kind,
            statistical_power: request.design.statistical_power,
            significance_level: request.design.significance_level,
            variants: request.variants,
            estimated_daily_users: request.estimated_daily_users,
            explanations: input_explanations(),
        }
    }
}

fn input_explanations() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        (
            "baseline_conversion_rate",
            "The current conversion rate of your control experience",
        ),
        (
            "minimum_detectable_effect",
            "The smallest change you want to be able to detect",
        ),
        (
            "statistical_power",
            "Probability of detecting an effect if it exists (1-β)",
        ),
        ("significance_level", "Probability of false positive (α)"),
        ("variants", "Number of different versions being tested"),
    ])
}

// ============================================================================
// Planning Service
// ============================================================================

/// Trait for planning operations (for dynamic dispatch in AppState)
#[async_trait]
pub trait PlanningServiceTrait: Send + Sync + Debug {
    /// Size the experiment and review its hypothesis
    async fn validate_setup(
        &self,
        request: ExperimentPlanRequest,
    ) -> Result<SetupValidation, DomainError>;
}

#[derive(Debug, Clone)]
pub struct PlanningService {
    chain: Arc<ProviderChain>,
}

impl PlanningService {
    pub fn new(chain: Arc<ProviderChain>) -> Self {
        Self { chain }
    }

    /// Recommended plan and trade-off matrix, without any text generation
    pub fn feasibility(
        request: &ExperimentPlanRequest,
    ) -> Result<FeasibilityAnalysis, DomainError> {
        if request.variants < 2 {
            return Err(DomainError::validation("At least 2 variants are required"));
        }

        let sample_size = calculate_sample_size(&request.design)?;
        let total = total_sample_size(sample_size, request.variants)?;
        let duration =
            calculate_test_duration(sample_size, request.estimated_daily_users, request.variants)?;

        let tradeoff_matrix = generate_tradeoff_matrix(
            &request.design,
            request.estimated_daily_users,
            &default_effect_sweep(request.design.effect),
            request.variants,
        )?;

        Ok(FeasibilityAnalysis {
            recommended_plan: RecommendedPlan {
                sample_size_per_variant: sample_size,
                total_sample_size: total,
                estimated_duration_days: round_to(duration, 1),
                duration_explanation: DURATION_EXPLANATION,
            },
            tradeoff_matrix,
        })
    }

    async fn assess_hypothesis(&self, hypothesis: &str) -> HypothesisAssessment {
        match self.chain.generate(&hypothesis_assessment_prompt(hypothesis)).await {
            Ok(text) => parse_hypothesis_assessment(&text),
            Err(e) => {
                warn!(error = %e, "Hypothesis assessment failed, using fallback");
                HypothesisAssessment::unavailable(e)
            }
        }
    }
}

#[async_trait]
impl PlanningServiceTrait for PlanningService {
    #[instrument(skip(self, request), fields(variants = request.variants))]
    async fn validate_setup(
        &self,
        request: ExperimentPlanRequest,
    ) -> Result<SetupValidation, DomainError> {
        let feasibility_analysis = Self::feasibility(&request)?;

        info!(
            sample_size_per_variant = feasibility_analysis.recommended_plan.sample_size_per_variant,
            duration_days = feasibility_analysis.recommended_plan.estimated_duration_days,
            effect_kind = %request.design.effect_kind,
            "Computed experiment plan"
        );

        let hypothesis_assessment = self.assess_hypothesis(&request.hypothesis).await;

        Ok(SetupValidation {
            inputs_summary: InputsSummary::from_request(&request),
            feasibility_analysis,
            hypothesis_assessment,
        })
    }
}
