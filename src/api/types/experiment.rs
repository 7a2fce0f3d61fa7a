//! Request bodies for the planning and analysis endpoints

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::statistics::{EffectKind, Segment, TestDesignParameters, Variant};
use crate::domain::DomainError;
use crate::infrastructure::services::{ExperimentPlanRequest, ResultsAnalysisRequest};

// ============================================================================
// Validate Setup
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ValidateSetupRequest {
    #[validate(length(min = 10, message = "Hypothesis must be at least 10 characters"))]
    pub hypothesis: String,
    #[validate(nested)]
    pub metric: MetricRequest,
    #[validate(nested)]
    pub parameters: ParametersRequest,
    #[validate(nested)]
    pub traffic: TrafficRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MetricRequest {
    #[validate(range(min = 0.0, max = 1.0))]
    pub baseline_conversion_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_single_effect"))]
pub struct ParametersRequest {
    #[serde(default = "default_variants")]
    #[validate(range(min = 2))]
    pub variants: u32,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub minimum_detectable_effect_relative: Option<f64>,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, max = 1.0))]
    pub minimum_detectable_effect_absolute: Option<f64>,
    #[serde(default = "default_power")]
    #[validate(range(min = 0.5, max = 0.99))]
    pub statistical_power: f64,
    #[serde(default = "default_significance_level")]
    #[validate(range(exclusive_min = 0.0, exclusive_max = 0.5))]
    pub significance_level: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TrafficRequest {
    #[validate(range(min = 1))]
    pub estimated_daily_users: u64,
}

fn default_variants() -> u32 {
    2
}

fn default_power() -> f64 {
    0.8
}

fn default_significance_level() -> f64 {
    0.05
}

fn validate_single_effect(parameters: &ParametersRequest) -> Result<(), ValidationError> {
    match (
        parameters.minimum_detectable_effect_relative,
        parameters.minimum_detectable_effect_absolute,
    ) {
        (Some(_), None) | (None, Some(_)) => Ok(()),
        _ => Err(ValidationError::new("single_effect").with_message(
            "Exactly one of minimum_detectable_effect_relative or minimum_detectable_effect_absolute must be provided"
                .into(),
        )),
    }
}

impl ParametersRequest {
    /// The requested effect and how to apply it
    pub fn effect(&self) -> Result<(f64, EffectKind), DomainError> {
        match (
            self.minimum_detectable_effect_relative,
            self.minimum_detectable_effect_absolute,
        ) {
            (Some(effect), None) => Ok((effect, EffectKind::Relative)),
            (None, Some(effect)) => Ok((effect, EffectKind::Absolute)),
            _ => Err(DomainError::validation(
                "Exactly one of minimum_detectable_effect_relative or minimum_detectable_effect_absolute must be provided",
            )),
        }
    }
}

impl TryFrom<ValidateSetupRequest> for ExperimentPlanRequest {
    type Error = DomainError;

    fn try_from(request: ValidateSetupRequest) -> Result<Self, Self::Error> {
        let (effect, kind) = request.parameters.effect()?;

        let design = TestDesignParameters::new(request.metric.baseline_conversion_rate, effect, kind)
            .with_power(request.parameters.statistical_power)
            .with_significance_level(request.parameters.significance_level);

        Ok(Self {
            hypothesis: request.hypothesis,
            design,
            variants: request.parameters.variants,
            estimated_daily_users: request.traffic.estimated_daily_users,
        })
    }
}

// ============================================================================
// Analyze Results
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeResultsRequest {
    #[validate(nested)]
    pub context: ExperimentContextRequest,
    #[validate(nested)]
    pub results_data: ResultsDataRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExperimentContextRequest {
    #[validate(length(min = 10, message = "Hypothesis must be at least 10 characters"))]
    pub hypothesis: String,
    pub primary_metric_name: String,
    #[serde(default)]
    pub pm_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResultsDataRequest {
    #[validate(length(min = 2, message = "At least 2 variants are required"), nested)]
    pub variants: Vec<VariantRequest>,
    #[serde(default)]
    #[validate(nested)]
    pub segments: Option<Vec<SegmentRequest>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_counts"))]
pub struct VariantRequest {
    pub name: String,
    pub users: u64,
    pub conversions: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SegmentRequest {
    pub segment_name: String,
    #[validate(length(min = 2, message = "At least 2 variants are required"), nested)]
    pub variants: Vec<VariantRequest>,
}

fn validate_counts(variant: &VariantRequest) -> Result<(), ValidationError> {
    if variant.conversions > variant.users {
        return Err(ValidationError::new("conversions_exceed_users")
            .with_message("Conversions cannot exceed users".into()));
    }

    Ok(())
}

impl TryFrom<VariantRequest> for Variant {
    type Error = DomainError;

    fn try_from(variant: VariantRequest) -> Result<Self, Self::Error> {
        Ok(Variant::new(variant.name, variant.users, variant.conversions)?)
    }
}

fn into_variants(variants: Vec<VariantRequest>) -> Result<Vec<Variant>, DomainError> {
    variants.into_iter().map(Variant::try_from).collect()
}

impl TryFrom<AnalyzeResultsRequest> for ResultsAnalysisRequest {
    type Error = DomainError;

    fn try_from(request: AnalyzeResultsRequest) -> Result<Self, Self::Error> {
        let segments = request
            .results_data
            .segments
            .map(|segments| {
                segments
                    .into_iter()
                    .map(|segment| {
                        Ok(Segment::new(segment.segment_name, into_variants(segment.variants)?))
                    })
                    .collect::<Result<Vec<_>, DomainError>>()
            })
            .transpose()?;

        Ok(Self {
            hypothesis: request.context.hypothesis,
            primary_metric_name: request.context.primary_metric_name,
            pm_notes: request.context.pm_notes,
            variants: into_variants(request.results_data.variants)?,
            segments,
        })
    }
}
