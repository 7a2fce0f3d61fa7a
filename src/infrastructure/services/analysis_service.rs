//! Experiment results analysis service
//!
//! Computes the two-proportion comparison for the overall results and for
//! each segment, then asks the text-generation chain for a narrative, next
//! steps and follow-up questions. Each generated part falls back to fixed
//! text independently when generation fails.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::domain::insight::{
    followup_questions_prompt, interpretation_prompt, parse_questions, parse_recommendations,
    recommendations_prompt, GenerativeAnalysis,
};
use crate::domain::statistics::{analyze_segments, ConversionMetrics, Segment, Variant};
use crate::domain::{DomainError, ProviderChain};

// ============================================================================
// Request Types
// ============================================================================

/// Observed experiment results with the context needed to interpret them
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsAnalysisRequest {
    pub hypothesis: String,
    pub primary_metric_name: String,
    pub pm_notes: Option<String>,
    /// Control first, treatment second; further variants are ignored
    pub variants: Vec<Variant>,
    pub segments: Option<Vec<Segment>>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Conversion metrics with a glossary of the reported fields
#[derive(Debug, Clone, Serialize)]
pub struct StatisticalSummary {
    #[serde(flatten)]
    pub metrics: ConversionMetrics,
    pub explanations: BTreeMap<&'static str, &'static str>,
}

impl From<ConversionMetrics> for StatisticalSummary {
    fn from(metrics: ConversionMetrics) -> Self {
        Self {
            metrics,
            explanations: metric_explanations(),
        }
    }
}

fn metric_explanations() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("relative_lift", "Percentage change from control to treatment"),
        (
            "p_value",
            "Probability that the observed difference is due to chance",
        ),
        (
            "is_significant",
            "Whether the difference is statistically significant (p < 0.05)",
        ),
        (
            "confidence_interval",
            "Range of plausible values for the true difference",
        ),
    ])
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentSummary {
    pub segment_name: String,
    pub metrics: StatisticalSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsAnalysis {
    pub statistical_summary: StatisticalSummary,
    pub segment_analysis: Option<Vec<SegmentSummary>>,
    pub generative_analysis: GenerativeAnalysis,
}

// ============================================================================
// Analysis Service
// ============================================================================

/// Trait for results analysis (for dynamic dispatch in AppState)
#[async_trait]
pub trait AnalysisServiceTrait: Send + Sync + Debug {
    async fn analyze_results(
        &self,
        request: ResultsAnalysisRequest,
    ) -> Result<ResultsAnalysis, DomainError>;
}

#[derive(Debug, Clone)]
pub struct AnalysisService {
    chain: Arc<ProviderChain>,
}

impl AnalysisService {
    pub fn new(chain: Arc<ProviderChain>) -> Self {
        Self { chain }
    }

    /// Control-versus-treatment metrics for the overall results
    pub fn statistical_summary(variants: &[Variant]) -> Result<ConversionMetrics, DomainError> {
        match variants {
            [control, treatment, ..] => Ok(ConversionMetrics::compare(control, treatment)),
            _ => Err(DomainError::validation(
                "At least 2 variants are required for analysis",
            )),
        }
    }

    async fn generate_insights(
        &self,
        request: &ResultsAnalysisRequest,
        metrics: &ConversionMetrics,
    ) -> GenerativeAnalysis {
        let pm_notes = request.pm_notes.as_deref();

        let interpretation = interpretation_prompt(
            &request.hypothesis,
            &request.primary_metric_name,
            metrics,
            pm_notes,
        );
        let recommendations = recommendations_prompt(&request.hypothesis, metrics, pm_notes);
        let questions = followup_questions_prompt(&request.hypothesis, metrics, pm_notes);

        let (narrative, steps, questions) = tokio::join!(
            self.chain.generate(&interpretation),
            self.chain.generate(&recommendations),
            self.chain.generate(&questions),
        );

        GenerativeAnalysis {
            interpretation_narrative: narrative.unwrap_or_else(|e| {
                warn!(error = %e, "Interpretation generation failed, using fallback");
                GenerativeAnalysis::fallback_narrative()
            }),
            recommended_next_steps: steps
                .map(|text| parse_recommendations(&text))
                .unwrap_or_else(|e| {
                    warn!(error = %e, "Recommendation generation failed, using fallback");
                    GenerativeAnalysis::fallback_next_steps()
                }),
            generated_questions: questions
                .map(|text| parse_questions(&text))
                .unwrap_or_else(|e| {
                    warn!(error = %e, "Question generation failed, using fallback");
                    GenerativeAnalysis::fallback_questions()
                }),
        }
    }
}

#[async_trait]
impl AnalysisServiceTrait for AnalysisService {
    #[instrument(skip(self, request), fields(metric = %request.primary_metric_name))]
    async fn analyze_results(
        &self,
        request: ResultsAnalysisRequest,
    ) -> Result<ResultsAnalysis, DomainError> {
        let metrics = Self::statistical_summary(&request.variants)?;

        info!(
            p_value = metrics.p_value,
            relative_lift = metrics.relative_lift,
            is_significant = metrics.is_significant,
            "Computed conversion metrics"
        );

        // An empty segment list is reported the same as no segments
        let segment_analysis = request
            .segments
            .as_deref()
            .filter(|segments| !segments.is_empty())
            .map(|segments| {
                analyze_segments(segments)
                    .into_iter()
                    .map(|analysis| SegmentSummary {
                        segment_name: analysis.segment_name,
                        metrics: analysis.metrics.into(),
                    })
                    .collect()
            });

        let generative_analysis = self.generate_insights(&request, &metrics).await;

        Ok(ResultsAnalysis {
            statistical_summary: metrics.into(),
            segment_analysis,
            generative_analysis,
        })
    }
}
