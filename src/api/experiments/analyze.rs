//! Experiment results analysis endpoint

use axum::extract::State;
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::{AnalyzeResultsRequest, ApiError, Json, ValidatedJson};
use crate::infrastructure::services::{ResultsAnalysis, ResultsAnalysisRequest};

/// POST /analyze/results
pub async fn analyze_results(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AnalyzeResultsRequest>,
) -> Result<Json<ResultsAnalysis>, ApiError> {
    debug!(
        metric = %request.context.primary_metric_name,
        variants = request.results_data.variants.len(),
        segments = request.results_data.segments.as_ref().map_or(0, Vec::len),
        "Analyzing experiment results"
    );

    let analysis_request = ResultsAnalysisRequest::try_from(request)?;
    let analysis = state.analysis_service.analyze_results(analysis_request).await?;

    info!(
        p_value = analysis.statistical_summary.metrics.p_value,
        is_significant = analysis.statistical_summary.metrics.is_significant,
        "Experiment results analyzed"
    );

    Ok(Json(analysis))
}
