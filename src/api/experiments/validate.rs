//! Experiment setup validation endpoint

use axum::extract::State;
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, ValidateSetupRequest, ValidatedJson};
use crate::infrastructure::services::{ExperimentPlanRequest, SetupValidation};

/// POST /validate/setup
pub async fn validate_setup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ValidateSetupRequest>,
) -> Result<Json<SetupValidation>, ApiError> {
    debug!(
        baseline = request.metric.baseline_conversion_rate,
        variants = request.parameters.variants,
        "Validating experiment setup"
    );

    let plan_request = ExperimentPlanRequest::try_from(request)?;
    let validation = state.planning_service.validate_setup(plan_request).await?;

    info!(
        sample_size_per_variant =
            validation.feasibility_analysis.recommended_plan.sample_size_per_variant,
        hypothesis_score = validation.hypothesis_assessment.score,
        "Experiment setup validated"
    );

    Ok(Json(validation))
}
