//! Experiment planning and analysis endpoints

pub mod analyze;
pub mod validate;

use axum::{routing::post, Router};

use super::state::AppState;

/// Create the experiment router
pub fn create_experiments_router() -> Router<AppState> {
    Router::new()
        .route("/validate/setup", post(validate::validate_setup))
        .route("/analyze/results", post(analyze::analyze_results))
}
