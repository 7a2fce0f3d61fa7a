//! Service banner and health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;

use super::state::AppState;

/// Health response with optional component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
}

/// GET /
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "A/B Test Advisor - experiment planning and analysis API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check
///
/// Reports `degraded` when no text-generation provider is available; the
/// statistics still work, so the status code stays 200.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let available = state.llm_chain.available_providers();

    let llm_check = if available.is_empty() {
        HealthCheck {
            name: "llm_providers".to_string(),
            status: HealthStatus::Degraded,
            message: Some("No LLM providers are available; narrative output uses fallbacks".to_string()),
        }
    } else {
        HealthCheck {
            name: "llm_providers".to_string(),
            status: HealthStatus::Healthy,
            message: Some(available.join(", ")),
        }
    };

    let response = HealthResponse {
        status: llm_check.status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![llm_check]),
    };

    (StatusCode::OK, Json(response))
}

/// Liveness check - simple check to verify the service is running
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
