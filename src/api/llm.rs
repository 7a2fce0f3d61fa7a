//! Text-generation provider status endpoint

use std::collections::BTreeMap;

use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::types::Json;

#[derive(Debug, Serialize)]
pub struct LlmStatusResponse {
    pub available_providers: Vec<&'static str>,
    pub default_provider: String,
    pub fallback_enabled: bool,
    /// Configured model per provider, registered or not
    pub models: BTreeMap<&'static str, String>,
    pub total_providers: usize,
}

/// GET /llm/status
pub async fn llm_status(State(state): State<AppState>) -> Json<LlmStatusResponse> {
    let config = &state.llm_config;

    Json(LlmStatusResponse {
        available_providers: state.llm_chain.available_providers(),
        default_provider: config.default_provider.clone(),
        fallback_enabled: config.fallback_enabled,
        models: BTreeMap::from([
            ("anthropic", config.anthropic.model.clone()),
            ("gemini", config.gemini.model.clone()),
        ]),
        total_providers: state.llm_chain.len(),
    })
}
