//! Application state for shared services

use std::sync::Arc;

use crate::config::LlmConfig;
use crate::domain::ProviderChain;
use crate::infrastructure::services::{
    AnalysisService, AnalysisServiceTrait, PlanningService, PlanningServiceTrait,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub planning_service: Arc<dyn PlanningServiceTrait>,
    pub analysis_service: Arc<dyn AnalysisServiceTrait>,
    pub llm_chain: Arc<ProviderChain>,
    pub llm_config: Arc<LlmConfig>,
}

impl AppState {
    /// Wire the default services around a shared provider chain
    pub fn new(llm_chain: ProviderChain, llm_config: LlmConfig) -> Self {
        let llm_chain = Arc::new(llm_chain);

        Self {
            planning_service: Arc::new(PlanningService::new(Arc::clone(&llm_chain))),
            analysis_service: Arc::new(AnalysisService::new(Arc::clone(&llm_chain))),
            llm_chain,
            llm_config: Arc::new(llm_config),
        }
    }
}
