//! Infrastructure services

mod analysis_service;
mod planning_service;

pub use analysis_service::{
    AnalysisService, AnalysisServiceTrait, ResultsAnalysis, ResultsAnalysisRequest,
    SegmentSummary, StatisticalSummary,
};
pub use planning_service::{
    ExperimentPlanRequest, FeasibilityAnalysis, InputsSummary, PlanningService,
    PlanningServiceTrait, RecommendedPlan, SetupValidation,
};
