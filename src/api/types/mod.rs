//! HTTP request and error types

pub mod error;
pub mod experiment;
pub mod json;

pub use error::{ApiError, ApiErrorResponse};
pub use experiment::{
    AnalyzeResultsRequest, ExperimentContextRequest, MetricRequest, ParametersRequest,
    ResultsDataRequest, SegmentRequest, TrafficRequest, ValidateSetupRequest, VariantRequest,
};
pub use json::{Json, ValidatedJson};
