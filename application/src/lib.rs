//! Application layer for cardiacheck
//!
//! This crate contains the prediction workflow, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_REVEAL_DELAY, WorkflowConfig};
pub use ports::{
    prediction_gateway::{FailureCause, PredictionGateway, RequestFailed},
    result_viewport::{NoViewport, ResultViewport},
};
pub use use_cases::prediction_workflow::{PredictionWorkflow, SubmitOutcome, WorkflowState};
