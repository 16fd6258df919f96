//! Request lifecycle state

use super::response::PredictionResponse;
use serde::Serialize;

/// Lifecycle of the single prediction request
///
/// ```text
/// Idle -> Loading -> Success(response)
///                 -> Failure(message) -> Loading ...
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(PredictionResponse),
    /// Localized, non-technical message fixed at the moment of failure
    Failure(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn response(&self) -> Option<&PredictionResponse> {
        match self {
            RequestState::Success(response) => Some(response),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            RequestState::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Loading => "loading",
            RequestState::Success(_) => "success",
            RequestState::Failure(_) => "failure",
        }
    }
}
