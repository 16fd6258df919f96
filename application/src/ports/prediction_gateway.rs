//! Prediction gateway port
//!
//! Defines the interface for reaching the remote inference endpoint.

use async_trait::async_trait;
use cardiacheck_domain::{PredictionInput, PredictionResponse};
use thiserror::Error;

/// Why a request failed. Kept for diagnostics only; every cause is shown to
/// the user as the same localized message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureCause {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

impl FailureCause {
    /// Failures worth one more attempt
    pub fn is_transient(&self) -> bool {
        matches!(self, FailureCause::Network(_) | FailureCause::Timeout)
    }
}

/// The single error kind of the request client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Request failed ({cause})")]
pub struct RequestFailed {
    pub cause: FailureCause,
}

impl RequestFailed {
    pub fn new(cause: FailureCause) -> Self {
        Self { cause }
    }

    pub fn is_transient(&self) -> bool {
        self.cause.is_transient()
    }
}

impl From<FailureCause> for RequestFailed {
    fn from(cause: FailureCause) -> Self {
        Self::new(cause)
    }
}

/// Gateway to the inference endpoint
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait PredictionGateway: Send + Sync {
    /// Submit one input snapshot and return the parsed response
    async fn predict(&self, input: &PredictionInput) -> Result<PredictionResponse, RequestFailed>;
}
