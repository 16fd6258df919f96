//! HTTP adapter for the inference endpoint

pub mod error;
pub mod gateway;
pub mod wire;

pub use error::HttpGatewayError;
pub use gateway::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, HttpPredictionGateway};
pub use wire::{PredictRequestBody, PredictResponseBody, parse_response};
