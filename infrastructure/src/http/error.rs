use thiserror::Error;

/// Errors raised while constructing the HTTP gateway
#[derive(Error, Debug)]
pub enum HttpGatewayError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
