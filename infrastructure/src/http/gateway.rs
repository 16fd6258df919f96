//! HTTP prediction gateway implementation

use super::error::HttpGatewayError;
use super::wire::{PredictRequestBody, parse_response};
use async_trait::async_trait;
use cardiacheck_application::{FailureCause, PredictionGateway, RequestFailed};
use cardiacheck_domain::{PredictionInput, PredictionResponse};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Public inference endpoint
pub const DEFAULT_ENDPOINT: &str = "https://kvcli-heart-disease-predictor.hf.space/predict";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Prediction gateway that POSTs JSON to a fixed endpoint
#[derive(Debug, Clone)]
pub struct HttpPredictionGateway {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    retry_transient: bool,
}

impl HttpPredictionGateway {
    /// Create a gateway with its own client and a bounded timeout
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, HttpGatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cardiacheck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_client(endpoint, client)
    }

    /// Create a gateway with an existing client
    pub fn with_client(endpoint: &str, client: reqwest::Client) -> Result<Self, HttpGatewayError> {
        let endpoint = reqwest::Url::parse(endpoint)
            .map_err(|e| HttpGatewayError::InvalidEndpoint(format!("{endpoint}: {e}")))?;

        info!("HttpPredictionGateway initialized for {}", endpoint);

        Ok(Self {
            client,
            endpoint,
            retry_transient: false,
        })
    }

    /// Retry once on network failures and timeouts
    pub fn with_retry_transient(mut self, retry: bool) -> Self {
        self.retry_transient = retry;
        self
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    async fn send_once(&self, body: &PredictRequestBody) -> Result<PredictionResponse, FailureCause> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(classify)?;
        debug!("Endpoint answered {} with {} bytes", status, text.len());

        parse_response(status, &text)
    }
}

fn classify(e: reqwest::Error) -> FailureCause {
    if e.is_timeout() {
        FailureCause::Timeout
    } else {
        FailureCause::Network(e.to_string())
    }
}

#[async_trait]
impl PredictionGateway for HttpPredictionGateway {
    async fn predict(&self, input: &PredictionInput) -> Result<PredictionResponse, RequestFailed> {
        let body = PredictRequestBody::from(input);

        match self.send_once(&body).await {
            Ok(response) => Ok(response),
            Err(cause) if self.retry_transient && cause.is_transient() => {
                warn!("Transient failure ({}), retrying once", cause);
                self.send_once(&body).await.map_err(RequestFailed::new)
            }
            Err(cause) => Err(RequestFailed::new(cause)),
        }
    }
}
