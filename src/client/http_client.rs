use crate::{
    client::ImageGenerator,
    config::ClientConfig,
    error::{Result, WeaverError},
    models::{ErrorBody, GenerationRequest, GenerationResponse},
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

pub const GENERIC_FAILURE: &str = "Failed to generate images";

#[derive(Clone)]
pub struct HttpImageClient {
    client: Client,
    endpoint_url: String,
}

impl HttpImageClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| WeaverError::ConfigError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint_url: config.endpoint_url(),
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

#[async_trait]
impl ImageGenerator for HttpImageClient {
    async fn generate_images(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        log::info!("Posting generation request to {}", self.endpoint_url);
        log::debug!(
            "Request body: {}",
            serde_json::to_string(request).unwrap_or_default()
        );

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("Generation request failed to send: {}", e);
                WeaverError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!("Response status {} ({} bytes)", status, body.len());

        interpret_response(status, &body)
    }
}

/// Maps a raw HTTP status and body onto the response contract.
///
/// Non-success bodies yield their `error` field, falling back to a generic
/// message when the body is not JSON or carries no usable `error`.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<GenerationResponse> {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        log::warn!("Server answered {}: {}", status, message);
        return Err(WeaverError::ApplicationError(message));
    }

    serde_json::from_str(body).map_err(|e| WeaverError::TransportError(e.to_string()))
}
