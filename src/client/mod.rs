pub mod http_client;

use crate::{
    error::Result,
    models::{GenerationRequest, GenerationResponse},
};
use async_trait::async_trait;

pub use http_client::{interpret_response, HttpImageClient, GENERIC_FAILURE};

/// Anything that can turn a request body into generated images.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_images(&self, request: &GenerationRequest) -> Result<GenerationResponse>;
}
