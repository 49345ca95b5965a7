use crate::{
    client::rotation::KeyPool,
    config::RenderConfig,
    error::{Result, SketchGenError},
    models::{RenderApiResponse, RenderRequest, RenderedImage},
};
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;

const DEFAULT_ENDPOINT: &str = "https://api.imagepig.com/xl";

/// Client for the image-generation API. Draws an access key from the
/// rotating pool on every attempt; a 429 triggers exactly one retry with
/// the next key in rotation before giving up.
#[derive(Clone)]
pub struct RenderClient {
    client: Client,
    endpoint: String,
    keys: Arc<KeyPool>,
}

impl RenderClient {
    pub fn new(client: Client, config: RenderConfig) -> Result<Self> {
        Ok(Self {
            client,
            endpoint: config
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            keys: Arc::new(KeyPool::new(config.api_keys)?),
        })
    }

    pub fn key_pool(&self) -> &KeyPool {
        &self.keys
    }

    pub async fn render(&self, request: RenderRequest) -> Result<RenderedImage> {
        let api_key = self.keys.next_key().to_string();
        log::info!("Rendering image, pool cursor at {}", self.keys.position());

        match self.attempt(&request.prompt, &api_key).await {
            Err(SketchGenError::RateLimited(msg)) => {
                log::warn!("{}, retrying with next key in rotation", msg);
                let retry_key = self.keys.next_key().to_string();
                self.attempt(&request.prompt, &retry_key).await
            }
            result => result,
        }
    }

    async fn attempt(&self, prompt: &str, api_key: &str) -> Result<RenderedImage> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Api-Key", api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&json!({ "prompt": prompt }))
            .send()
            .await
            .map_err(|e| SketchGenError::RequestError(format!("Render API request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SketchGenError::RateLimited(format!(
                "Render API returned {}",
                status
            )));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SketchGenError::ResponseError(format!(
                "Render API error: {} - {}",
                status, body
            )));
        }

        let parsed: RenderApiResponse = response
            .json()
            .await
            .map_err(|e| SketchGenError::ResponseError(e.to_string()))?;

        match parsed.image_data {
            Some(data) if !data.is_empty() => Ok(RenderedImage::from_base64(data)),
            _ => Err(SketchGenError::ResponseError(
                "No image data in the response".into(),
            )),
        }
    }
}
