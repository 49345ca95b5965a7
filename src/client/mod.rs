pub mod fence;
pub mod prompt_client;
pub mod render_client;
pub mod rotation;

use crate::{
    config::Config,
    error::{Result, SketchGenError},
    models::{GenerationOutcome, GenerationRequest, PromptSynthesisRequest, RenderRequest},
};
use std::sync::Arc;

pub use fence::{RequestFence, Ticket};
pub use prompt_client::PromptClient;
pub use render_client::RenderClient;
pub use rotation::KeyPool;

/// Facade over the sketch-to-image pipeline: prompt synthesis, image
/// rendering, and the orchestration between them.
#[derive(Clone)]
pub struct SketchGenClient {
    prompt_client: PromptClient,
    render_client: RenderClient,
    fence: Arc<RequestFence>,
}

impl SketchGenClient {
    pub fn new(config: Config) -> Result<Self> {
        let prompt_config = config
            .prompt
            .ok_or_else(|| SketchGenError::ConfigError("prompt API configuration is required".into()))?;
        let render_config = config
            .render
            .ok_or_else(|| SketchGenError::ConfigError("render API configuration is required".into()))?;

        let http = reqwest::Client::new();

        Ok(Self {
            prompt_client: PromptClient::new(http.clone(), prompt_config)?,
            render_client: RenderClient::new(http, render_config)?,
            fence: Arc::new(RequestFence::new()),
        })
    }

    pub fn prompt(&self) -> &PromptClient {
        &self.prompt_client
    }

    pub fn renderer(&self) -> &RenderClient {
        &self.render_client
    }

    /// Runs the full pipeline: synthesize a prompt from the capture, then
    /// render an image from that prompt. Failure at either stage folds into
    /// a uniform `Failure` outcome; the render stage is never invoked when
    /// synthesis fails. No retries beyond the render client's internal
    /// rate-limit retry, and no timeouts at this level.
    pub async fn generate_from_sketch(&self, request: GenerationRequest) -> GenerationOutcome {
        let mut synthesis =
            PromptSynthesisRequest::new(request.capture.base64_payload(), request.capture.mime());
        if let Some(hint) = request.hint {
            synthesis = synthesis.with_hint(hint);
        }

        let prompt = match self.prompt_client.synthesize(synthesis).await {
            Ok(prompt) => prompt,
            Err(e) => return GenerationOutcome::failure(e.to_string()),
        };

        log::info!("Generated prompt: {}", prompt);

        match self
            .render_client
            .render(RenderRequest {
                prompt: prompt.clone(),
            })
            .await
        {
            Ok(image) => GenerationOutcome::success(image.image_url, image.image_base64, prompt),
            Err(e) => GenerationOutcome::failure(e.to_string()),
        }
    }

    /// Fenced variant: the request is ticketed, and if a newer request was
    /// issued before this one completed, the stale outcome is discarded
    /// (`None`) instead of overwriting fresher state (last-issued-wins).
    pub async fn generate_fenced(&self, request: GenerationRequest) -> Option<GenerationOutcome> {
        let ticket = self.fence.issue();
        let outcome = self.generate_from_sketch(request).await;

        if self.fence.is_current(ticket) {
            Some(outcome)
        } else {
            log::debug!("Discarding outcome of superseded generation request");
            None
        }
    }
}
