use crate::{
    config::PromptConfig,
    error::{Result, SketchGenError},
    models::{GenerateContentResponse, PromptSynthesisRequest},
};
use reqwest::Client;
use serde_json::{json, Value};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Fixed instruction handed to the multimodal model on every request. Caps
/// the output at roughly 75 words by instruction only.
const SYSTEM_INSTRUCTION: &str = "You are an expert in text-to-image prompt engineering. \
Carefully analyze the uploaded sketch or drawing and create a concise, detailed prompt that \
will generate a high-quality, fully detailed, full-sized image that closely resembles and \
refines the sketch. Your goal is to turn the sketch into a realistic or artistic version \
while preserving its original layout, subject, and composition. IMPORTANT: Prioritize the \
user's exact requests and guidance where given, and treat them as mandatory. Focus on style, \
subject, composition, colors, mood, and completeness. Do NOT let the image appear cropped, \
incomplete, or different in structure from the sketch. Limit the output to 75 words, and \
return only the generation prompt without any extra text or explanation.";

/// Converts a sketch capture into a natural-language image-generation
/// prompt via a Gemini-style `generateContent` endpoint.
#[derive(Clone)]
pub struct PromptClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl PromptClient {
    pub fn new(client: Client, config: PromptConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| SketchGenError::ConfigError("prompt API key is required".into()))?;

        Ok(Self {
            client,
            api_base: config
                .api_base
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            api_key,
            model: config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        )
    }

    fn build_parts(request: &PromptSynthesisRequest) -> Vec<Value> {
        let mut parts = vec![json!({ "text": SYSTEM_INSTRUCTION })];

        if let Some(hint) = &request.hint {
            parts.push(json!({
                "text": format!(
                    "The user has provided this specific request: \"{}\" - Make sure to \
                     incorporate these requirements prominently in your prompt along with \
                     the sketch.",
                    hint
                )
            }));
        }

        parts.push(json!({
            "inlineData": {
                "mimeType": request.mime_type,
                "data": request.image_base64,
            }
        }));

        parts
    }

    /// Returns the synthesized prompt text, whitespace-trimmed. An empty
    /// model response is an error.
    pub async fn synthesize(&self, request: PromptSynthesisRequest) -> Result<String> {
        let payload = json!({
            "contents": [{ "parts": Self::build_parts(&request) }]
        });

        log::info!("Synthesizing prompt with model: {}", self.model);
        log::debug!(
            "Prompt synthesis request carries {} base64 bytes ({})",
            request.image_base64.len(),
            request.mime_type
        );

        let response = self
            .client
            .post(self.endpoint())
            .json(&payload)
            .send()
            .await
            .map_err(|e| SketchGenError::RequestError(format!("Prompt API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SketchGenError::ResponseError(format!(
                "Prompt API error: {} - {}",
                status, body
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| SketchGenError::ResponseError(e.to_string()))?;

        match parsed.first_text() {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(SketchGenError::ResponseError(
                "Prompt API returned an empty prompt".into(),
            )),
        }
    }
}
