use crate::canvas::Capture;
use serde::{Deserialize, Serialize};

/// One pipeline run: a capture plus an optional free-text user hint.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub capture: Capture,
    pub hint: Option<String>,
}

impl GenerationRequest {
    pub fn new(capture: Capture) -> Self {
        Self {
            capture,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        let hint = hint.into();
        if !hint.trim().is_empty() {
            self.hint = Some(hint);
        }
        self
    }
}

/// Uniform result of one generation request. Exactly one outcome is current
/// at a time; the embedding UI replaces it wholesale on the next request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerationOutcome {
    Success {
        image_url: String,
        image_base64: String,
        prompt: String,
        message: String,
    },
    Failure {
        message: String,
    },
}

impl GenerationOutcome {
    pub fn success(image_url: String, image_base64: String, prompt: String) -> Self {
        GenerationOutcome::Success {
            image_url,
            image_base64,
            prompt,
            message: "Image generated successfully".to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        GenerationOutcome::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            GenerationOutcome::Success { message, .. } => message,
            GenerationOutcome::Failure { message } => message,
        }
    }
}
