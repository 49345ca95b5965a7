use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct PromptSynthesisRequest {
    pub image_base64: String,
    pub mime_type: String,
    pub hint: Option<String>,
}

impl PromptSynthesisRequest {
    pub fn new(image_base64: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            image_base64: image_base64.into(),
            mime_type: mime_type.into(),
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

#[derive(Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: CandidateContent,
}

#[derive(Serialize, Deserialize, Default)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Serialize, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// First text part of the first candidate, whitespace-trimmed.
    pub fn first_text(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|part| part.text.as_deref())
            .map(|text| text.trim().to_string())
    }
}
