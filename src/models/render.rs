use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct RenderRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderedImage {
    /// Data URL form of the payload, ready for display.
    pub image_url: String,
    pub image_base64: String, // Base64 encoded
}

impl RenderedImage {
    pub fn from_base64(image_base64: String) -> Self {
        let image_url = format!("data:image/jpeg;base64,{}", image_base64);
        Self {
            image_url,
            image_base64,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct RenderApiResponse {
    pub image_data: Option<String>,
}
