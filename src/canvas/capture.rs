use crate::error::{Result, SketchGenError};

/// Serialized raster snapshot of the drawing surface, taken once per
/// generation request and discarded after it completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Capture {
    mime: String,
    base64_data: String,
}

impl Capture {
    /// Decomposes a `data:<mime>;base64,<payload>` URL produced by the
    /// drawing surface. Anything else is a capture failure.
    pub fn from_data_url(data_url: &str) -> Result<Self> {
        let rest = data_url
            .strip_prefix("data:")
            .ok_or_else(|| SketchGenError::CaptureError("not a data URL".into()))?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| SketchGenError::CaptureError("data URL has no payload".into()))?;

        let mime = header.strip_suffix(";base64").ok_or_else(|| {
            SketchGenError::CaptureError("data URL payload is not base64-encoded".into())
        })?;

        if mime.is_empty() {
            return Err(SketchGenError::CaptureError(
                "data URL is missing a mime type".into(),
            ));
        }

        if payload.is_empty() {
            return Err(SketchGenError::CaptureError("empty image payload".into()));
        }

        Ok(Self {
            mime: mime.to_string(),
            base64_data: payload.to_string(),
        })
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// The raw base64 text after the data URL header.
    pub fn base64_payload(&self) -> &str {
        &self.base64_data
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64_data)
    }
}
