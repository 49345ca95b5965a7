use std::fmt;

#[derive(Debug)]
pub enum SketchGenError {
    ConfigError(String),
    CaptureError(String),
    RequestError(String),
    ResponseError(String),
    SerializationError(String),
    RateLimited(String),
    ExportError(String),
}

impl fmt::Display for SketchGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchGenError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SketchGenError::CaptureError(msg) => write!(f, "Capture error: {}", msg),
            SketchGenError::RequestError(msg) => write!(f, "Request error: {}", msg),
            SketchGenError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            SketchGenError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            SketchGenError::RateLimited(msg) => write!(f, "Rate limited: {}", msg),
            SketchGenError::ExportError(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for SketchGenError {}

pub type Result<T> = std::result::Result<T, SketchGenError>;
