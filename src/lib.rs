pub mod canvas;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod logger;
pub mod models;

pub use canvas::{toggle_fill, Capture, Shape, ShapeKind};
pub use client::{KeyPool, PromptClient, RenderClient, RequestFence, SketchGenClient};
pub use config::{Config, PromptConfig, RenderConfig};
pub use error::{Result, SketchGenError};
pub use models::{
    GenerationOutcome, GenerationRequest, PromptSynthesisRequest, RenderRequest, RenderedImage,
};
