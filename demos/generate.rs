use sketchgen::{Capture, Config, GenerationRequest, PromptConfig, RenderConfig, SketchGenClient};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }
    sketchgen::logger::init()?;

    let prompt_key = env::var("SKETCHGEN_PROMPT_API_KEY")?;
    let render_keys = env::var("SKETCHGEN_RENDER_API_KEYS")?;

    let config = Config::new()
        .with_prompt(
            PromptConfig::new()
                .with_credentials(prompt_key)
                .with_model("gemini-2.0-flash"),
        )
        .with_render(
            RenderConfig::new().with_keys(render_keys.split(',').map(str::trim)),
        );

    let client = SketchGenClient::new(config)?;

    // A real embedder passes the canvas snapshot here; any base64 image
    // data URL works.
    let capture = Capture::from_data_url(
        "data:image/jpeg;base64,/9j/4AAQSkZJRgABAQEAYABgAAD/2wBDAAgGBgcGBQgHBwcJCQgKDBQNDAsLDBkSEw8UHRofHh0aHBwgJC4nICIsIxwcKDcpLDAxNDQ0Hyc5PTgyPC4zNDL/wAALCAABAAEBAREA/8QAFAABAAAAAAAAAAAAAAAAAAAACf/EABQQAQAAAAAAAAAAAAAAAAAAAAD/2gAIAQEAAD8AKp//2Q==",
    )?;

    let request = GenerationRequest::new(capture)
        .with_hint("a cozy cabin in a snowy forest, warm light in the windows");

    let outcome = client.generate_from_sketch(request).await;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
