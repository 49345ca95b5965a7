use sketchgen::{Capture, Config, GenerationOutcome, GenerationRequest, SketchGenClient};
use std::env;

// 1x1 white JPEG, stands in for a real canvas snapshot when none is given.
const SAMPLE_CAPTURE: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRgABAQEAYABgAAD/2wBDAAgGBgcGBQgHBwcJCQgKDBQNDAsLDBkSEw8UHRofHh0aHBwgJC4nICIsIxwcKDcpLDAxNDQ0Hyc5PTgyPC4zNDL/wAALCAABAAEBAREA/8QAFAABAAAAAAAAAAAAAAAAAAAACf/EABQQAQAAAAAAAAAAAAAAAAAAAAD/2gAIAQEAAD8AKp//2Q==";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    sketchgen::logger::init_with_config(
        sketchgen::logger::LoggerConfig::development()
            .with_level(sketchgen::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking SketchGen environment...");

    // Check credentials (without printing the actual values for security)
    match env::var("SKETCHGEN_PROMPT_API_KEY") {
        Ok(key) => {
            log::info!("✅ Prompt API key found in environment");
            log::debug!("Prompt key starts with: {}...", &key[..5.min(key.len())]);
        }
        Err(_) => {
            log::warn!("⚠️  No SKETCHGEN_PROMPT_API_KEY set");
            log::error!("❌ Prompt synthesis will fail without it");
        }
    }

    match env::var("SKETCHGEN_RENDER_API_KEYS") {
        Ok(keys) => {
            let count = keys.split(',').filter(|k| !k.trim().is_empty()).count();
            log::info!("✅ Render key pool found: {} key(s)", count);
        }
        Err(_) => {
            log::warn!("⚠️  No SKETCHGEN_RENDER_API_KEYS set");
            log::error!("❌ Image rendering will fail without at least one key");
        }
    }

    let config = Config::from_env();
    sketchgen::logger::log_config_info(&config);

    log::info!("🔄 Creating SketchGen client...");
    let client = match SketchGenClient::new(config.clone()) {
        Ok(client) => {
            log::info!("✅ SketchGen client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize SketchGen client: {}", e);
            return Err(e.into());
        }
    };

    // Capture comes from the first argument (a data URL) or the built-in
    // sample; an optional second argument is the user hint.
    let mut args = env::args().skip(1);
    let data_url = args.next().unwrap_or_else(|| SAMPLE_CAPTURE.to_string());
    let hint = args.next();

    let capture = match Capture::from_data_url(&data_url) {
        Ok(capture) => capture,
        Err(e) => {
            log::error!("❌ Could not read the canvas capture: {}", e);
            return Err(e.into());
        }
    };
    log::info!(
        "🖼️  Capture ready: {} ({} base64 bytes)",
        capture.mime(),
        capture.base64_payload().len()
    );

    let mut request = GenerationRequest::new(capture);
    if let Some(hint) = hint {
        log::info!("📝 User hint: {}", hint);
        request = request.with_hint(hint);
    }

    log::info!("🎨 Running sketch-to-image pipeline...");
    let run = sketchgen::logger::timer("generate_from_sketch");
    let outcome = client.generate_from_sketch(request).await;
    drop(run);

    match outcome {
        GenerationOutcome::Success {
            image_base64,
            prompt,
            message,
            ..
        } => {
            log::info!("✅ {}", message);
            log::info!("📝 Synthesized prompt: {}", prompt);
            log::info!("📏 Image data length: {} characters", image_base64.len());

            let image = sketchgen::RenderedImage::from_base64(image_base64);
            let out_dir = config.output_dir.clone().unwrap_or_else(|| ".".to_string());
            match sketchgen::export::save_image(&image, &out_dir) {
                Ok(path) => log::info!("💾 Image saved to: {}", path.display()),
                Err(e) => log::error!("❌ Failed to save image: {}", e),
            }

            #[cfg(feature = "clipboard")]
            match sketchgen::export::copy_prompt(&prompt) {
                Ok(_) => log::info!("📋 Prompt copied to clipboard!"),
                Err(e) => log::warn!("⚠️  Failed to copy to clipboard: {}", e),
            }
        }
        GenerationOutcome::Failure { message } => {
            log::error!("❌ Generation failed: {}", message);
            log::warn!("💡 The interface stays ready, trigger another attempt when ready");
        }
    }

    Ok(())
}
