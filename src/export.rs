use crate::{
    error::{Result, SketchGenError},
    models::RenderedImage,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Decodes the rendered image and writes it under `dir` with a filename
/// derived from the current timestamp. Returns the written path.
pub fn save_image(image: &RenderedImage, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let bytes = BASE64
        .decode(&image.image_base64)
        .map_err(|e| SketchGenError::ExportError(format!("Failed to decode image: {}", e)))?;

    let filename = format!(
        "generated-image-{}.jpg",
        chrono::Utc::now().timestamp_millis()
    );
    let path = dir.as_ref().join(filename);

    fs::write(&path, bytes)
        .map_err(|e| SketchGenError::ExportError(format!("Failed to save image: {}", e)))?;

    log::info!("Image saved to: {}", path.display());
    Ok(path)
}

/// Places the synthesized prompt on the system clipboard. Best-effort; the
/// caller surfaces failures as a notification.
#[cfg(feature = "clipboard")]
pub fn copy_prompt(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| SketchGenError::ExportError(format!("Clipboard unavailable: {}", e)))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| SketchGenError::ExportError(format!("Failed to copy to clipboard: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_image_writes_decoded_bytes() {
        let dir = std::env::temp_dir();
        let image = RenderedImage::from_base64(BASE64.encode(b"jpeg-bytes"));

        let path = save_image(&image, &dir).unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("generated-image-"));
        assert_eq!(fs::read(&path).unwrap(), b"jpeg-bytes");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_save_image_rejects_bad_base64() {
        let image = RenderedImage {
            image_url: "data:image/jpeg;base64,???".into(),
            image_base64: "???".into(),
        };
        assert!(save_image(&image, std::env::temp_dir()).is_err());
    }
}
