//! Blurred backdrop behind the volume control
//!
//! Decodes the host-supplied background image, shrinks it to a sane size
//! and applies a Gaussian blur once, so the view only has to draw a
//! ready-made RGBA handle.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use iced::widget::image::Handle;

/// Longest edge kept before blurring, larger images are downscaled first
const MAX_EDGE: u32 = 1600;

/// Blurred RGBA pixels ready for upload
#[derive(Debug, Clone)]
pub struct BlurredImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl BlurredImage {
    pub fn into_handle(self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.pixels)
    }
}

/// Decode and blur an image file
pub fn blur_file(path: &Path, sigma: f32) -> Result<BlurredImage> {
    let decoded = image::open(path)
        .with_context(|| format!("Failed to decode background {}", path.display()))?;

    let decoded = if decoded.width() > MAX_EDGE || decoded.height() > MAX_EDGE {
        decoded.thumbnail(MAX_EDGE, MAX_EDGE)
    } else {
        decoded
    };

    let blurred = if sigma > 0.0 {
        decoded.blur(sigma)
    } else {
        decoded
    };

    let rgba = blurred.to_rgba8();
    Ok(BlurredImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

/// Load the backdrop off the UI thread
pub async fn load_backdrop(path: PathBuf, sigma: f32) -> Result<Handle> {
    tokio::task::spawn_blocking(move || {
        let start = std::time::Instant::now();
        let image = blur_file(&path, sigma)?;
        tracing::info!(
            "Background {} ready ({}x{}) in {:?}",
            path.display(),
            image.width,
            image.height,
            start.elapsed()
        );
        Ok(image.into_handle())
    })
    .await
    .context("Background loading task panicked")?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_split_image(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("liquid-volume-backdrop-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);

        // Left half black, right half white
        let img = RgbaImage::from_fn(64, 32, |x, _| {
            if x < 32 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_blur_keeps_size_and_softens_edge() {
        let path = write_split_image("split.png");
        let blurred = blur_file(&path, 4.0).expect("blur should succeed");

        assert_eq!((blurred.width, blurred.height), (64, 32));
        assert_eq!(blurred.pixels.len(), 64 * 32 * 4);

        // Pixel just left of the edge picks up some white
        let idx = ((16 * 64 + 31) * 4) as usize;
        let red = blurred.pixels[idx];
        assert!(red > 0 && red < 255, "edge pixel was {}", red);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_zero_sigma_is_passthrough() {
        let path = write_split_image("sharp.png");
        let image = blur_file(&path, 0.0).unwrap();
        let idx = ((16 * 64 + 31) * 4) as usize;
        assert_eq!(image.pixels[idx], 0);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = blur_file(Path::new("/definitely/not/here.png"), 10.0).unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.png"));
    }
}
