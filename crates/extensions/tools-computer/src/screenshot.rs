//! Screen capture and PNG encoding.

use std::io::Cursor;

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use screenshots::Screen;
use thiserror::Error;

/// Screenshot errors.
#[derive(Debug, Error)]
pub enum ScreenshotError {
    #[error("Capture failed: {0}")]
    CaptureFailed(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("No monitor found")]
    NoMonitor,
}

/// An encoded screenshot.
#[derive(Debug)]
pub struct Screenshot {
    /// PNG image data.
    pub data: Vec<u8>,
    /// Image width.
    pub width: u32,
    /// Image height.
    pub height: u32,
}

impl Screenshot {
    /// Encode as base64.
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }
}

fn primary_screen() -> Result<Screen, ScreenshotError> {
    let screens = Screen::all().map_err(|e| ScreenshotError::CaptureFailed(e.to_string()))?;
    let index = screens
        .iter()
        .position(|s| s.display_info.is_primary)
        .unwrap_or(0);
    screens
        .into_iter()
        .nth(index)
        .ok_or(ScreenshotError::NoMonitor)
}

/// Get primary screen dimensions.
pub fn get_screen_size() -> Result<(u32, u32), ScreenshotError> {
    let screen = primary_screen()?;
    Ok((screen.display_info.width, screen.display_info.height))
}

/// Capture the entire primary screen.
pub fn capture_primary() -> Result<RgbaImage, ScreenshotError> {
    let captured = primary_screen()?
        .capture()
        .map_err(|e| ScreenshotError::CaptureFailed(e.to_string()))?;

    let (width, height) = (captured.width(), captured.height());
    RgbaImage::from_raw(width, height, captured.into_raw()).ok_or_else(|| {
        ScreenshotError::CaptureFailed(format!("short pixel buffer for {}x{}", width, height))
    })
}

/// Resize to exactly `width` x `height` with a bicubic filter.
pub fn resize(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    imageops::resize(image, width, height, FilterType::CatmullRom)
}

/// Encode as PNG with maximum compression.
pub fn encode_png(image: &RgbaImage) -> Result<Screenshot, ScreenshotError> {
    let (width, height) = image.dimensions();
    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, PngFilter::Adaptive)
        .write_image(image.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(|e| ScreenshotError::EncodingFailed(e.to_string()))?;

    Ok(Screenshot {
        data: buffer.into_inner(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use image::Rgba;

    #[test]
    fn test_screenshot_to_base64() {
        let screenshot = Screenshot {
            data: vec![0x89, 0x50, 0x4E, 0x47], // PNG magic bytes
            width: 100,
            height: 100,
        };
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(screenshot.to_base64())
            .unwrap();
        assert_eq!(decoded, vec![0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn test_screenshot_empty_data() {
        let screenshot = Screenshot {
            data: vec![],
            width: 0,
            height: 0,
        };
        assert!(screenshot.to_base64().is_empty());
    }

    #[test]
    fn test_encode_png_round_trip_dimensions() {
        let image = RgbaImage::from_pixel(64, 48, Rgba([10, 20, 30, 255]));
        let screenshot = encode_png(&image).unwrap();
        assert_eq!((screenshot.width, screenshot.height), (64, 48));
        assert_eq!(&screenshot.data[..4], &[0x89, 0x50, 0x4E, 0x47]);

        let decoded = image::load_from_memory(&screenshot.data).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 48));
        assert_eq!(decoded.to_rgba8().get_pixel(5, 5), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_resize_exact_dimensions() {
        let image = RgbaImage::from_pixel(200, 100, Rgba([255, 0, 0, 255]));
        let resized = resize(&image, 100, 50);
        assert_eq!(resized.dimensions(), (100, 50));
    }

    #[test]
    fn test_screenshot_error_display() {
        let err = ScreenshotError::CaptureFailed("test error".to_string());
        assert_eq!(err.to_string(), "Capture failed: test error");

        let err = ScreenshotError::EncodingFailed("encoding error".to_string());
        assert_eq!(err.to_string(), "Encoding failed: encoding error");

        let err = ScreenshotError::NoMonitor;
        assert_eq!(err.to_string(), "No monitor found");
    }

    // Integration tests that require actual screen access
    #[test]
    #[ignore] // Requires actual display
    fn test_capture_primary() {
        let image = capture_primary().unwrap();
        assert!(image.width() > 0);
        assert!(image.height() > 0);
    }

    #[test]
    #[ignore] // Requires actual display
    fn test_get_screen_size() {
        let (width, height) = get_screen_size().unwrap();
        assert!(width > 0);
        assert!(height > 0);
    }
}
