//! Output pixel buffer and image writing.

use std::path::Path;

use thiserror::Error;
use whitted_core::Color;
use whitted_math::Interval;

/// Errors from building or saving a pixel buffer.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Buffer holds {actual} bytes, expected {expected} for {width}x{height} RGB")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Convert a color to 8-bit RGB. Channels are clamped to [0, 1], scaled by
/// 255 and truncated.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = Interval::UNIT.clamp_vec(color);
    [
        (255.0 * c.x) as u8,
        (255.0 * c.y) as u8,
        (255.0 * c.z) as u8,
    ]
}

/// Interleaved RGB bytes, row-major from the top row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGB bytes. The length must be exactly `3 * width * height`.
    pub fn from_bytes(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self, ImageError> {
        let expected = 3 * width as usize * height as usize;
        if bytes.len() != expected {
            return Err(ImageError::SizeMismatch {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            width,
            height,
            bytes,
        })
    }

    /// Wrap bytes already known to be `3 * width * height` long.
    pub(crate) fn from_raw_parts(width: u32, height: u32, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), 3 * width as usize * height as usize);
        Self {
            width,
            height,
            bytes,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All bytes, R,G,B interleaved.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let i = 3 * (y as usize * self.width as usize + x as usize);
        [self.bytes[i], self.bytes[i + 1], self.bytes[i + 2]]
    }

    /// Write the image. The format follows the file extension (`.ppm`, `.png`, ...).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageError> {
        image::save_buffer(
            path.as_ref(),
            &self.bytes,
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_rgb_truncates() {
        assert_eq!(color_to_rgb(Color::new(0.0, 0.5, 1.0)), [0, 127, 255]);
        assert_eq!(color_to_rgb(Color::splat(0.999)), [254, 254, 254]);
    }

    #[test]
    fn test_color_to_rgb_clamps() {
        assert_eq!(color_to_rgb(Color::new(-1.0, 2.0, 0.2)), [0, 255, 51]);
    }

    #[test]
    fn test_from_bytes_checks_length() {
        assert!(PixelBuffer::from_bytes(2, 2, vec![0; 12]).is_ok());
        assert!(matches!(
            PixelBuffer::from_bytes(2, 2, vec![0; 11]),
            Err(ImageError::SizeMismatch { expected: 12, actual: 11, .. })
        ));
    }

    #[test]
    fn test_get_pixel() {
        let bytes = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let buffer = PixelBuffer::from_bytes(2, 2, bytes).unwrap();

        assert_eq!(buffer.get(0, 0), [1, 2, 3]);
        assert_eq!(buffer.get(1, 0), [4, 5, 6]);
        assert_eq!(buffer.get(0, 1), [7, 8, 9]);
    }

    #[test]
    fn test_save_png() {
        let bytes = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 10, 20, 30];
        let buffer = PixelBuffer::from_bytes(2, 2, bytes.clone()).unwrap();

        let path = std::env::temp_dir().join(format!("whitted_save_{}.png", std::process::id()));
        buffer.save(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.dimensions(), (2, 2));
        assert_eq!(loaded.into_raw(), bytes);
    }
}
