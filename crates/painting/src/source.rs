//! Source images that brush colors are sampled from

use std::path::Path;

use tracing::debug;

use crate::constants::BYTES_PER_PIXEL;
use crate::error::PaintError;
use crate::types::{Color, PixelCoord};

/// An immutable RGBA8 pixel buffer in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSample {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImageSample {
    /// Wrap a raw RGBA8 buffer.
    ///
    /// Fails if either dimension is zero or the buffer is not exactly
    /// `width * height * 4` bytes long.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, PaintError> {
        if width == 0 || height == 0 {
            return Err(PaintError::InvalidImage {
                width,
                height,
                reason: "image has a zero dimension".to_string(),
            });
        }
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(PaintError::InvalidImage {
                width,
                height,
                reason: format!("expected {} bytes, got {}", expected, pixels.len()),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image filled with a single opaque color
    pub fn solid(width: u32, height: u32, color: Color) -> Result<Self, PaintError> {
        let pixel_count = width as usize * height as usize;
        Self::new(width, height, color.to_rgba().repeat(pixel_count))
    }

    /// Copy the pixels out of a decoded `image` buffer
    pub fn from_rgba_image(image: &image::RgbaImage) -> Result<Self, PaintError> {
        Self::new(image.width(), image.height(), image.as_raw().clone())
    }

    /// Decode an encoded image (PNG, JPEG) held in memory
    pub fn from_memory(bytes: &[u8]) -> Result<Self, PaintError> {
        let decoded = image::load_from_memory(bytes)?.to_rgba8();
        Self::from_rgba_image(&decoded)
    }

    /// Decode an image file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PaintError> {
        let path = path.as_ref();
        let decoded = image::open(path)?.to_rgba8();
        debug!(
            "ImageSample::load: {} ({}x{})",
            path.display(),
            decoded.width(),
            decoded.height()
        );
        Self::from_rgba_image(&decoded)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as `(width, height)`
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA8 bytes
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Read the RGB channels of the pixel at `pos`.
    ///
    /// The pixel lives at byte offset `(x + y * width) * 4`.
    pub fn sample_color(&self, pos: PixelCoord) -> Result<Color, PaintError> {
        if pos.x >= self.width || pos.y >= self.height {
            return Err(PaintError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            });
        }
        let offset = (pos.x as usize + pos.y as usize * self.width as usize) * BYTES_PER_PIXEL;
        let px = &self.pixels[offset..offset + 3];
        Ok(Color::new(px[0], px[1], px[2]))
    }

    /// Read a pixel, clamping `pos` to the image bounds first
    pub fn sample_color_clamped(&self, pos: PixelCoord) -> Color {
        let clamped = PixelCoord::new(pos.x.min(self.width - 1), pos.y.min(self.height - 1));
        let offset =
            (clamped.x as usize + clamped.y as usize * self.width as usize) * BYTES_PER_PIXEL;
        Color::new(
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 image with a distinct color in each corner
    fn quad() -> ImageSample {
        ImageSample::new(
            2,
            2,
            vec![
                255, 0, 0, 255, /* */ 0, 255, 0, 255, //
                0, 0, 255, 255, /* */ 10, 20, 30, 255,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let err = ImageSample::new(0, 4, vec![]).unwrap_err();
        assert!(matches!(err, PaintError::InvalidImage { width: 0, .. }));
    }

    #[test]
    fn test_rejects_short_buffer() {
        let err = ImageSample::new(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, PaintError::InvalidImage { .. }));
    }

    #[test]
    fn test_sample_color_offsets() {
        let image = quad();
        assert_eq!(image.sample_color(PixelCoord::new(0, 0)).unwrap(), Color::new(255, 0, 0));
        assert_eq!(image.sample_color(PixelCoord::new(1, 0)).unwrap(), Color::new(0, 255, 0));
        assert_eq!(image.sample_color(PixelCoord::new(0, 1)).unwrap(), Color::new(0, 0, 255));
        assert_eq!(image.sample_color(PixelCoord::new(1, 1)).unwrap(), Color::new(10, 20, 30));
    }

    #[test]
    fn test_sample_color_out_of_bounds() {
        let image = quad();
        let err = image.sample_color(PixelCoord::new(2, 0)).unwrap_err();
        assert!(matches!(err, PaintError::OutOfBounds { x: 2, y: 0, .. }));

        // The clamped variant reads the nearest edge pixel instead
        assert_eq!(
            image.sample_color_clamped(PixelCoord::new(5, 5)),
            Color::new(10, 20, 30)
        );
    }

    #[test]
    fn test_from_rgba_image() {
        let mut rgba = image::RgbaImage::new(3, 1);
        rgba.put_pixel(2, 0, image::Rgba([7, 8, 9, 255]));
        let sample = ImageSample::from_rgba_image(&rgba).unwrap();
        assert_eq!(sample.size(), (3, 1));
        assert_eq!(sample.sample_color(PixelCoord::new(2, 0)).unwrap(), Color::new(7, 8, 9));
    }

    fn encoded_png() -> Vec<u8> {
        let mut rgba = image::RgbaImage::new(3, 2);
        rgba.put_pixel(2, 1, image::Rgba([7, 8, 9, 255]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        rgba.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_from_memory_decodes_png() {
        let sample = ImageSample::from_memory(&encoded_png()).unwrap();
        assert_eq!(sample.size(), (3, 2));
        assert_eq!(sample.sample_color(PixelCoord::new(2, 1)).unwrap(), Color::new(7, 8, 9));
        assert_eq!(sample.sample_color(PixelCoord::new(0, 0)).unwrap(), Color::new(0, 0, 0));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("stipple_source_{}.png", std::process::id()));
        std::fs::write(&path, encoded_png()).unwrap();

        let sample = ImageSample::load(&path);
        std::fs::remove_file(&path).unwrap();

        let sample = sample.unwrap();
        assert_eq!(sample.size(), (3, 2));
        assert_eq!(sample.sample_color(PixelCoord::new(2, 1)).unwrap(), Color::new(7, 8, 9));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("stipple_source_does_not_exist.png");
        assert!(matches!(ImageSample::load(&path), Err(PaintError::Decode(_))));
    }

    #[test]
    fn test_from_memory_rejects_garbage() {
        let err = ImageSample::from_memory(b"definitely not a png").unwrap_err();
        assert!(matches!(err, PaintError::Decode(_)));
    }
}
