//! Rendering surfaces - the drawing primitives the brush engine needs

use tracing::trace;

use crate::constants::BYTES_PER_PIXEL;
use crate::error::PaintError;
use crate::source::ImageSample;
use crate::types::{Color, Point};

/// Drawing primitives a canvas must provide.
///
/// Coordinates outside the surface are clipped, never an error.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Resize the surface. Contents after a resize are unspecified until cleared.
    fn resize(&mut self, width: u32, height: u32);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color);

    /// Fill a circle of `radius` centered at `center`
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Fill the whole surface with a color
    fn clear(&mut self, color: Color) {
        let (width, height) = (self.width(), self.height());
        self.fill_rect(0, 0, width, height, color);
    }

    /// Center point of the surface
    fn center(&self) -> Point {
        Point::new(self.width() as f32 / 2.0, self.height() as f32 / 2.0)
    }
}

/// An RGBA8 CPU raster
#[derive(Debug, Clone)]
pub struct CpuSurface {
    width: u32,
    height: u32,
    /// Pixel data in row-major order
    pixels: Vec<[u8; 4]>,
}

impl CpuSurface {
    /// Create a new surface initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 0]; pixel_count],
        }
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.index(x, y);
        self.pixels[index] = rgba;
    }

    /// Copy an image onto the surface with its top-left corner at the origin
    pub fn draw_image(&mut self, image: &ImageSample) {
        let w = image.width().min(self.width);
        let h = image.height().min(self.height);
        let src = image.pixels();
        for y in 0..h {
            for x in 0..w {
                let offset =
                    (x as usize + y as usize * image.width() as usize) * BYTES_PER_PIXEL;
                let rgba = [
                    src[offset],
                    src[offset + 1],
                    src[offset + 2],
                    src[offset + 3],
                ];
                self.set_pixel(x, y, rgba);
            }
        }
    }

    /// Read back the top-left `width` x `height` region as an image
    pub fn read_pixels(&self, width: u32, height: u32) -> Result<ImageSample, PaintError> {
        let w = width.min(self.width);
        let h = height.min(self.height);
        let mut bytes = Vec::with_capacity(w as usize * h as usize * BYTES_PER_PIXEL);
        for y in 0..h {
            let row = self.index(0, y);
            bytes.extend_from_slice(bytemuck::cast_slice(&self.pixels[row..row + w as usize]));
        }
        ImageSample::new(w, h, bytes)
    }

    /// Raw RGBA8 bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl Surface for CpuSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![[0, 0, 0, 0]; (width as usize) * (height as usize)];
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let x_min = x.max(0) as u32;
        let y_min = y.max(0) as u32;
        let x_max = (x as i64 + width as i64).clamp(0, self.width as i64) as u32;
        let y_max = (y as i64 + height as i64).clamp(0, self.height as i64) as u32;
        if x_min >= x_max || y_min >= y_max {
            return;
        }

        let rgba = color.to_rgba();
        for py in y_min..y_max {
            let row = self.index(0, py);
            self.pixels[row + x_min as usize..row + x_max as usize].fill(rgba);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        if radius.is_nan() || radius <= 0.0 || !center.is_finite() {
            return;
        }

        let x_min = ((center.x - radius).floor().max(0.0) as u32).min(self.width);
        let y_min = ((center.y - radius).floor().max(0.0) as u32).min(self.height);
        let x_max = ((center.x + radius).ceil().max(0.0) as u32).min(self.width);
        let y_max = ((center.y + radius).ceil().max(0.0) as u32).min(self.height);

        if x_min >= x_max || y_min >= y_max {
            trace!(
                "CpuSurface::fill_circle: ({:.1}, {:.1}) r={:.1} clipped",
                center.x, center.y, radius
            );
            return;
        }

        let rgba = color.to_rgba();
        let r_sq = radius * radius;
        for py in y_min..y_max {
            for px in x_min..x_max {
                // Test the pixel center
                let dx = (px as f32 + 0.5) - center.x;
                let dy = (py as f32 + 0.5) - center.y;
                if dx * dx + dy * dy <= r_sq {
                    let index = self.index(px, py);
                    self.pixels[index] = rgba;
                }
            }
        }
    }
}
