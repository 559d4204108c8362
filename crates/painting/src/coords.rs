use crate::types::{PixelCoord, Point};

/// Clamp a value to `[min, max]`
#[inline]
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(x))
}

/// Convert a page-space pointer position into canvas space by removing the
/// canvas's on-screen offset
#[inline]
pub fn to_canvas_coords(page: Point, canvas_offset: Point) -> Point {
    page - canvas_offset
}

/// Truncate both components toward zero
#[inline]
pub fn truncate(point: Point) -> Point {
    point.trunc()
}

/// Map a canvas-space point to the image pixel it samples.
///
/// Each axis is clamped to the canvas, scaled by `image / canvas` and
/// truncated (the same as normalising to `[0, 1]` and scaling by the image
/// size). The result is then clamped to `[0, width - 1] x [0, height - 1]` so
/// the far edge maps onto the last pixel instead of one past it.
pub fn to_image_coords(
    point: Point,
    canvas_size: (u32, u32),
    image_size: (u32, u32),
) -> PixelCoord {
    PixelCoord::new(
        scale_axis(point.x, canvas_size.0, image_size.0),
        scale_axis(point.y, canvas_size.1, image_size.1),
    )
}

fn scale_axis(value: f32, canvas_extent: u32, image_extent: u32) -> u32 {
    if canvas_extent == 0 || value.is_nan() {
        return 0;
    }
    let clamped = clamp(value, 0.0, canvas_extent as f32) as f64;
    // f64 keeps equal canvas and image sizes an exact identity
    let scaled = (clamped * image_extent as f64 / canvas_extent as f64) as u32;
    scaled.min(image_extent.saturating_sub(1))
}
