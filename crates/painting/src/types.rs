use serde::{Deserialize, Serialize};

/// A position in canvas space (pixels, origin at the top-left corner)
pub type Point = glam::Vec2;

/// An integer pixel position in image space
pub type PixelCoord = glam::UVec2;

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque RGBA8 representation
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// CSS `rgb(r,g,b)` string
    pub fn as_css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Brush shapes the engine can stamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum BrushType {
    #[default]
    Circle = 0,
    Splat = 1,
}

impl BrushType {
    /// All brush types in cycling order
    pub const ALL: [BrushType; 2] = [BrushType::Circle, BrushType::Splat];

    /// Index of this type within [`BrushType::ALL`]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a type by index, wrapping around the known types
    pub fn from_index(index: u8) -> Self {
        Self::ALL[index as usize % Self::ALL.len()]
    }

    /// The type after this one, wrapping at `count`
    pub fn next(self, count: u8) -> Self {
        let count = count.clamp(1, Self::ALL.len() as u8);
        Self::from_index((self.index() + 1) % count)
    }
}

/// One recorded stamp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeRecord {
    /// Milliseconds since the first stamp of the session
    pub timestamp_ms: u64,
    /// Stamp center in canvas space
    pub position: Point,
    /// Color sampled from the source image
    pub color: Color,
    /// Brush radius the stamp was drawn with
    pub radius: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_type_cycles() {
        assert_eq!(BrushType::Circle.next(2), BrushType::Splat);
        assert_eq!(BrushType::Splat.next(2), BrushType::Circle);
        // A single-type set never leaves the circle brush
        assert_eq!(BrushType::Circle.next(1), BrushType::Circle);
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::new(1, 22, 255).as_css(), "rgb(1,22,255)");
        assert_eq!(Color::from([9, 8, 7]).to_rgba(), [9, 8, 7, 255]);
    }

    #[test]
    fn test_stroke_record_serializes() {
        let record = StrokeRecord {
            timestamp_ms: 16,
            position: Point::new(3.0, 4.0),
            color: Color::WHITE,
            radius: 10.0,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: StrokeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
