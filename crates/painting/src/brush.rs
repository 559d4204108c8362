//! Brush shapes and the jitter source used to scatter stamps
//!
//! The shapes here are plain functions over a [`Surface`] so the same
//! primitives draw both live stamps on the canvas and the brush preview.

use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::constants::{
    SPLAT_ARMS, SPLAT_CIRCLES_PER_ARM, SPLAT_RADIUS_DECAY, SPLAT_START_DISTANCE,
    SPLAT_START_STEP, SPLAT_STEP_DECAY,
};
use crate::surface::Surface;
use crate::types::{BrushType, Color, Point};

/// Source of jitter offsets in `[-1, 1]`
pub trait JitterSource {
    fn next_offset(&mut self) -> f32;
}

/// Jitter drawn uniformly from a random number generator
#[derive(Debug, Clone)]
pub struct RngJitter<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngJitter<StdRng> {
    /// Deterministic jitter for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Jitter seeded from the operating system
    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> JitterSource for RngJitter<R> {
    fn next_offset(&mut self) -> f32 {
        self.rng.random_range(-1.0..=1.0)
    }
}

/// Replays a fixed sequence of offsets, wrapping when it runs out
#[derive(Debug, Clone)]
pub struct FixedJitter {
    offsets: Vec<f32>,
    cursor: usize,
}

impl FixedJitter {
    pub fn new(offsets: impl Into<Vec<f32>>) -> Self {
        Self {
            offsets: offsets.into(),
            cursor: 0,
        }
    }

    /// Jitter that always returns zero
    pub fn none() -> Self {
        Self::new(vec![0.0])
    }
}

impl JitterSource for FixedJitter {
    fn next_offset(&mut self) -> f32 {
        if self.offsets.is_empty() {
            return 0.0;
        }
        let value = self.offsets[self.cursor % self.offsets.len()];
        self.cursor += 1;
        value.clamp(-1.0, 1.0)
    }
}

/// Draw a filled circle
pub fn draw_circle<S: Surface + ?Sized>(surface: &mut S, position: Point, radius: f32, color: Color) {
    trace!(
        "draw_circle: ({:.1}, {:.1}) r={:.2} {}",
        position.x,
        position.y,
        radius,
        color.as_css()
    );
    surface.fill_circle(position, radius, color);
}

/// Circles making up a splat, center first, then each arm from the inside out.
pub fn splat_circles(position: Point, radius: f32) -> Vec<(Point, f32)> {
    let mut circles = Vec::with_capacity(1 + SPLAT_ARMS * SPLAT_CIRCLES_PER_ARM);
    circles.push((position, radius));

    for arm in 0..SPLAT_ARMS {
        // Unit vector along this arm
        let dir = Point::from_angle(arm as f32 / SPLAT_ARMS as f32 * TAU);

        let mut arm_radius = radius;
        let mut step = SPLAT_START_STEP;
        let mut distance = SPLAT_START_DISTANCE;
        for _ in 0..SPLAT_CIRCLES_PER_ARM {
            circles.push((position + dir * distance, arm_radius));

            distance += step;
            step /= SPLAT_STEP_DECAY;
            arm_radius /= SPLAT_RADIUS_DECAY;
        }
    }

    circles
}

/// Draw a splat: a center circle with four shrinking arms of circles
pub fn draw_splat<S: Surface + ?Sized>(surface: &mut S, position: Point, radius: f32, color: Color) {
    for (center, r) in splat_circles(position, radius) {
        draw_circle(surface, center, r, color);
    }
}

/// Draw one stamp of the given brush type
pub fn draw_brush<S: Surface + ?Sized>(
    surface: &mut S,
    brush_type: BrushType,
    position: Point,
    radius: f32,
    color: Color,
) {
    match brush_type {
        BrushType::Circle => draw_circle(surface, position, radius, color),
        BrushType::Splat => draw_splat(surface, position, radius, color),
    }
}

/// Redraw the brush preview: clear, then the brush shape at the center
pub fn draw_preview<S: Surface + ?Sized>(
    surface: &mut S,
    brush_type: BrushType,
    radius: f32,
    background: Color,
    color: Color,
) {
    surface.clear(background);
    let center = surface.center();
    draw_brush(surface, brush_type, center, radius, color);
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// A surface that remembers every primitive drawn on it
    #[derive(Debug, Default)]
    pub struct ShapeLog {
        pub width: u32,
        pub height: u32,
        pub circles: Vec<(Point, f32, Color)>,
        pub rects: Vec<(i32, i32, u32, u32, Color)>,
    }

    impl ShapeLog {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                ..Default::default()
            }
        }
    }

    impl Surface for ShapeLog {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.width = width;
            self.height = height;
        }

        fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
            self.rects.push((x, y, width, height, color));
        }

        fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
            self.circles.push((center, radius, color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::ShapeLog;
    use super::*;

    #[test]
    fn test_rng_jitter_stays_in_range() {
        let mut jitter = RngJitter::seeded(7);
        for _ in 0..1000 {
            let v = jitter.next_offset();
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_rng_jitter_is_deterministic() {
        let mut a = RngJitter::seeded(99);
        let mut b = RngJitter::seeded(99);
        for _ in 0..16 {
            assert_eq!(a.next_offset(), b.next_offset());
        }
    }

    #[test]
    fn test_os_jitter_stays_in_range() {
        let mut jitter = RngJitter::from_os();
        for _ in 0..256 {
            assert!((-1.0..=1.0).contains(&jitter.next_offset()));
        }
    }

    #[test]
    fn test_fixed_jitter_wraps_and_clamps() {
        let mut jitter = FixedJitter::new(vec![0.5, 3.0]);
        assert_eq!(jitter.next_offset(), 0.5);
        assert_eq!(jitter.next_offset(), 1.0);
        assert_eq!(jitter.next_offset(), 0.5);
    }

    #[test]
    fn test_circle_draws_one_primitive() {
        let mut surface = ShapeLog::new(10, 10);
        draw_brush(&mut surface, BrushType::Circle, Point::new(2.0, 3.0), 4.0, Color::WHITE);
        assert_eq!(surface.circles, vec![(Point::new(2.0, 3.0), 4.0, Color::WHITE)]);
    }

    #[test]
    fn test_splat_draws_seventeen_circles() {
        let mut surface = ShapeLog::new(100, 100);
        draw_splat(&mut surface, Point::new(50.0, 50.0), 8.0, Color::BLACK);
        assert_eq!(surface.circles.len(), 17);
        assert_eq!(surface.circles[0].0, Point::new(50.0, 50.0));
        assert_eq!(surface.circles[0].1, 8.0);
    }

    #[test]
    fn test_splat_arm_geometry() {
        let origin = Point::new(0.0, 0.0);
        let circles = splat_circles(origin, 8.0);

        for arm in 0..SPLAT_ARMS {
            let arm_circles = &circles[1 + arm * SPLAT_CIRCLES_PER_ARM..][..SPLAT_CIRCLES_PER_ARM];

            let mut expected_distance = SPLAT_START_DISTANCE;
            let mut step = SPLAT_START_STEP;
            let mut expected_radius = 8.0;
            for (center, r) in arm_circles {
                assert!((center.distance(origin) - expected_distance).abs() < 1e-4);
                assert!((r - expected_radius).abs() < 1e-6);

                expected_distance += step;
                step /= 1.5;
                expected_radius /= 2.0;
            }
        }
    }

    #[test]
    fn test_splat_arms_are_axis_aligned() {
        let circles = splat_circles(Point::ZERO, 4.0);
        // First circle of each arm sits 10px out along +x, +y, -x, -y
        let firsts: Vec<Point> = (0..4).map(|arm| circles[1 + arm * 4].0).collect();
        let expected = [
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(-10.0, 0.0),
            Point::new(0.0, -10.0),
        ];
        for (got, want) in firsts.iter().zip(expected) {
            assert!(got.distance(want) < 1e-4, "{got:?} != {want:?}");
        }
    }

    #[test]
    fn test_preview_clears_then_draws_at_center() {
        let mut surface = ShapeLog::new(64, 32);
        draw_preview(&mut surface, BrushType::Circle, 6.0, Color::BLACK, Color::WHITE);

        assert_eq!(surface.rects, vec![(0, 0, 64, 32, Color::BLACK)]);
        assert_eq!(surface.circles, vec![(Point::new(32.0, 16.0), 6.0, Color::WHITE)]);
    }
}
