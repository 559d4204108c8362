/// Number of jittered stamps drawn per paint action.
pub const STAMPS_PER_ACTION: usize = 4;

/// Arms radiating from the center of a splat.
pub const SPLAT_ARMS: usize = 4;

/// Circles drawn along each splat arm.
pub const SPLAT_CIRCLES_PER_ARM: usize = 4;

/// Distance from the splat center to the first arm circle.
pub const SPLAT_START_DISTANCE: f32 = 10.0;

/// Initial gap between consecutive arm circles.
pub const SPLAT_START_STEP: f32 = 5.0;

/// The arm gap is divided by this after every circle.
pub const SPLAT_STEP_DECAY: f32 = 1.5;

/// The arm circle radius is divided by this after every circle.
pub const SPLAT_RADIUS_DECAY: f32 = 2.0;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;
