//! Shared configuration for stipple
//!
//! This crate provides the single source of truth for brush limits and
//! the colors used when clearing the canvas and drawing the brush preview.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default upper bound on the brush radius in pixels
pub const DEFAULT_MAX_BRUSH_SIZE: f32 = 20.0;

/// Default number of selectable brush types (circle, splat)
pub const DEFAULT_BRUSH_TYPE_COUNT: u8 = 2;

/// Largest brush type count the engine knows how to draw
pub const MAX_BRUSH_TYPE_COUNT: u8 = 2;

/// Default brush radius in pixels
pub const DEFAULT_INITIAL_RADIUS: f32 = 10.0;

/// Wheel delta reported for one notch of a mouse wheel
pub const DEFAULT_WHEEL_DELTA_UNIT: f32 = 120.0;

/// Errors produced while loading or validating a [`BrushConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Brush engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Largest radius the brush may be set to
    pub max_brush_size: f32,
    /// Number of brush types reachable by cycling
    pub brush_type_count: u8,
    /// Radius the brush starts with
    pub initial_radius: f32,
    /// Jitter spread as a multiple of the brush radius
    pub spread_scale: f32,
    /// Wheel delta that changes the radius by one pixel
    pub wheel_delta_unit: f32,
    /// Canvas clear color
    pub clear_color: [u8; 3],
    /// Color of the brush shape in the preview
    pub preview_color: [u8; 3],
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            max_brush_size: DEFAULT_MAX_BRUSH_SIZE,
            brush_type_count: DEFAULT_BRUSH_TYPE_COUNT,
            initial_radius: DEFAULT_INITIAL_RADIUS,
            spread_scale: 1.0,
            wheel_delta_unit: DEFAULT_WHEEL_DELTA_UNIT,
            clear_color: [0, 0, 0],
            preview_color: [255, 255, 255],
        }
    }
}

impl BrushConfig {
    /// Create a config with the given brush limits and default colors
    pub fn new(max_brush_size: f32, brush_type_count: u8) -> Self {
        Self {
            max_brush_size,
            brush_type_count,
            ..Self::default()
        }
    }

    /// Parse a config from JSON. Missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&data)
    }

    /// Check that every field is usable by the engine
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_brush_size.is_finite() || self.max_brush_size < 1.0 {
            return Err(ConfigError::Invalid {
                field: "max_brush_size",
                reason: format!("must be a finite value >= 1, got {}", self.max_brush_size),
            });
        }
        if self.brush_type_count == 0 || self.brush_type_count > MAX_BRUSH_TYPE_COUNT {
            return Err(ConfigError::Invalid {
                field: "brush_type_count",
                reason: format!(
                    "must be in 1..={}, got {}",
                    MAX_BRUSH_TYPE_COUNT, self.brush_type_count
                ),
            });
        }
        if !self.initial_radius.is_finite() {
            return Err(ConfigError::Invalid {
                field: "initial_radius",
                reason: "must be finite".to_string(),
            });
        }
        if !self.spread_scale.is_finite() || self.spread_scale < 0.0 {
            return Err(ConfigError::Invalid {
                field: "spread_scale",
                reason: format!("must be a finite value >= 0, got {}", self.spread_scale),
            });
        }
        if !self.wheel_delta_unit.is_finite() || self.wheel_delta_unit <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "wheel_delta_unit",
                reason: format!("must be positive, got {}", self.wheel_delta_unit),
            });
        }
        Ok(())
    }

    /// Clamp a radius to `[1, max_brush_size]`
    pub fn clamp_radius(&self, radius: f32) -> f32 {
        radius.max(1.0).min(self.max_brush_size)
    }
}
