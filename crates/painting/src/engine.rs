//! The brush engine
//!
//! This module connects:
//! - Pointer input (`paint_start`, `paint_move`, `paint_end`)
//! - Jittered stamping with colors sampled from the active image
//! - The canvas and brush preview surfaces
//! - The recording buffer
//!
//! The engine is single-threaded; every operation runs to completion on the
//! caller's thread.

use stipple_config::BrushConfig;
use tracing::{debug, warn};

use crate::brush::{JitterSource, draw_brush, draw_preview};
use crate::constants::STAMPS_PER_ACTION;
use crate::coords::{to_image_coords, truncate};
use crate::error::PaintError;
use crate::log::{Clock, RecordingBuffer, RecordingEvent};
use crate::source::ImageSample;
use crate::surface::Surface;
use crate::types::{BrushType, Color, PixelCoord, Point, StrokeRecord};

/// Pointer drag state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A drag is in progress; `anchor` is the last stamped position
    Dragging { anchor: Point },
}

type RecordingListener = Box<dyn FnMut(RecordingEvent)>;

/// Turns pointer positions into clusters of image-colored stamps
pub struct BrushEngine<S, J, C> {
    config: BrushConfig,
    /// Surface stamps are drawn on
    canvas: S,
    /// Surface showing the current brush shape
    preview: S,
    /// Image colors are sampled from
    image: ImageSample,
    jitter: J,
    clock: C,
    radius: f32,
    brush_type: BrushType,
    drag: DragState,
    recording: RecordingBuffer,
    listeners: Vec<RecordingListener>,
}

impl<S, J, C> std::fmt::Debug for BrushEngine<S, J, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrushEngine")
            .field("image_size", &self.image.size())
            .field("radius", &self.radius)
            .field("brush_type", &self.brush_type)
            .field("drag", &self.drag)
            .field("recorded", &self.recording.len())
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}

impl<S: Surface, J: JitterSource, C: Clock> BrushEngine<S, J, C> {
    /// Create an engine, activate `image` and draw the brush preview
    pub fn new(
        config: BrushConfig,
        canvas: S,
        preview: S,
        image: ImageSample,
        jitter: J,
        clock: C,
    ) -> Result<Self, PaintError> {
        config.validate()?;
        let radius = config.clamp_radius(config.initial_radius);

        let mut engine = Self {
            config,
            canvas,
            preview,
            image,
            jitter,
            clock,
            radius,
            brush_type: BrushType::default(),
            drag: DragState::Idle,
            recording: RecordingBuffer::new(),
            listeners: Vec::new(),
        };

        engine.activate_current_image();
        engine.draw_brush_preview();
        Ok(engine)
    }

    /// Make `image` the color source for a new session.
    ///
    /// Resizes the canvas to the image, clears it and empties the recording
    /// buffer. `ImageSample` guarantees non-zero dimensions, so zero-size
    /// images are already rejected with `PaintError::InvalidImage` when the
    /// sample is built.
    pub fn set_active_image(&mut self, image: ImageSample) -> &ImageSample {
        self.image = image;
        self.activate_current_image();
        &self.image
    }

    fn activate_current_image(&mut self) {
        let (width, height) = self.image.size();
        debug!("BrushEngine: activating {}x{} image", width, height);

        self.canvas.resize(width, height);
        self.canvas.clear(self.clear_color());
        self.drag = DragState::Idle;

        self.recording.clear();
        self.emit(RecordingEvent::Cleared);
    }

    /// Begin a drag and stamp at `position`
    pub fn paint_start(&mut self, position: Point) -> Vec<StrokeRecord> {
        debug!(
            "BrushEngine::paint_start at ({:.1}, {:.1})",
            position.x, position.y
        );
        self.drag = DragState::Dragging { anchor: position };
        self.stamp_action(position, self.radius)
    }

    /// Stamp at `position` if a drag is in progress. Ignored otherwise.
    pub fn paint_move(&mut self, position: Point) -> Vec<StrokeRecord> {
        let DragState::Dragging { .. } = self.drag else {
            return Vec::new();
        };
        self.drag = DragState::Dragging { anchor: position };
        self.stamp_action(position, self.radius)
    }

    /// End the current drag
    pub fn paint_end(&mut self) {
        if self.is_dragging() {
            debug!("BrushEngine::paint_end");
        }
        self.drag = DragState::Idle;
    }

    /// Draw one airbrush action around `position` and record each stamp.
    ///
    /// Stamps are scattered uniformly within `radius * spread_scale` of
    /// `position` on both axes, truncated to whole pixels, and colored by the
    /// image pixel under the stamp. Always returns `STAMPS_PER_ACTION` records.
    pub fn stamp_action(&mut self, position: Point, radius: f32) -> Vec<StrokeRecord> {
        let spread = radius * self.config.spread_scale;
        let canvas_size = (self.canvas.width(), self.canvas.height());
        let image_size = self.image.size();

        let mut records = Vec::with_capacity(STAMPS_PER_ACTION);
        for _ in 0..STAMPS_PER_ACTION {
            let dx = self.jitter.next_offset() * spread;
            let dy = self.jitter.next_offset() * spread;
            let point = truncate(position + Point::new(dx, dy));

            let image_pos = to_image_coords(point, canvas_size, image_size);
            let color = self.sample_color(image_pos);
            draw_brush(&mut self.canvas, self.brush_type, point, radius, color);

            let now = self.clock.now_ms();
            records.push(self.recording.record(now, point, color, radius));
        }

        self.emit(RecordingEvent::SamplesAdded {
            added: records.len(),
            total: self.recording.len(),
        });
        records
    }

    /// Sample the active image, falling back to the nearest edge pixel
    fn sample_color(&self, pos: PixelCoord) -> Color {
        match self.image.sample_color(pos) {
            Ok(color) => color,
            Err(err) => {
                warn!("BrushEngine: {}, clamping to image edge", err);
                self.image.sample_color_clamped(pos)
            }
        }
    }

    /// Advance to the next brush type and redraw the preview
    pub fn cycle_brush_type(&mut self) -> BrushType {
        self.brush_type = self.brush_type.next(self.config.brush_type_count);
        debug!("BrushEngine: brush type -> {:?}", self.brush_type);
        self.draw_brush_preview();
        self.brush_type
    }

    /// Grow or shrink the brush by a wheel delta (one notch per
    /// `wheel_delta_unit`), clamped to `[1, max_brush_size]`
    pub fn adjust_radius(&mut self, wheel_delta: f32) -> f32 {
        if !wheel_delta.is_finite() {
            warn!("BrushEngine: ignoring non-finite wheel delta {}", wheel_delta);
            return self.radius;
        }
        let delta = wheel_delta / self.config.wheel_delta_unit;
        self.set_radius(self.radius + delta)
    }

    /// Set the brush radius, clamped to `[1, max_brush_size]`
    pub fn set_radius(&mut self, radius: f32) -> f32 {
        self.radius = self.config.clamp_radius(radius);
        self.draw_brush_preview();
        self.radius
    }

    /// Redraw the brush shape on the preview surface
    pub fn draw_brush_preview(&mut self) {
        let background = self.clear_color();
        let color = Color::from(self.config.preview_color);
        draw_preview(
            &mut self.preview,
            self.brush_type,
            self.radius,
            background,
            color,
        );
    }

    /// Register a callback for recording buffer changes
    pub fn add_recording_listener<F>(&mut self, listener: F)
    where
        F: FnMut(RecordingEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: RecordingEvent) {
        for listener in self.listeners.iter_mut() {
            listener(event);
        }
    }

    fn clear_color(&self) -> Color {
        Color::from(self.config.clear_color)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn brush_type(&self) -> BrushType {
        self.brush_type
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn recording(&self) -> &RecordingBuffer {
        &self.recording
    }

    pub fn canvas(&self) -> &S {
        &self.canvas
    }

    pub fn preview(&self) -> &S {
        &self.preview
    }

    pub fn image(&self) -> &ImageSample {
        &self.image
    }

    pub fn config(&self) -> &BrushConfig {
        &self.config
    }
}
