//! stipple painting engine - image-sampled airbrush stamping
//!
//! This crate provides the core of the painting toy:
//! - [`engine::BrushEngine`] - Pointer drag handling and the stamp action
//! - [`brush`] - Circle and splat shapes, brush preview, jitter sources
//! - [`coords`] - Screen, canvas and image coordinate mapping
//! - [`source::ImageSample`] - The image brush colors are sampled from
//! - [`surface`] - Rendering surface trait and an RGBA8 CPU surface
//! - [`log`] - Session-relative recording of every stamp

pub mod brush;
pub mod constants;
pub mod coords;
pub mod engine;
pub mod error;
pub mod log;
pub mod source;
pub mod surface;
pub mod types;

pub use brush::*;
pub use constants::*;
pub use coords::*;
pub use engine::*;
pub use error::*;
pub use log::*;
pub use source::*;
pub use surface::*;
pub use types::*;

pub use stipple_config::BrushConfig;
