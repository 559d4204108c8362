//! Stroke recording for the stipple painting engine.
//!
//! This module provides:
//! - [`RecordingBuffer`] - Ordered, session-relative record of every stamp
//! - [`RecordingEvent`] - Change notifications for presentation layers
//! - [`Clock`] - Injectable time source ([`SystemClock`], [`ManualClock`])
//!
//! A session runs from activating an image to activating the next one.
//! Records are kept in the order they were stamped, which is also the order
//! they would be replayed in.

mod clock;
mod events;
mod recorder;

pub use clock::{Clock, ManualClock, SystemClock};
pub use events::RecordingEvent;
pub use recorder::RecordingBuffer;
