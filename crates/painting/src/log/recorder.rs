//! In-memory buffer of recorded stamps.

use tracing::trace;

use crate::types::{Color, Point, StrokeRecord};

/// Ordered record of every stamp drawn in the current session.
///
/// The session start time is taken from the first record appended after a
/// clear, so the first record always has timestamp 0. The buffer grows
/// without bound until it is cleared.
#[derive(Debug, Clone, Default)]
pub struct RecordingBuffer {
    records: Vec<StrokeRecord>,
    /// Wall time of the first record (None while empty)
    start_ms: Option<u64>,
}

impl RecordingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all records and forget the session start time
    pub fn clear(&mut self) {
        self.records.clear();
        self.start_ms = None;
    }

    /// Append a stamp observed at wall time `now_ms`
    pub fn record(&mut self, now_ms: u64, position: Point, color: Color, radius: f32) -> StrokeRecord {
        let start = *self.start_ms.get_or_insert(now_ms);
        let record = StrokeRecord {
            // A clock stepping backwards must not underflow
            timestamp_ms: now_ms.saturating_sub(start),
            position,
            color,
            radius,
        };
        trace!(
            "RecordingBuffer::record: #{} t={}ms at ({:.0}, {:.0})",
            self.records.len(),
            record.timestamp_ms,
            position.x,
            position.y
        );
        self.records.push(record);
        record
    }

    /// Records in playback order
    pub fn records(&self) -> &[StrokeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Wall time the session started, once anything has been recorded
    pub fn start_ms(&self) -> Option<u64> {
        self.start_ms
    }

    /// Time span between the first and last record
    pub fn duration_ms(&self) -> u64 {
        self.records.last().map(|r| r.timestamp_ms).unwrap_or(0)
    }

    /// Human-readable sample count, e.g. `"12 samples."`
    pub fn summary(&self) -> String {
        format!("{} samples.", self.records.len())
    }
}
