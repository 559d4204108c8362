//! Events emitted when the recording buffer changes.

/// Events emitted when the recording buffer changes.
///
/// These let a presentation layer keep a sample counter up to date without
/// polling the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingEvent {
    /// The buffer was emptied (a new session started).
    Cleared,
    /// A stamp action appended records.
    SamplesAdded { added: usize, total: usize },
}
