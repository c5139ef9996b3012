//! Scan feedback collaborator
//!
//! The scanner signals each gate-passing scan with a tactile/audio cue.
//! The cue itself (vibration, beep) belongs to the embedding platform; this
//! crate only defines the seam and notifies it fire-and-forget.

/// Outward interface for the scan cue
///
/// Implementations must be cheap and non-blocking; the scanner calls these
/// synchronously on the scan path and ignores any outcome.
pub trait FeedbackEmitter: Send + Sync {
    /// A scan passed the cooldown gate
    fn notify_success(&self);

    /// A scan was rejected as invalid
    fn notify_error(&self);
}

/// No-op emitter for callers without a feedback surface
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFeedback;

impl FeedbackEmitter for NullFeedback {
    fn notify_success(&self) {}

    fn notify_error(&self) {}
}
