use std::sync::{Mutex, PoisonError};

/// Fire-and-forget invalidation signal consumed by the external renderer.
///
/// The core never retries and expects no acknowledgment; the payload is only
/// "recompute render for this slide". Backpressure, batching and retry are
/// the renderer's concern.
pub trait ChangeNotifier {
    /// The resolved layout or content assignment of `slide_id` changed.
    fn slide_changed(&self, slide_id: &str);
}

/// Notifier that drops every signal. For callers that render unconditionally.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl ChangeNotifier for NullNotifier {
    fn slide_changed(&self, _slide_id: &str) {}
}

/// Notifier that records every signal, in order. Used by tests and by
/// diagnostics that want to inspect invalidation traffic.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// New empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Slide ids signalled so far, in order.
    pub fn events(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ChangeNotifier for RecordingNotifier {
    fn slide_changed(&self, slide_id: &str) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(slide_id.to_owned());
    }
}

#[cfg(test)]
#[path = "../tests/unit/notify.rs"]
mod tests;
