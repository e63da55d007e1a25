use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation handle for a single outbound request.
///
/// Cancelling before the request resolves suppresses its completion action;
/// cancelling after it resolved is a harmless no-op. Clones share the flag,
/// so the reducer can keep one end in state while the effect task carries
/// the other.
#[derive(Clone, Debug, Default)]
pub struct RequestHandle {
    cancelled: Arc<AtomicBool>,
}

impl RequestHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
