//! Animation-frame request bookkeeping

use std::cell::Cell;

/// Id of the outstanding animation-frame request, if any.
///
/// Lives outside the session borrow, so a frame callback can always mark its
/// request as consumed, including when it has to skip the frame.
#[derive(Debug, Default)]
pub struct PendingFrame {
    id: Cell<Option<i32>>,
}

impl PendingFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.id.get().is_some()
    }

    /// A new request is due only for a running session with none outstanding
    pub fn needs_request(&self, active: bool) -> bool {
        active && !self.is_pending()
    }

    pub fn requested(&self, id: i32) {
        self.id.set(Some(id));
    }

    /// The request fired; its id is spent
    pub fn fired(&self) {
        self.id.set(None);
    }

    /// Id to cancel, if one is outstanding
    pub fn take(&self) -> Option<i32> {
        self.id.take()
    }
}
