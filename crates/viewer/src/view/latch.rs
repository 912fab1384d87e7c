use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot "already started" flag guarding a view's initial load.
#[derive(Debug, Default)]
pub struct LoadLatch {
    started: AtomicBool,
}

impl LoadLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once, for the first caller.
    pub fn try_start(&self) -> bool {
        self.started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }
}
