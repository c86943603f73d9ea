/// Live tracked-worker counter.
///
/// Only the coordinator changes the value. Search tasks read it, under the
/// same lock, to decide between asking for a new worker and recursing
/// inline. The lock is held for the read and comparison only.
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::error;

#[derive(Clone, Debug)]
pub struct WorkerCount(Arc<Mutex<usize>>);

impl WorkerCount {
    pub(crate) fn new(initial: usize) -> Self {
        Self(Arc::new(Mutex::new(initial)))
    }

    /// Current number of live tracked workers.
    pub fn get(&self) -> usize {
        *self.0.lock()
    }

    /// Admission decision: `true` if another tracked worker may be
    /// requested. The answer can be stale by the time the request reaches
    /// the coordinator, which makes the ceiling a soft limit.
    #[inline]
    pub(crate) fn admits(&self, ceiling: usize) -> bool {
        *self.0.lock() < ceiling
    }

    /// Returns the count after incrementing.
    pub(crate) fn increment(&self) -> usize {
        let mut count = self.0.lock();
        *count += 1;
        *count
    }

    /// Returns the count after decrementing. Never goes below zero.
    pub(crate) fn decrement(&self) -> usize {
        let mut count = self.0.lock();
        match count.checked_sub(1) {
            Some(n) => *count = n,
            None => error!("Worker count underflow: done signal with no live worker"),
        }
        *count
    }
}
