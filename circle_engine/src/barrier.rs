//! Completion barrier over independently signaled handles.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A one-shot flag a listener raises when it has finished reacting.
#[derive(Debug, Clone, Default)]
pub struct CompletionHandle(Arc<AtomicBool>);

impl CompletionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark this listener as done. Signaling twice is harmless.
    pub fn signal(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_signaled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Waits until every handle it was created with has been signaled.
#[derive(Debug, Clone, Default)]
pub struct CompletionBarrier {
    handles: Vec<CompletionHandle>,
}

impl CompletionBarrier {
    /// Create a barrier for `listeners` listeners.
    ///
    /// Returns the barrier plus one handle per listener to hand out.
    /// With zero listeners the barrier is complete immediately.
    pub fn join_all(listeners: usize) -> (Self, Vec<CompletionHandle>) {
        let handles: Vec<CompletionHandle> =
            (0..listeners).map(|_| CompletionHandle::new()).collect();
        (
            Self {
                handles: handles.clone(),
            },
            handles,
        )
    }

    pub fn is_complete(&self) -> bool {
        self.handles.iter().all(CompletionHandle::is_signaled)
    }

    /// Number of listeners that have not signaled yet.
    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_signaled()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_barrier_is_complete() {
        let (barrier, handles) = CompletionBarrier::join_all(0);
        assert!(handles.is_empty());
        assert!(barrier.is_complete());
    }

    #[test]
    fn test_waits_for_every_handle() {
        let (barrier, handles) = CompletionBarrier::join_all(3);
        assert_eq!(barrier.pending(), 3);

        handles[0].signal();
        handles[2].signal();
        assert!(!barrier.is_complete());
        assert_eq!(barrier.pending(), 1);

        handles[1].signal();
        assert!(barrier.is_complete());
    }

    #[test]
    fn test_double_signal_counts_once() {
        let (barrier, handles) = CompletionBarrier::join_all(2);
        handles[0].signal();
        handles[0].signal();
        assert!(!barrier.is_complete());
    }
}
