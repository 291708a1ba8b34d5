//! Stale-response discarding
//!
//! The backend does not support request cancellation, so two quick successive
//! searches can resolve out of order. Screens take a generation token before
//! issuing a fetch and run the response through `accept`; anything superseded
//! in the meantime is dropped, so the UI always reflects the latest issued
//! query.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

/// Opaque token for one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Monotonic counter shared by all fetches of one screen/query surface.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    latest: AtomicU64,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new generation, superseding all earlier ones.
    pub fn begin(&self) -> Generation {
        Generation(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest.load(Ordering::SeqCst) == generation.0
    }

    /// Pass a resolved response through; stale generations come back `None`.
    pub fn accept<T>(&self, generation: Generation, value: T) -> Option<T> {
        if self.is_current(generation) {
            Some(value)
        } else {
            debug!(
                generation = generation.0,
                latest = self.latest.load(Ordering::SeqCst),
                "Discarding stale response"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_generation_is_accepted() {
        let counter = GenerationCounter::new();
        let current = counter.begin();
        assert_eq!(counter.accept(current, "result"), Some("result"));
    }

    #[test]
    fn superseded_generation_is_discarded() {
        let counter = GenerationCounter::new();
        let first = counter.begin();
        let second = counter.begin();

        // Out-of-order resolution: the older request finishes last
        assert_eq!(counter.accept(second, "new"), Some("new"));
        assert_eq!(counter.accept(first, "old"), None);
    }

    #[test]
    fn generations_are_monotonic() {
        let counter = GenerationCounter::new();
        let a = counter.begin();
        let b = counter.begin();
        assert_ne!(a, b);
        assert!(!counter.is_current(a));
        assert!(counter.is_current(b));
    }
}
