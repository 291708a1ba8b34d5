//! App flag persistence
//!
//! Currently a single flag: whether the app has run on this device before
//! (drives the one-time onboarding flow).

use tracing::warn;

use super::LocalStore;

const FIRST_RUN_KEY: &str = "first_run";

/// Device-scoped app flags
pub struct FlagStore<'a> {
    store: &'a LocalStore,
}

impl<'a> FlagStore<'a> {
    pub fn new(store: &'a LocalStore) -> Self {
        Self { store }
    }

    /// True until [`mark_ran`](Self::mark_ran) has been called on this device.
    /// Unreadable state counts as a first run.
    pub fn is_first_run(&self) -> bool {
        match self.store.get_raw(FIRST_RUN_KEY) {
            Ok(Some(raw)) => raw != "true",
            Ok(None) => true,
            Err(e) => {
                warn!(error = %e, "Failed to read first-run flag");
                true
            }
        }
    }

    /// Record that the onboarding flow has been shown.
    pub fn mark_ran(&self) {
        if let Err(e) = self.store.put_raw(FIRST_RUN_KEY, "true") {
            warn!(error = %e, "Failed to persist first-run flag");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_run_until_marked() {
        let store = LocalStore::open_in_memory().unwrap();
        assert!(store.flags().is_first_run());

        store.flags().mark_ran();
        assert!(!store.flags().is_first_run());
    }
}
