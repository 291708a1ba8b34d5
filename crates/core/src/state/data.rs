//! Session-scoped data slice
//!
//! Profile, search query, and hall selection for the running session. The
//! selection is an id into [`HallStore`](super::HallStore) rather than a
//! second copy of the record, so hall data has a single source of truth.

use crate::models::UserProfile;

/// Plain setter/getter container for session-scoped UI data.
#[derive(Debug, Default)]
pub struct SessionData {
    profile: Option<UserProfile>,
    search_query: String,
    selected_hall: Option<i64>,
}

impl SessionData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_profile(&mut self, profile: Option<UserProfile>) {
        self.profile = profile;
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn select_hall(&mut self, id: Option<i64>) {
        self.selected_hall = id;
    }

    pub fn selected_hall(&self) -> Option<i64> {
        self.selected_hall
    }

    /// Drop everything session-scoped (used at logout).
    pub fn clear(&mut self) {
        self.profile = None;
        self.search_query.clear();
        self.selected_hall = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_resets_everything() {
        let mut data = SessionData::new();
        data.set_search_query("wedding hall");
        data.select_hall(Some(3));
        data.clear();
        assert_eq!(data.search_query(), "");
        assert!(data.selected_hall().is_none());
        assert!(data.profile().is_none());
    }
}
