//! Search filter criteria

use serde::{Deserialize, Serialize};

/// Sort mode for hall search results. The wire encoding is three mutually
/// exclusive boolean flags, so at most one mode may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Personalized ordering; needs the user id.
    Recommendation,
    /// Nearest-first; needs device coordinates and a radius.
    Proximity,
    /// Cheapest-first.
    Price,
}

/// Filter criteria a screen hands to the hall search.
///
/// Both ranges are ascending `(min, max)` tuples; passing `min > max` is a
/// caller bug (debug-asserted in the constructors, not handled defensively).
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub price_range: (u64, u64),
    pub capacity_range: (u32, u32),
    /// Selected location, if any.
    pub location: Option<String>,
    /// Selected category, if any.
    pub category: Option<String>,
    pub sort: Option<SortMode>,
    /// Search radius in kilometers; only meaningful with proximity sort.
    pub radius_km: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price_range: (500, 3_000),
            capacity_range: (10, 200),
            location: None,
            category: None,
            sort: None,
            radius_km: 50.0,
        }
    }
}

impl FilterCriteria {
    /// Wide-open ranges for the browse-all screen.
    pub fn broad() -> Self {
        Self {
            price_range: (0, 10_000_000),
            capacity_range: (0, 100_000),
            ..Default::default()
        }
    }

    pub fn with_price_range(mut self, min: u64, max: u64) -> Self {
        debug_assert!(min <= max, "price range must be ascending");
        self.price_range = (min, max);
        self
    }

    pub fn with_capacity_range(mut self, min: u32, max: u32) -> Self {
        debug_assert!(min <= max, "capacity range must be ascending");
        self.capacity_range = (min, max);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = Some(sort);
        self
    }
}
