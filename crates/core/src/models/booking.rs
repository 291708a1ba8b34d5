//! Reservation model

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A confirmed reservation of a hall for a time range.
///
/// Created server-side; never deleted client-side. `rated` flips to true only
/// after a rating submission succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedHall {
    /// Reservation id (not the hall id)
    pub id: i64,
    pub hall_id: i64,
    pub hall_name: String,
    pub category: String,
    pub total_price: f64,
    pub rated: bool,
    pub time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Booked services, name -> price
    pub services: HashMap<String, f64>,
}

impl BookedHall {
    /// Mark this reservation as rated (call after the rating POST succeeds).
    pub fn mark_rated(&mut self) {
        self.rated = true;
    }
}
