//! Server wire shapes and reshaping
//!
//! The backend speaks camelCase JSON with Spring-style pagination
//! (`content` / `totalPages` / `totalElements`). Everything here is a pure,
//! total mapping from those records to the flat client models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use hallbook_core::{BookedHall, Hall, HallRating};
use serde::{Deserialize, Serialize};

/// One page of a paginated server response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
// The defaulted fields would otherwise make serde demand `T: Default`.
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct Page<T> {
    #[serde(default)]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
}

/// A hall as the server sends it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HallRecord {
    pub id: i64,
    pub name: String,
    /// Comma-joined image URL list; may be empty.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub services: HashMap<String, f64>,
    #[serde(default)]
    pub categories: HashMap<String, f64>,
    #[serde(default)]
    pub average_rating: f64,
    // The backend capitalizes this one field.
    #[serde(default, rename = "HallRatings")]
    pub hall_ratings: Vec<RatingRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    pub id: i64,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub user_id: i64,
}

/// A reservation as the server sends it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedRecord {
    pub id: i64,
    pub hall_id: i64,
    #[serde(default)]
    pub hall_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub rated: bool,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub services: HashMap<String, f64>,
}

/// Partial hall update for `PUT /halls/{id}`
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HallUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<HashMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<HashMap<String, f64>>,
}

/// Reshaped hall page handed back to screens
#[derive(Debug)]
pub struct HallPage {
    pub halls: Vec<Hall>,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl HallPage {
    pub fn empty() -> Self {
        Self {
            halls: Vec::new(),
            total_pages: 0,
            total_elements: 0,
        }
    }
}

impl From<Page<HallRecord>> for HallPage {
    fn from(page: Page<HallRecord>) -> Self {
        Self {
            halls: page.content.into_iter().map(reshape_hall).collect(),
            total_pages: page.total_pages,
            total_elements: page.total_elements,
        }
    }
}

/// Reshaped reservation page
#[derive(Debug)]
pub struct BookedPage {
    pub halls: Vec<BookedHall>,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl BookedPage {
    pub fn empty() -> Self {
        Self {
            halls: Vec::new(),
            total_pages: 0,
            total_elements: 0,
        }
    }
}

impl From<Page<BookedRecord>> for BookedPage {
    fn from(page: Page<BookedRecord>) -> Self {
        Self {
            halls: page.content.into_iter().map(reshape_booked).collect(),
            total_pages: page.total_pages,
            total_elements: page.total_elements,
        }
    }
}

/// First trimmed segment of a comma-joined URL list, `None` when empty.
pub fn first_image(list: &str) -> Option<String> {
    list.split(',')
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Flatten a server hall record into the client model.
pub fn reshape_hall(record: HallRecord) -> Hall {
    Hall {
        id: record.id,
        name: record.name,
        image_url: first_image(&record.image),
        location: record.location,
        phone_number: record.phone_number,
        description: record.description,
        capacity: record.capacity,
        price: record.price,
        latitude: record.latitude,
        longitude: record.longitude,
        services: record.services,
        categories: record.categories,
        average_rating: record.average_rating,
        ratings: record
            .hall_ratings
            .into_iter()
            .map(|r| HallRating {
                id: r.id,
                rate: r.rate,
                comment: r.comment,
                user_id: r.user_id,
            })
            .collect(),
    }
}

/// Flatten a server reservation record into the client model.
pub fn reshape_booked(record: BookedRecord) -> BookedHall {
    BookedHall {
        id: record.id,
        hall_id: record.hall_id,
        hall_name: record.hall_name,
        category: record.category,
        total_price: record.total_price,
        rated: record.rated,
        time: record.time,
        end_time: record.end_time,
        services: record.services,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_image_takes_first_trimmed_segment() {
        assert_eq!(
            first_image("http://a.png, http://b.png"),
            Some("http://a.png".to_string())
        );
        assert_eq!(first_image("http://only.png"), Some("http://only.png".to_string()));
        assert_eq!(first_image(""), None);
        assert_eq!(first_image("   "), None);
    }

    #[test]
    fn hall_record_reshapes_flat() {
        let json = r#"{
            "id": 12,
            "name": "Crystal Garden",
            "image": "http://a.png, http://b.png",
            "location": "Amman",
            "phoneNumber": "0790000000",
            "description": "Garden venue",
            "capacity": 300,
            "price": 1500.0,
            "latitude": 31.95,
            "longitude": 35.91,
            "services": {"Catering": 200.0},
            "categories": {"Wedding": 1500.0},
            "averageRating": 4.5,
            "HallRatings": [{"id": 1, "rate": 5.0, "comment": "great", "userId": 3}]
        }"#;

        let record: HallRecord = serde_json::from_str(json).unwrap();
        let hall = reshape_hall(record);

        assert_eq!(hall.id, 12);
        assert_eq!(hall.image_url.as_deref(), Some("http://a.png"));
        assert_eq!(hall.services.get("Catering"), Some(&200.0));
        assert_eq!(hall.average_rating, 4.5);
        assert_eq!(hall.ratings.len(), 1);
        assert_eq!(hall.ratings[0].user_id, 3);
    }

    #[test]
    fn hall_record_tolerates_missing_optionals() {
        let json = r#"{"id": 1, "name": "Bare"}"#;
        let record: HallRecord = serde_json::from_str(json).unwrap();
        let hall = reshape_hall(record);

        assert!(hall.image_url.is_none());
        assert_eq!(hall.average_rating, 0.0);
        assert!(hall.ratings.is_empty());
    }

    #[test]
    fn booked_record_parses_times() {
        let json = r#"{
            "id": 4,
            "hallId": 12,
            "hallName": "Crystal Garden",
            "category": "Wedding",
            "totalPrice": 1700.0,
            "rated": false,
            "time": "2026-09-01T18:00:00Z",
            "endTime": null,
            "services": {}
        }"#;

        let record: BookedRecord = serde_json::from_str(json).unwrap();
        let booked = reshape_booked(record);

        assert_eq!(booked.hall_id, 12);
        assert!(booked.end_time.is_none());
        assert!(!booked.rated);
        assert_eq!(booked.time.to_rfc3339(), "2026-09-01T18:00:00+00:00");
    }

    #[test]
    fn page_defaults_when_fields_missing() {
        let page: Page<HallRecord> = serde_json::from_str("{}").unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_elements, 0);
    }

    // Page must deserialize over record types that carry no Default impl.
    #[test]
    fn page_parses_over_non_default_records() {
        let json = r#"{"content": [{"id": 1, "hallId": 2, "time": "2026-09-01T18:00:00Z"}]}"#;
        let page: Page<BookedRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].hall_id, 2);
        assert_eq!(page.total_pages, 0);
    }
}
