//! Hall model - a bookable event venue

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A bookable event venue, flattened from the server's wire shape.
///
/// `image_url` is the first trimmed segment of the server's comma-joined image
/// list; it is `None` when the server sends an empty list, so callers must
/// handle absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hall {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub location: String,
    pub phone_number: String,
    pub description: String,
    pub capacity: u32,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Service name -> price. Insertion order carries no meaning.
    pub services: HashMap<String, f64>,
    /// Category name -> price.
    pub categories: HashMap<String, f64>,
    pub average_rating: f64,
    /// Ordered as served; possibly empty.
    pub ratings: Vec<HallRating>,
}

/// A single customer rating on a hall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HallRating {
    pub id: i64,
    pub rate: f64,
    pub comment: Option<String>,
    pub user_id: i64,
}

/// Partial update over a [`Hall`], shallow-merged field by field.
///
/// Unset fields leave the target untouched; `image_url` is two-level optional
/// so a patch can clear the image as well as replace it.
#[derive(Debug, Clone, Default)]
pub struct HallPatch {
    pub name: Option<String>,
    pub image_url: Option<Option<String>>,
    pub location: Option<String>,
    pub phone_number: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<u32>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub services: Option<HashMap<String, f64>>,
    pub categories: Option<HashMap<String, f64>>,
    pub average_rating: Option<f64>,
    pub ratings: Option<Vec<HallRating>>,
}

impl HallPatch {
    /// Overwrite the set fields onto `hall`, leaving the rest unchanged.
    pub fn apply(&self, hall: &mut Hall) {
        if let Some(name) = &self.name {
            hall.name = name.clone();
        }
        if let Some(image_url) = &self.image_url {
            hall.image_url = image_url.clone();
        }
        if let Some(location) = &self.location {
            hall.location = location.clone();
        }
        if let Some(phone_number) = &self.phone_number {
            hall.phone_number = phone_number.clone();
        }
        if let Some(description) = &self.description {
            hall.description = description.clone();
        }
        if let Some(capacity) = self.capacity {
            hall.capacity = capacity;
        }
        if let Some(price) = self.price {
            hall.price = price;
        }
        if let Some(latitude) = self.latitude {
            hall.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            hall.longitude = longitude;
        }
        if let Some(services) = &self.services {
            hall.services = services.clone();
        }
        if let Some(categories) = &self.categories {
            hall.categories = categories.clone();
        }
        if let Some(average_rating) = self.average_rating {
            hall.average_rating = average_rating;
        }
        if let Some(ratings) = &self.ratings {
            hall.ratings = ratings.clone();
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn average_rating(mut self, average_rating: f64) -> Self {
        self.average_rating = Some(average_rating);
        self
    }

    pub fn ratings(mut self, ratings: Vec<HallRating>) -> Self {
        self.ratings = Some(ratings);
        self
    }
}
