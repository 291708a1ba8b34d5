//! Hallbook API Library
//!
//! The data-fetch module: everything that leaves the device. Screens hand
//! over filter/search state, this crate composes the query, issues the HTTP
//! call, and reshapes the server's wire records into the flat client models
//! from `hallbook-core`.
//!
//! # Usage
//!
//! ```ignore
//! let client = ApiClient::new("https://api.example.com");
//!
//! let page = client
//!     .halls()
//!     .fetch_halls(1, 10, &FilterCriteria::default(), "wedding hall", None, token)
//!     .await?;
//!
//! session.halls.lock().unwrap().set(page.halls);
//! ```

pub mod admin;
pub mod assistant;
pub mod auth;
pub mod bookings;
pub mod client;
pub mod error;
pub mod favorites;
pub mod generation;
pub mod geo;
pub mod halls;
mod query;
pub mod uploads;
pub mod wire;

pub use client::ApiClient;
pub use error::{Error, Result};
pub use generation::{Generation, GenerationCounter};
pub use geo::{Coordinates, FixedLocation, LocationError, LocationProvider};
pub use wire::{BookedPage, HallPage};
