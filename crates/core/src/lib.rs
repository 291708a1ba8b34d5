//! Hallbook Core Library
//!
//! Domain models, client-side state containers, and local durable storage for
//! the Hallbook booking client. The HTTP data-fetch layer lives in
//! `hallbook-api` and writes its results into the containers defined here.

pub mod error;
pub mod models;
pub mod state;
pub mod storage;

pub use error::{Error, Result};
pub use models::*;
pub use state::{AppSession, AuthSession, BookedIds, HallStore, SessionData};
pub use storage::{FavoriteStore, Favorites, FlagStore, LocalStore};
