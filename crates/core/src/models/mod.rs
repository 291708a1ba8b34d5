//! Data models for Hallbook

mod booking;
mod filter;
mod hall;
mod user;

pub use booking::*;
pub use filter::*;
pub use hall::*;
pub use user::*;
