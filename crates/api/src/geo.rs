//! Device geolocation seam
//!
//! Proximity sort needs device coordinates before the request can be built.
//! The platform side (permission prompt, GPS) sits behind this trait so the
//! fetch path stays testable.

use async_trait::async_trait;

/// Device coordinates in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Geolocation failures
#[derive(Debug, Clone, thiserror::Error)]
pub enum LocationError {
    /// The user refused the permission prompt.
    #[error("permission denied")]
    PermissionDenied,

    #[error("unavailable: {0}")]
    Unavailable(String),
}

/// Source of the device's current position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_location(&self) -> std::result::Result<Coordinates, LocationError>;
}

/// Provider returning a fixed position. Useful for tests and for desktop
/// builds without a location service.
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_location(&self) -> std::result::Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}
