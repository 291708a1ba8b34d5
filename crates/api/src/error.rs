//! API error types

use crate::geo::LocationError;

/// API result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the data-fetch layer.
///
/// Fetch functions raise and let the calling screen decide the user-visible
/// treatment; there is no central error boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure: connection refused, timeout, DNS.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response, carrying the server's error payload when present.
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Geolocation permission was denied; the request never reached the
    /// network.
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),
}

impl Error {
    /// HTTP status of a `Status` error, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<LocationError> for Error {
    fn from(e: LocationError) -> Self {
        match e {
            LocationError::PermissionDenied => Error::PermissionDenied,
            LocationError::Unavailable(reason) => Error::LocationUnavailable(reason),
        }
    }
}
