use std::time::Duration;

use hamk_entities::geo::MapPoint;
use thiserror::Error;
use url::Url;

pub const DEFAULT_POSITION_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    /// The maximum age of a cached position that is acceptable.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: DEFAULT_POSITION_TIMEOUT,
            maximum_age: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("User denied the request for geolocation")]
    PermissionDenied,
    #[error("Location information is unavailable")]
    PositionUnavailable,
    #[error("The request to get the current position timed out")]
    Timeout,
}

impl PositionError {
    /// The numeric error code as known from the W3C geolocation API.
    pub const fn code(self) -> u16 {
        match self {
            Self::PermissionDenied => 1,
            Self::PositionUnavailable => 2,
            Self::Timeout => 3,
        }
    }
}

pub trait DeviceLocationGateway {
    fn is_supported(&self) -> bool {
        true
    }

    /// Request the current position once.
    fn current_position(&self, options: &PositionOptions) -> Result<MapPoint, PositionError>;
}

/// Geolocation is only available in secure contexts:
/// pages served via HTTPS or from `localhost`.
pub fn is_secure_context(origin: &Url) -> bool {
    origin.scheme() == "https" || origin.host_str() == Some("localhost")
}
