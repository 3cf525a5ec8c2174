use thiserror::Error;

use crate::gateways::{geocode, identity::AuthError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Geocode(#[from] geocode::Error),
    #[error("Location permission denied. Type your city above.")]
    PermissionDenied,
    #[error("Geolocation requires HTTPS. Open via HTTPS or type your city.")]
    InsecureContext,
    #[error("Could not get location. Type your city above.")]
    PositionUnavailable,
    #[error("Geolocation not supported. Type your city instead.")]
    GeolocationUnsupported,
    #[error("Authentication service not initialized. Please refresh the page.")]
    NotInitialized,
    #[error(transparent)]
    Auth(#[from] AuthError),
}
