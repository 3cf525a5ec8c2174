use hamk_entities::geo::MapPoint;
use thiserror::Error;

/// A place resolved from a free-text query.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoCodedPlace {
    pub pos: MapPoint,
    /// Human readable description of the place.
    pub label: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to geocode")]
    Failed(#[source] anyhow::Error),
    #[error("Location not found")]
    NotFound,
}

pub trait GeoCodingGateway {
    /// Resolve the first matching place.
    ///
    /// Only a single request is made, failures are not retried.
    fn resolve_place(&self, query: &str) -> Result<GeoCodedPlace, Error>;
}
