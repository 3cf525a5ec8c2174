use super::{prelude::*, search_places, SEARCH_RADIUS};
use crate::{
    classify::PlacePolicy,
    fallback,
    gateways::{
        geocode::GeoCodingGateway,
        location::{DeviceLocationGateway, PositionError, PositionOptions},
        places::PlaceSearchGateway,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    /// Found by the place search service.
    Live,
    /// Bundled sample data, because nothing was found.
    Sample,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbySearch {
    pub origin: MapPoint,
    /// Description of the geocoded origin.
    pub label: Option<String>,
    pub organizations: Vec<Organization>,
    pub source: ResultSource,
}

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub radius: Distance,
    pub policy: PlacePolicy,
    pub position_options: PositionOptions,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            radius: SEARCH_RADIUS,
            policy: PlacePolicy::default(),
            position_options: PositionOptions::default(),
        }
    }
}

pub fn find_organizations_near<P>(
    places: &P,
    settings: &SearchSettings,
    origin: MapPoint,
    label: Option<String>,
) -> NearbySearch
where
    P: PlaceSearchGateway + ?Sized,
{
    let (organizations, source) =
        match search_places(places, &settings.policy, origin, settings.radius) {
            Some(organizations) if !organizations.is_empty() => (organizations, ResultSource::Live),
            _ => {
                log::info!("No organizations found around {origin}: use sample data");
                (fallback::sample_organizations(), ResultSource::Sample)
            }
        };
    NearbySearch {
        origin,
        label,
        organizations,
        source,
    }
}

pub fn find_organizations_by_text<G, P>(
    geocoding: &G,
    places: &P,
    settings: &SearchSettings,
    query: &str,
) -> Result<NearbySearch>
where
    G: GeoCodingGateway + ?Sized,
    P: PlaceSearchGateway + ?Sized,
{
    let query = query.trim();
    let place = geocoding.resolve_place(query)?;
    log::debug!("Resolved '{query}' to {} ({})", place.pos, place.label);
    Ok(find_organizations_near(
        places,
        settings,
        place.pos,
        Some(place.label),
    ))
}

pub fn find_organizations_at_device_location<L, P>(
    location: &L,
    places: &P,
    settings: &SearchSettings,
    secure_context: bool,
) -> Result<NearbySearch>
where
    L: DeviceLocationGateway + ?Sized,
    P: PlaceSearchGateway + ?Sized,
{
    if !location.is_supported() {
        return Err(Error::GeolocationUnsupported);
    }
    let origin = location
        .current_position(&settings.position_options)
        .map_err(|err| {
            log::warn!("Could not get the device location (code {}): {err}", err.code());
            match err {
                PositionError::PermissionDenied => Error::PermissionDenied,
                _ if !secure_context => Error::InsecureContext,
                _ => Error::PositionUnavailable,
            }
        })?;
    Ok(find_organizations_near(places, settings, origin, None))
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{DummyGeoGW, DummyLocationGW, DummyPlaceGW},
        *,
    };
    use hamk_entities::builders::*;

    const MEERUT: MapPoint = MapPoint::from_lat_lng_deg(28.9845, 77.7064);

    #[test]
    fn fall_back_to_sample_data() {
        let geo = DummyGeoGW::resolving(MEERUT, "Meerut, Uttar Pradesh, India");
        let places = DummyPlaceGW::with_places(vec![]);
        let res =
            find_organizations_by_text(&geo, &places, &SearchSettings::default(), "  Meerut ")
                .unwrap();
        assert_eq!(geo.queries(), vec!["Meerut".to_string()]);
        assert_eq!(res.origin, MEERUT);
        assert_eq!(res.label.as_deref(), Some("Meerut, Uttar Pradesh, India"));
        assert_eq!(res.source, ResultSource::Sample);
        assert_eq!(res.organizations.len(), 4);
    }

    #[test]
    fn fall_back_if_the_search_service_fails() {
        let res = find_organizations_near(
            &DummyPlaceGW::failing(),
            &SearchSettings::default(),
            MEERUT,
            None,
        );
        assert_eq!(res.source, ResultSource::Sample);
    }

    #[test]
    fn use_live_results() {
        let places = DummyPlaceGW::with_places(vec![TaggedPlace::build()
            .id("1")
            .pos(MEERUT)
            .tag("office", "ngo")
            .finish()]);
        let res = find_organizations_near(&places, &SearchSettings::default(), MEERUT, None);
        assert_eq!(res.source, ResultSource::Live);
        assert_eq!(res.organizations.len(), 1);
    }

    #[test]
    fn geocoding_errors() {
        let places = DummyPlaceGW::with_places(vec![]);
        let err = find_organizations_by_text(
            &DummyGeoGW::not_found(),
            &places,
            &SearchSettings::default(),
            "Atlantis",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Location not found");
        let err = find_organizations_by_text(
            &DummyGeoGW::failing(),
            &places,
            &SearchSettings::default(),
            "Meerut",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Failed to geocode");
        assert!(places.requests().is_empty());
    }

    #[test]
    fn device_location() {
        let location = DummyLocationGW::at(MEERUT);
        let places = DummyPlaceGW::with_places(vec![]);
        let res =
            find_organizations_at_device_location(&location, &places, &SearchSettings::default(), true)
                .unwrap();
        assert_eq!(res.origin, MEERUT);
        assert!(res.label.is_none());
        assert_eq!(location.requested_options(), vec![PositionOptions::default()]);
        assert_eq!(places.requests().len(), 1);
    }

    #[test]
    fn device_location_errors() {
        let places = DummyPlaceGW::with_places(vec![]);
        let settings = SearchSettings::default();
        let find = |location: &DummyLocationGW, secure| {
            find_organizations_at_device_location(location, &places, &settings, secure)
                .unwrap_err()
                .to_string()
        };
        let denied = DummyLocationGW::failing(PositionError::PermissionDenied);
        assert_eq!(
            find(&denied, false),
            "Location permission denied. Type your city above."
        );
        let timeout = DummyLocationGW::failing(PositionError::Timeout);
        assert_eq!(
            find(&timeout, false),
            "Geolocation requires HTTPS. Open via HTTPS or type your city."
        );
        assert_eq!(
            find(&timeout, true),
            "Could not get location. Type your city above."
        );
        assert_eq!(
            find(&DummyLocationGW::unsupported(), true),
            "Geolocation not supported. Type your city instead."
        );
        assert!(places.requests().is_empty());
    }
}
