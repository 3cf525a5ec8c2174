use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    entities::*,
    gateways::{
        geocode::{self, GeoCodedPlace, GeoCodingGateway},
        identity::{AuthError, AuthErrorCode, IdentityGateway},
        location::{DeviceLocationGateway, PositionError, PositionOptions},
        navigate::{NavigationGateway, Page},
        places::PlaceSearchGateway,
    },
};

enum GeoResponse {
    Resolve(GeoCodedPlace),
    NotFound,
    Fail,
}

pub struct DummyGeoGW {
    response: GeoResponse,
    queries: Mutex<Vec<String>>,
}

impl DummyGeoGW {
    fn new(response: GeoResponse) -> Self {
        Self {
            response,
            queries: Mutex::new(vec![]),
        }
    }

    pub fn resolving(pos: MapPoint, label: &str) -> Self {
        Self::new(GeoResponse::Resolve(GeoCodedPlace {
            pos,
            label: label.to_string(),
        }))
    }

    pub fn not_found() -> Self {
        Self::new(GeoResponse::NotFound)
    }

    pub fn failing() -> Self {
        Self::new(GeoResponse::Fail)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

impl GeoCodingGateway for DummyGeoGW {
    fn resolve_place(&self, query: &str) -> Result<GeoCodedPlace, geocode::Error> {
        self.queries.lock().push(query.to_string());
        match &self.response {
            GeoResponse::Resolve(place) => Ok(place.clone()),
            GeoResponse::NotFound => Err(geocode::Error::NotFound),
            GeoResponse::Fail => Err(geocode::Error::Failed(anyhow::anyhow!(
                "service unavailable"
            ))),
        }
    }
}

pub struct DummyPlaceGW {
    places: Option<Vec<TaggedPlace>>,
    requests: Mutex<Vec<(MapPoint, Distance)>>,
}

impl DummyPlaceGW {
    pub fn with_places(places: Vec<TaggedPlace>) -> Self {
        Self {
            places: Some(places),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn failing() -> Self {
        Self {
            places: None,
            requests: Mutex::new(vec![]),
        }
    }

    pub fn requests(&self) -> Vec<(MapPoint, Distance)> {
        self.requests.lock().clone()
    }
}

impl PlaceSearchGateway for DummyPlaceGW {
    fn places_around(&self, center: MapPoint, radius: Distance) -> Option<Vec<TaggedPlace>> {
        self.requests.lock().push((center, radius));
        self.places.clone()
    }
}

pub struct DummyLocationGW {
    supported: bool,
    position: Result<MapPoint, PositionError>,
    requested_options: Mutex<Vec<PositionOptions>>,
}

impl DummyLocationGW {
    fn new(supported: bool, position: Result<MapPoint, PositionError>) -> Self {
        Self {
            supported,
            position,
            requested_options: Mutex::new(vec![]),
        }
    }

    pub fn at(pos: MapPoint) -> Self {
        Self::new(true, Ok(pos))
    }

    pub fn failing(err: PositionError) -> Self {
        Self::new(true, Err(err))
    }

    pub fn unsupported() -> Self {
        Self::new(false, Err(PositionError::PositionUnavailable))
    }

    pub fn requested_options(&self) -> Vec<PositionOptions> {
        self.requested_options.lock().clone()
    }
}

impl DeviceLocationGateway for DummyLocationGW {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn current_position(&self, options: &PositionOptions) -> Result<MapPoint, PositionError> {
        self.requested_options.lock().push(*options);
        self.position
    }
}

/// Clones share their recorded state.
#[derive(Clone, Default)]
pub struct DummyIdentityGW {
    error: Option<AuthErrorCode>,
    calls: Arc<Mutex<Vec<&'static str>>>,
    profiles: Arc<Mutex<Vec<(String, UserProfile)>>>,
    current: Arc<Mutex<Option<AuthUser>>>,
}

impl DummyIdentityGW {
    pub fn failing(code: AuthErrorCode) -> Self {
        Self {
            error: Some(code),
            ..Default::default()
        }
    }

    /// A backend with a restored session.
    pub fn signed_in(email: &str) -> Self {
        let gw = Self::default();
        *gw.current.lock() = Some(Self::session(email).user);
        gw
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    pub fn profiles(&self) -> Vec<(String, UserProfile)> {
        self.profiles.lock().clone()
    }

    fn call(&self, name: &'static str) -> Result<(), AuthError> {
        self.calls.lock().push(name);
        match &self.error {
            Some(code) => Err(AuthError::new(code.clone(), "rejected")),
            None => Ok(()),
        }
    }

    fn session(email: &str) -> Session {
        Session {
            user: AuthUser {
                uid: format!("uid-{email}"),
                email: email.to_string(),
                display_name: None,
            },
            id_token: "token".to_string(),
        }
    }
}

impl IdentityGateway for DummyIdentityGW {
    fn create_user_with_email_and_password(
        &self,
        email: &str,
        _: &str,
    ) -> Result<Session, AuthError> {
        self.call("create_user_with_email_and_password")?;
        let session = Self::session(email);
        *self.current.lock() = Some(session.user.clone());
        Ok(session)
    }

    fn update_display_name(
        &self,
        session: &Session,
        display_name: &str,
    ) -> Result<Session, AuthError> {
        self.call("update_display_name")?;
        let mut session = session.clone();
        session.user.display_name = Some(display_name.to_string());
        *self.current.lock() = Some(session.user.clone());
        Ok(session)
    }

    fn sign_in_with_email_and_password(
        &self,
        email: &str,
        _: &str,
    ) -> Result<Session, AuthError> {
        self.call("sign_in_with_email_and_password")?;
        let session = Self::session(email);
        *self.current.lock() = Some(session.user.clone());
        Ok(session)
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        self.call("sign_out")?;
        *self.current.lock() = None;
        Ok(())
    }

    fn send_password_reset_email(&self, _: &str) -> Result<(), AuthError> {
        self.call("send_password_reset_email")
    }

    fn store_user_profile(&self, session: &Session, profile: &UserProfile) -> Result<(), AuthError> {
        self.call("store_user_profile")?;
        self.profiles
            .lock()
            .push((session.user.uid.clone(), profile.clone()));
        Ok(())
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.current.lock().clone()
    }
}

/// Clones share the current page and the recorded navigations.
#[derive(Clone, Default)]
pub struct DummyNavigationGW {
    current: Arc<Mutex<Page>>,
    navigations: Arc<Mutex<Vec<Page>>>,
}

impl DummyNavigationGW {
    pub fn on(page: Page) -> Self {
        Self {
            current: Arc::new(Mutex::new(page)),
            ..Default::default()
        }
    }

    pub fn navigations(&self) -> Vec<Page> {
        self.navigations.lock().clone()
    }
}

impl NavigationGateway for DummyNavigationGW {
    fn current_page(&self) -> Page {
        *self.current.lock()
    }

    fn navigate(&self, page: Page) {
        *self.current.lock() = page;
        self.navigations.lock().push(page);
    }
}
