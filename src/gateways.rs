use anyhow::{anyhow, Result};
use hamk_core::{
    entities::MapPoint,
    gateways::{
        location::DeviceLocationGateway,
        navigate::{NavigationGateway, Page},
    },
    usecases::SearchGateways,
};
use hamk_gateways::{
    device_location::{ConfiguredLocation, Permission},
    firebase::{self, Firebase},
    nominatim::Nominatim,
    overpass::Overpass,
};
use parking_lot::Mutex;

use crate::config::{Config, FirebaseConfig, GeocodingGateway, IdentityGateway, PlacesGateway};

pub fn geocoding_gateway(cfg: &Config) -> Result<Nominatim> {
    match &cfg.geocoding.gateway {
        GeocodingGateway::Nominatim {
            api_url,
            user_agent,
        } => {
            log::debug!("Use Nominatim geocoding gateway ({api_url})");
            Ok(Nominatim::new(api_url.clone(), user_agent)?)
        }
    }
}

pub fn place_search_gateway(cfg: &Config) -> Result<Overpass> {
    match &cfg.places.gateway {
        PlacesGateway::Overpass {
            api_url,
            user_agent,
            query_timeout,
        } => {
            log::debug!("Use Overpass place search gateway ({api_url})");
            let seconds = u32::try_from(query_timeout.as_secs()).unwrap_or(u32::MAX);
            Ok(Overpass::new(api_url.clone(), user_agent)?.with_query_timeout(seconds))
        }
    }
}

/// The position given on the command line takes precedence.
pub fn device_location_gateway(
    cfg: &Config,
    position: Option<MapPoint>,
    permission: Option<Permission>,
) -> ConfiguredLocation {
    let position = position.or(cfg.device_location.position);
    let permission = permission.unwrap_or(cfg.device_location.permission);
    ConfiguredLocation::new(permission, position)
}

pub fn search_gateways<L>(cfg: &Config, location: L) -> Result<SearchGateways>
where
    L: DeviceLocationGateway + Send + Sync + 'static,
{
    Ok(SearchGateways {
        geocoding: Box::new(geocoding_gateway(cfg)?),
        places: Box::new(place_search_gateway(cfg)?),
        location: Box::new(location),
    })
}

pub fn identity_gateway(cfg: &Config) -> Result<Firebase> {
    let Some(IdentityGateway::Firebase(FirebaseConfig {
        api_key,
        project_id,
        identity_api_url,
        firestore_api_url,
    })) = &cfg.identity.gateway
    else {
        return Err(anyhow!("No identity gateway configured"));
    };
    let api_key = api_key
        .as_ref()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| anyhow!("Missing Firebase API key"))?;
    let config = firebase::FirebaseConfig {
        api_key: api_key.clone(),
        project_id: project_id.clone(),
        identity_api_url: identity_api_url.clone(),
        firestore_api_url: firestore_api_url.clone(),
    };
    log::debug!("Use Firebase identity gateway");
    Ok(Firebase::new(config)?)
}

/// Pages are not rendered by the terminal, navigating
/// only keeps track of the current page.
#[derive(Debug)]
pub struct TerminalNavigation {
    current: Mutex<Page>,
}

impl TerminalNavigation {
    pub fn new(page: Page) -> Self {
        Self {
            current: Mutex::new(page),
        }
    }
}

impl NavigationGateway for TerminalNavigation {
    fn current_page(&self) -> Page {
        *self.current.lock()
    }

    fn navigate(&self, page: Page) {
        log::info!("Navigate to {}", page.path());
        *self.current.lock() = page;
    }
}
