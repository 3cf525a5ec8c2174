use anyhow::{anyhow, Context as _, Result};
use hamk_core::{
    entities::{Distance, MapPoint},
    usecases::SEARCH_RADIUS,
};
use hamk_gateways::{device_location::Permission, firebase, nominatim, overpass};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};
use url::Url;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "hamk.toml";

const ENV_NAME_FIREBASE_API_KEY: &str = "FIREBASE_API_KEY";
const ENV_NAME_FIREBASE_PROJECT_ID: &str = "FIREBASE_PROJECT_ID";

pub struct Config {
    pub app: App,
    pub geocoding: Geocoding,
    pub places: Places,
    pub identity: Identity,
    pub device_location: DeviceLocation,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::default()
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        let api_key = env::var(ENV_NAME_FIREBASE_API_KEY).ok();
        let project_id = env::var(ENV_NAME_FIREBASE_PROJECT_ID).ok();
        if let Some(IdentityGateway::Firebase(cfg)) = &mut self.identity.gateway {
            if let Some(api_key) = api_key {
                cfg.api_key = Some(api_key);
            }
            if let Some(project_id) = project_id {
                cfg.project_id = Some(project_id);
            }
        }
    }
}

pub struct App {
    /// The origin the application is served from.
    pub origin: Url,
}

pub struct Geocoding {
    pub gateway: GeocodingGateway,
}

pub enum GeocodingGateway {
    Nominatim { api_url: Url, user_agent: String },
}

pub struct Places {
    pub gateway: PlacesGateway,
    pub radius: Distance,
}

pub enum PlacesGateway {
    Overpass {
        api_url: Url,
        user_agent: String,
        query_timeout: Duration,
    },
}

pub struct Identity {
    pub gateway: Option<IdentityGateway>,
}

pub enum IdentityGateway {
    Firebase(FirebaseConfig),
}

/// The API key is usually provided by the environment.
pub struct FirebaseConfig {
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub identity_api_url: String,
    pub firestore_api_url: String,
}

pub struct DeviceLocation {
    pub permission: Permission,
    pub position: Option<MapPoint>,
}

fn parse_url(url: &str, what: &str) -> Result<Url> {
    url.parse()
        .with_context(|| format!("Invalid {what} URL '{url}'"))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            app,
            geocoding,
            places,
            identity,
            device_location,
            gateway,
        } = from;
        let gateway = gateway.unwrap_or_default();

        let raw::App { origin } = app.unwrap_or_default();
        let app = App {
            origin: parse_url(&origin, "app origin")?,
        };

        let raw::Geocoding { gateway: gw_name } = geocoding.unwrap_or_default();
        let geocoding_gateway = match gw_name {
            raw::GeocodingGateway::Nominatim => {
                let raw::Nominatim {
                    api_url,
                    user_agent,
                } = gateway
                    .nominatim
                    .clone()
                    .ok_or_else(|| anyhow!("Missing 'nominatim' gateway configuration"))?;
                GeocodingGateway::Nominatim {
                    api_url: parse_url(&api_url, "Nominatim API")?,
                    user_agent: user_agent
                        .unwrap_or_else(|| nominatim::DEFAULT_USER_AGENT.to_string()),
                }
            }
        };
        let geocoding = Geocoding {
            gateway: geocoding_gateway,
        };

        let raw::Places {
            gateway: gw_name,
            radius_meters,
        } = places.unwrap_or_default();
        let radius = radius_meters
            .map(Distance::from_meters)
            .unwrap_or(SEARCH_RADIUS);
        if !radius.is_valid() || radius.to_meters() <= 0.0 {
            return Err(anyhow!("Invalid search radius {} m", radius.to_meters()));
        }
        let places_gateway = match gw_name {
            raw::PlacesGateway::Overpass => {
                let raw::Overpass {
                    api_url,
                    user_agent,
                    query_timeout,
                } = gateway
                    .overpass
                    .clone()
                    .ok_or_else(|| anyhow!("Missing 'overpass' gateway configuration"))?;
                PlacesGateway::Overpass {
                    api_url: parse_url(&api_url, "Overpass API")?,
                    user_agent: user_agent
                        .unwrap_or_else(|| nominatim::DEFAULT_USER_AGENT.to_string()),
                    query_timeout,
                }
            }
        };
        let places = Places {
            gateway: places_gateway,
            radius,
        };

        let identity_gateway = match identity.and_then(|i| i.gateway) {
            Some(raw::IdentityGateway::Firebase) => {
                let raw::Firebase {
                    api_key,
                    project_id,
                    identity_api_url,
                    firestore_api_url,
                } = gateway
                    .firebase
                    .clone()
                    .ok_or_else(|| anyhow!("Missing 'firebase' gateway configuration"))?;
                Some(IdentityGateway::Firebase(FirebaseConfig {
                    api_key,
                    project_id,
                    identity_api_url: identity_api_url
                        .unwrap_or_else(|| firebase::DEFAULT_IDENTITY_API_URL.to_string()),
                    firestore_api_url: firestore_api_url
                        .unwrap_or_else(|| firebase::DEFAULT_FIRESTORE_API_URL.to_string()),
                }))
            }
            None => None,
        };
        let identity = Identity {
            gateway: identity_gateway,
        };

        let raw::DeviceLocation {
            permission,
            position,
        } = device_location.unwrap_or_default();
        let permission = match permission {
            Some(raw::Permission::Denied) => Permission::Denied,
            Some(raw::Permission::Granted) | None => Permission::Granted,
        };
        let position = position
            .map(|pos| {
                pos.parse::<MapPoint>()
                    .with_context(|| format!("Invalid device position '{pos}'"))
            })
            .transpose()?;
        let device_location = DeviceLocation {
            permission,
            position,
        };

        Ok(Self {
            app,
            geocoding,
            places,
            identity,
            device_location,
        })
    }
}
