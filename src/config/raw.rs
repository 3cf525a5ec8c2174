use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("hamk.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub app: Option<App>,
    pub geocoding: Option<Geocoding>,
    pub places: Option<Places>,
    pub identity: Option<Identity>,
    pub device_location: Option<DeviceLocation>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct App {
    pub origin: String,
}

impl Default for App {
    fn default() -> Self {
        Config::default().app.expect("App configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: GeocodingGateway,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default().geocoding.expect("Geocoding configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Nominatim,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Places {
    pub gateway: PlacesGateway,
    pub radius_meters: Option<f64>,
}

impl Default for Places {
    fn default() -> Self {
        Config::default().places.expect("Places configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacesGateway {
    Overpass,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Identity {
    pub gateway: Option<IdentityGateway>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentityGateway {
    Firebase,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DeviceLocation {
    pub permission: Option<Permission>,
    pub position: Option<String>,
}

impl Default for DeviceLocation {
    fn default() -> Self {
        Config::default()
            .device_location
            .expect("Device location configuration")
    }
}

#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Permission {
    Granted,
    Denied,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
    pub overpass: Option<Overpass>,
    pub firebase: Option<Firebase>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub api_url: String,
    pub user_agent: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Overpass {
    pub api_url: String,
    pub user_agent: Option<String>,
    #[serde(deserialize_with = "deserialize_duration")]
    pub query_timeout: Duration,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Firebase {
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub identity_api_url: Option<String>,
    pub firestore_api_url: Option<String>,
}
