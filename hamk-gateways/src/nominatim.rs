use anyhow::anyhow;
use hamk_core::{
    entities::MapPoint,
    gateways::geocode::{Error, GeoCodedPlace, GeoCodingGateway},
};
use reqwest::{blocking::Client, header, Url};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Nominatim requires an identifying user agent.
pub const DEFAULT_USER_AGENT: &str = concat!("hamk/", env!("CARGO_PKG_VERSION"));

/// Geocoding with the OpenStreetMap Nominatim API.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: Client,
    api_url: Url,
}

impl Nominatim {
    pub fn new(api_url: Url, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client, api_url })
    }

    fn search_url(&self, query: &str) -> Url {
        let mut url = self.api_url.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("q", query);
        url
    }
}

#[derive(Debug, Deserialize)]
struct PlaceDto {
    lat: String,
    lon: String,
    display_name: String,
}

fn first_place(body: &[u8]) -> Result<GeoCodedPlace, Error> {
    let places: Vec<PlaceDto> =
        serde_json::from_slice(body).map_err(|err| Error::Failed(err.into()))?;
    let Some(PlaceDto {
        lat,
        lon,
        display_name,
    }) = places.into_iter().next()
    else {
        return Err(Error::NotFound);
    };
    let lat = lat.trim().parse::<f64>().map_err(|err| Error::Failed(err.into()))?;
    let lng = lon.trim().parse::<f64>().map_err(|err| Error::Failed(err.into()))?;
    Ok(GeoCodedPlace {
        pos: MapPoint::from_lat_lng_deg(lat, lng),
        label: display_name,
    })
}

impl GeoCodingGateway for Nominatim {
    fn resolve_place(&self, query: &str) -> Result<GeoCodedPlace, Error> {
        log::debug!("Geocode '{query}'");
        let response = self
            .client
            .get(self.search_url(query))
            .header(header::ACCEPT, "application/json")
            .send()
            .map_err(|err| Error::Failed(err.into()))?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("Geocoding of '{query}' failed with status {status}");
            return Err(Error::Failed(anyhow!("Unexpected response status {status}")));
        }
        let body = response.bytes().map_err(|err| Error::Failed(err.into()))?;
        let place = first_place(&body)?;
        log::debug!("Resolved '{query}' to {} ({})", place.pos, place.label);
        Ok(place)
    }
}
