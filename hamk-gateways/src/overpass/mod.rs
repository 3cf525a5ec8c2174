//! Place search with the OpenStreetMap Overpass API.

use hamk_core::{
    entities::{Distance, MapPoint, TaggedPlace},
    gateways::places::PlaceSearchGateway,
};
use reqwest::{blocking::Client, header, Url};

mod dto;

use self::dto::ResponseDto;

pub const DEFAULT_API_URL: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_QUERY_TIMEOUT_SECONDS: u32 = 25;

/// Tag filters of the elements that might be charitable organizations.
///
/// The result is classified again on the client side.
const TAG_FILTERS: &[&str] = &[
    r#"["office"="ngo"]"#,
    r#"["charity"]["charity"!="no"]"#,
    r#"["amenity"="social_facility"]["social_facility"~"outreach|shelter|charity|clothes|clothing", i]"#,
    r#"["donation:clothes"="yes"]"#,
    r#"["donation"~"clothes|clothing|garment", i]"#,
];

#[derive(Debug, Clone)]
pub struct Overpass {
    client: Client,
    api_url: Url,
    query_timeout_seconds: u32,
}

impl Overpass {
    pub fn new(api_url: Url, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            client,
            api_url,
            query_timeout_seconds: DEFAULT_QUERY_TIMEOUT_SECONDS,
        })
    }

    pub fn with_query_timeout(mut self, seconds: u32) -> Self {
        self.query_timeout_seconds = seconds.max(1);
        self
    }

    fn fetch(&self, query: String) -> anyhow::Result<Vec<u8>> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header(header::ACCEPT, "application/json")
            .body(query)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Unexpected response status {status}");
        }
        Ok(response.bytes()?.to_vec())
    }
}

pub fn build_query(center: MapPoint, radius: Distance, timeout_seconds: u32) -> String {
    let around = format!(
        "(around:{radius},{lat},{lng})",
        radius = radius.to_meters().round(),
        lat = center.lat(),
        lng = center.lng()
    );
    let statements = TAG_FILTERS
        .iter()
        .map(|filter| format!("  nwr{filter}{around};"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("[out:json][timeout:{timeout_seconds}];\n(\n{statements}\n);\nout center;")
}

fn parse_places(body: &[u8]) -> Result<Vec<TaggedPlace>, serde_json::Error> {
    let response: ResponseDto = serde_json::from_slice(body)?;
    Ok(response.into_places())
}

impl PlaceSearchGateway for Overpass {
    fn places_around(&self, center: MapPoint, radius: Distance) -> Option<Vec<TaggedPlace>> {
        let query = build_query(center, radius, self.query_timeout_seconds);
        log::debug!("Search places around {center}");
        let body = match self.fetch(query) {
            Ok(body) => body,
            Err(err) => {
                log::warn!("Place search around {center} failed: {err}");
                return None;
            }
        };
        match parse_places(&body) {
            Ok(places) => {
                log::debug!("Found {} places around {center}", places.len());
                Some(places)
            }
            Err(err) => {
                log::warn!("Invalid place search response: {err}");
                None
            }
        }
    }
}
