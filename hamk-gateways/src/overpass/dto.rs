use std::collections::BTreeMap;

use hamk_core::entities::{MapPoint, TaggedPlace};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct ResponseDto {
    pub(super) elements: Vec<ElementDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ElementDto {
    pub(super) id: Option<u64>,
    pub(super) lat: Option<f64>,
    pub(super) lon: Option<f64>,
    pub(super) center: Option<CenterDto>,
    #[serde(default)]
    pub(super) tags: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CenterDto {
    pub(super) lat: Option<f64>,
    pub(super) lon: Option<f64>,
}

impl ResponseDto {
    pub(super) fn into_places(self) -> Vec<TaggedPlace> {
        self.elements
            .into_iter()
            .map(ElementDto::into_place)
            .collect()
    }
}

impl ElementDto {
    fn into_place(self) -> TaggedPlace {
        let pos = self.position();
        TaggedPlace {
            id: self.id.map(|id| id.to_string()),
            pos,
            tags: self.tags.into_iter().collect(),
        }
    }

    /// Nodes carry their own coordinates, ways and
    /// relations the center of their geometry.
    fn position(&self) -> Option<MapPoint> {
        let center = self.center.as_ref();
        let lat = self.lat.or_else(|| center.and_then(|c| c.lat))?;
        let lng = self.lon.or_else(|| center.and_then(|c| c.lon))?;
        Some(MapPoint::from_lat_lng_deg(lat, lng))
    }
}
