//! Export of the map as GeoJSON.
//!
//! The popups are HTML fragments like the ones bound to
//! the markers of an interactive map.

use hamk_core::map::{MapState, Marker, Popup};
use maud::{html, Markup};
use serde_json::{json, Value};

pub fn popup(popup: &Popup) -> Markup {
    match popup {
        Popup::Text(text) => html! { (text) },
        Popup::Titled { title, subtitle } => html! {
            strong { (title) } br; (subtitle)
        },
    }
}

fn marker_feature(marker: &Marker) -> Value {
    let Marker { pos, popup: p } = marker;
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            // GeoJSON positions are [longitude, latitude]
            "coordinates": [pos.lng(), pos.lat()]
        },
        "properties": {
            "popup": popup(p).into_string()
        }
    })
}

/// A FeatureCollection with one point per marker.
///
/// The view is stored in the foreign members `center`, `zoom`
/// and `bbox`.
pub fn map_geojson(state: &MapState) -> Value {
    let features: Vec<_> = state.markers.markers().iter().map(marker_feature).collect();
    let mut collection = json!({
        "type": "FeatureCollection",
        "features": features,
        "center": [state.center.lng(), state.center.lat()],
        "zoom": state.zoom,
        "tiles": {
            "url": state.tile_layer_url,
            "attribution": state.attribution
        }
    });
    if let Some(bbox) = state.viewport {
        let sw = bbox.south_west();
        let ne = bbox.north_east();
        collection["bbox"] = json!([sw.lng(), sw.lat(), ne.lng(), ne.lat()]);
    }
    collection
}
