use crate::entities::{MapBbox, MapPoint, Organization};

pub const TILE_LAYER_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const MAP_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
pub const INITIAL_ZOOM: f64 = 12.0;

/// Relative padding around the markers when fitting the view.
pub const FIT_BOUNDS_PADDING: f64 = 0.2;

const ORIGIN_POPUP: &str = "You are here";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popup {
    Text(String),
    Titled { title: String, subtitle: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub pos: MapPoint,
    pub popup: Popup,
}

/// A group of markers that is cleared and redrawn as a unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
}

impl MarkerLayer {
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn add(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapState {
    pub center: MapPoint,
    pub zoom: f64,
    pub tile_layer_url: &'static str,
    pub attribution: &'static str,
    pub markers: MarkerLayer,
    /// The area the view was fitted to by the last render.
    pub viewport: Option<MapBbox>,
}

impl MapState {
    fn new(center: MapPoint) -> Self {
        Self {
            center,
            zoom: INITIAL_ZOOM,
            tile_layer_url: TILE_LAYER_URL,
            attribution: MAP_ATTRIBUTION,
            markers: MarkerLayer::default(),
            viewport: None,
        }
    }

    fn fit_bounds(&mut self, bbox: MapBbox) {
        self.center = bbox.center();
        self.viewport = Some(bbox);
    }
}

/// Owns the one map and its marker layer.
///
/// The map is created on the first render and then reused.
#[derive(Debug)]
pub struct MapRenderer {
    surface_available: bool,
    map: Option<MapState>,
}

impl MapRenderer {
    pub const fn new(surface_available: bool) -> Self {
        Self {
            surface_available,
            map: None,
        }
    }

    pub const fn unavailable() -> Self {
        Self::new(false)
    }

    pub const fn state(&self) -> Option<&MapState> {
        self.map.as_ref()
    }

    fn ensure_map(&mut self, origin: MapPoint) -> Option<&mut MapState> {
        if !self.surface_available {
            return None;
        }
        if self.map.is_none() {
            log::debug!("Create map centered at {origin}");
        }
        Some(self.map.get_or_insert_with(|| MapState::new(origin)))
    }

    /// Show the origin and all organizations.
    ///
    /// Does nothing if there is no surface to draw on.
    pub fn render(&mut self, origin: MapPoint, organizations: &[Organization]) {
        let Some(map) = self.ensure_map(origin) else {
            log::debug!("No map available: skip rendering");
            return;
        };
        map.markers.clear();
        map.markers.add(Marker {
            pos: origin,
            popup: Popup::Text(ORIGIN_POPUP.to_string()),
        });
        for org in organizations {
            map.markers.add(Marker {
                pos: org.pos,
                popup: Popup::Titled {
                    title: org.name.clone(),
                    subtitle: org.locality(),
                },
            });
        }
        let points = std::iter::once(origin).chain(organizations.iter().map(|o| o.pos));
        if let Some(bbox) = MapBbox::from_points(points).filter(MapBbox::is_valid) {
            map.fit_bounds(bbox.pad(FIT_BOUNDS_PADDING));
        }
    }
}
