use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use super::{
    find_organizations_at_device_location, find_organizations_by_text, prelude::*, NearbySearch,
    ResultSource, SearchSettings,
};
use crate::{
    gateways::{
        geocode::GeoCodingGateway, location::DeviceLocationGateway, places::PlaceSearchGateway,
    },
    map::{MapRenderer, MapState},
    rank::{self, MAX_RESULTS},
};

pub const SEARCHING: &str = "Searching…";
pub const LOCATING: &str = "Getting your location…";

/// Shown if an error has no message of its own.
pub const GENERIC_FAILURE: &str = "Could not find that location.";

/// The content of the results area.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsArea {
    Idle,
    /// A search is running.
    Pending(&'static str),
    Hint(String),
    Results {
        source: ResultSource,
        organizations: Vec<NearbyOrganization>,
    },
}

pub struct SearchGateways {
    pub geocoding: Box<dyn GeoCodingGateway + Send + Sync>,
    pub places: Box<dyn PlaceSearchGateway + Send + Sync>,
    pub location: Box<dyn DeviceLocationGateway + Send + Sync>,
}

/// Identifies a single search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

struct PageView {
    results: ResultsArea,
    map: MapRenderer,
}

/// Drives searches triggered by the user and owns
/// the results area and the map.
///
/// Only the response of the most recent search is displayed,
/// responses of searches that have been superseded are discarded.
pub struct SearchPage {
    gateways: SearchGateways,
    settings: SearchSettings,
    secure_context: bool,
    latest: AtomicU64,
    view: Mutex<PageView>,
}

impl SearchPage {
    pub fn new(
        gateways: SearchGateways,
        settings: SearchSettings,
        secure_context: bool,
        map: MapRenderer,
    ) -> Self {
        Self {
            gateways,
            settings,
            secure_context,
            latest: AtomicU64::new(0),
            view: Mutex::new(PageView {
                results: ResultsArea::Idle,
                map,
            }),
        }
    }

    /// Search around the location described by `input`.
    ///
    /// Returns `false` if the response was discarded.
    pub fn search(&self, input: &str) -> bool {
        let ticket = self.begin(Some(SEARCHING));
        let outcome = find_organizations_by_text(
            &*self.gateways.geocoding,
            &*self.gateways.places,
            &self.settings,
            input,
        );
        self.finish(ticket, outcome)
    }

    /// Search around the current position of the device.
    ///
    /// Returns `false` if the response was discarded.
    pub fn search_device_location(&self) -> bool {
        let pending = self.gateways.location.is_supported().then_some(LOCATING);
        let ticket = self.begin(pending);
        let outcome = find_organizations_at_device_location(
            &*self.gateways.location,
            &*self.gateways.places,
            &self.settings,
            self.secure_context,
        );
        self.finish(ticket, outcome)
    }

    pub fn results(&self) -> ResultsArea {
        self.view.lock().results.clone()
    }

    pub fn map_state(&self) -> Option<MapState> {
        self.view.lock().map.state().cloned()
    }

    fn begin(&self, pending: Option<&'static str>) -> SearchTicket {
        let ticket = SearchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1);
        log::debug!("Start search #{}", ticket.0);
        if let Some(msg) = pending {
            self.view.lock().results = ResultsArea::Pending(msg);
        }
        ticket
    }

    fn finish(&self, ticket: SearchTicket, outcome: Result<NearbySearch>) -> bool {
        let mut view = self.view.lock();
        if ticket.0 != self.latest.load(Ordering::SeqCst) {
            log::debug!("Discard the response of the outdated search #{}", ticket.0);
            return false;
        }
        match outcome {
            Ok(NearbySearch {
                origin,
                organizations,
                source,
                ..
            }) => {
                view.map.render(origin, &organizations);
                view.results = ResultsArea::Results {
                    source,
                    organizations: rank::nearest(origin, organizations, MAX_RESULTS),
                };
            }
            Err(err) => {
                log::info!("Search #{} failed: {err}", ticket.0);
                let msg = err.to_string();
                view.results = if msg.trim().is_empty() {
                    ResultsArea::Hint(GENERIC_FAILURE.to_string())
                } else {
                    ResultsArea::Hint(msg)
                };
            }
        }
        true
    }
}
