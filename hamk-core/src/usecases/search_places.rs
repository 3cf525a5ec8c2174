use super::prelude::*;
use crate::{classify::PlacePolicy, gateways::places::PlaceSearchGateway};

/// The default radius around the origin of a search.
pub const SEARCH_RADIUS: Distance = Distance::from_meters(20_000.0);

const DEFAULT_NAME: &str = "NGO";

/// Search for organizations around `center`.
///
/// Places without a position and places that are rejected
/// by the policy are dropped. Returns `None` if the search
/// service failed.
pub fn search_places<G>(
    gateway: &G,
    policy: &PlacePolicy,
    center: MapPoint,
    radius: Distance,
) -> Option<Vec<Organization>>
where
    G: PlaceSearchGateway + ?Sized,
{
    let places = gateway.places_around(center, radius)?;
    let total_count = places.len();
    let organizations: Vec<_> = places
        .into_iter()
        .enumerate()
        .filter_map(|(index, place)| {
            let TaggedPlace { id, pos, tags } = place;
            let pos = pos?;
            if !policy.accepts(&tags) {
                return None;
            }
            Some(into_organization(index, id, pos, &tags))
        })
        .collect();
    log::debug!(
        "Accepted {} of {total_count} places around {center}",
        organizations.len()
    );
    Some(organizations)
}

fn into_organization(index: usize, id: Option<String>, pos: MapPoint, tags: &Tags) -> Organization {
    let owned = |keys: &[&str]| tags.first_of(keys).map(ToString::to_string);
    Organization {
        id: id.unwrap_or_else(|| format!("ovp-{index}")),
        name: owned(&["name", "operator"]).unwrap_or_else(|| DEFAULT_NAME.to_string()),
        pos,
        city: owned(&["addr:city", "addr:district"]),
        state: owned(&["addr:state"]),
        phone: owned(&["phone", "contact:phone"]),
        url: owned(&["website", "contact:website"]),
    }
}
