use crate::entities::{MapPoint, NearbyOrganization, Organization};

/// The maximum number of organizations in a result list.
pub const MAX_RESULTS: usize = 10;

/// The `limit` organizations closest to `origin`, nearest first.
pub fn nearest<I>(origin: MapPoint, organizations: I, limit: usize) -> Vec<NearbyOrganization>
where
    I: IntoIterator<Item = Organization>,
{
    let mut ranked: Vec<_> = organizations
        .into_iter()
        .map(|organization| NearbyOrganization {
            distance: MapPoint::distance(origin, organization.pos),
            organization,
        })
        .collect();
    ranked.sort_by(|a, b| a.distance.to_meters().total_cmp(&b.distance.to_meters()));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamk_entities::builders::*;

    fn org_at(id: &str, lat: f64) -> Organization {
        Organization::build()
            .id(id)
            .name(id)
            .pos(MapPoint::from_lat_lng_deg(lat, 0.0))
            .finish()
    }

    #[test]
    fn keep_the_ten_nearest() {
        let origin = MapPoint::from_lat_lng_deg(0.0, 0.0);
        // 15 candidates in scrambled order
        let orgs: Vec<_> = [7, 3, 14, 1, 12, 9, 0, 5, 11, 2, 13, 8, 4, 10, 6]
            .into_iter()
            .map(|i| org_at(&format!("o{i}"), f64::from(i) * 0.1))
            .collect();
        let ranked = nearest(origin, orgs, MAX_RESULTS);
        assert_eq!(ranked.len(), 10);
        let ids: Vec<_> = ranked.iter().map(|r| r.organization.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["o0", "o1", "o2", "o3", "o4", "o5", "o6", "o7", "o8", "o9"]
        );
        assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn fewer_than_limit() {
        let origin = MapPoint::from_lat_lng_deg(0.0, 0.0);
        let ranked = nearest(origin, vec![org_at("b", 2.0), org_at("a", 1.0)], MAX_RESULTS);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].organization.id, "a");
        assert!(nearest(origin, Vec::<Organization>::new(), MAX_RESULTS).is_empty());
    }

    #[test]
    fn equal_distances_keep_their_order() {
        let origin = MapPoint::from_lat_lng_deg(0.0, 0.0);
        let ranked = nearest(
            origin,
            vec![org_at("x", 1.0), org_at("y", -1.0), org_at("z", 1.0)],
            MAX_RESULTS,
        );
        let ids: Vec<_> = ranked.iter().map(|r| r.organization.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y", "z"]);
    }
}
