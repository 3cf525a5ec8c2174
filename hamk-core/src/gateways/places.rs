use hamk_entities::{
    geo::{Distance, MapPoint},
    tag::TaggedPlace,
};

pub trait PlaceSearchGateway {
    /// Find tagged places of charitable organizations around `center`.
    ///
    /// Returns `None` if the search service could not be reached
    /// or delivered an unusable response.
    fn places_around(&self, center: MapPoint, radius: Distance) -> Option<Vec<TaggedPlace>>;
}
