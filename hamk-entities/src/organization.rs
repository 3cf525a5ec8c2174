use crate::geo::{Distance, MapPoint};

/// A charitable organization as shown in the search results.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub id    : String,
    pub name  : String,
    pub pos   : MapPoint,
    pub city  : Option<String>,
    pub state : Option<String>,
    pub phone : Option<String>,
    pub url   : Option<String>,
}

impl Organization {
    /// The locality as displayed to users, e.g. `Meerut, UP`.
    pub fn locality(&self) -> String {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => format!("{city}, {state}"),
            (Some(city), None) => city.to_string(),
            (None, Some(state)) => format!(", {state}"),
            (None, None) => String::new(),
        }
    }
}

/// An organization together with its distance
/// from the origin of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyOrganization {
    pub organization: Organization,
    pub distance: Distance,
}
