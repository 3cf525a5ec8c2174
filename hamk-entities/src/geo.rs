use itertools::Itertools;
use std::{fmt, num::ParseFloatError, str::FromStr};
use thiserror::Error;

/// A geographical location on a (flat) map in degrees.
///
/// The range of the coordinates is not enforced: values are
/// taken as delivered by the geocoding and place search services.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid latitude '{0}': {1}")]
    Latitude(String, ParseFloatError),
    #[error("Invalid longitude '{0}': {1}")]
    Longitude(String, ParseFloatError),
    #[error("Failed to parse MapPoint: {0}")]
    Format(String),
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_deg_str, lng_deg_str)) = s.split(',').map(str::trim).collect_tuple() else {
            return Err(ParseError::Format(s.to_string()));
        };
        let lat = lat_deg_str
            .parse::<f64>()
            .map_err(|err| ParseError::Latitude(lat_deg_str.to_string(), err))?;
        let lng = lng_deg_str
            .parse::<f64>()
            .map_err(|err| ParseError::Longitude(lng_deg_str.to_string(), err))?;
        Ok(Self::from_lat_lng_deg(lat, lng))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub fn from_kilometers(km: f64) -> Self {
        Self(km * 1_000.0)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn to_kilometers(self) -> f64 {
        self.0 / 1_000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

const EARTH_RADIUS: Distance = Distance::from_meters(6_371_000.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using the haversine formula.
    /// Reference: https://en.wikipedia.org/wiki/Haversine_formula
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat = lat2_rad - lat1_rad;
        let dlng = lng2_rad - lng1_rad;

        let h = (dlat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (dlng / 2.0).sin().powi(2);

        Distance::from_meters(2.0 * EARTH_RADIUS.to_meters() * h.sqrt().atan2((1.0 - h).sqrt()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    /// The smallest box containing all points.
    ///
    /// Returns `None` if there are no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = MapPoint>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let bbox = points.fold(Self::new(first, first), Self::extend);
        Some(bbox)
    }

    pub const fn south_west(&self) -> MapPoint {
        self.sw
    }

    pub const fn north_east(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat() <= self.ne.lat()
    }

    pub fn center(&self) -> MapPoint {
        MapPoint::from_lat_lng_deg(
            (self.sw.lat() + self.ne.lat()) / 2.0,
            (self.sw.lng() + self.ne.lng()) / 2.0,
        )
    }

    #[must_use]
    pub fn extend(self, pt: MapPoint) -> Self {
        let sw = MapPoint::from_lat_lng_deg(self.sw.lat().min(pt.lat()), self.sw.lng().min(pt.lng()));
        let ne = MapPoint::from_lat_lng_deg(self.ne.lat().max(pt.lat()), self.ne.lng().max(pt.lng()));
        Self { sw, ne }
    }

    /// Grow each side by `ratio` times the height (or width) of the box.
    #[must_use]
    pub fn pad(self, ratio: f64) -> Self {
        let lat_buffer = (self.ne.lat() - self.sw.lat()).abs() * ratio;
        let lng_buffer = (self.ne.lng() - self.sw.lng()).abs() * ratio;
        Self {
            sw: MapPoint::from_lat_lng_deg(self.sw.lat() - lat_buffer, self.sw.lng() - lng_buffer),
            ne: MapPoint::from_lat_lng_deg(self.ne.lat() + lat_buffer, self.ne.lng() + lng_buffer),
        }
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        pt.lat() >= self.sw.lat()
            && pt.lat() <= self.ne.lat()
            && pt.lng() >= self.sw.lng()
            && pt.lng() <= self.ne.lng()
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.sw, self.ne)
    }
}
