//! Decide which tagged places are relevant organizations.
//!
//! The policy is an ordered set of inclusion and exclusion rules.
//! A place is accepted if at least one inclusion rule and
//! none of the exclusion rules match its tags.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use crate::entities::Tags;

lazy_static! {
    static ref HELPFUL_SOCIAL_FACILITY: Regex =
        case_insensitive("outreach|shelter|charity|clothes|clothing");
    static ref CLOTHES_DONATION: Regex = case_insensitive("clothes|clothing|garment");
    static ref RESIDENTIAL_SOCIAL_FACILITY: Regex =
        case_insensitive("nursing_home|assisted_living|group_home|residential|day_care");
}

const EXCLUDED_AMENITIES: &[&str] = &[
    "clinic",
    "doctors",
    "hospital",
    "pharmacy",
    "restaurant",
    "cafe",
    "bar",
    "bank",
    "atm",
    "school",
    "college",
    "university",
    "furniture",
    "nursing_home",
];

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap()
}

#[derive(Debug, Clone)]
pub enum TagRule {
    /// The tag has exactly this value.
    Equals(&'static str, &'static str),
    /// The tag exists, regardless of its value.
    Present(&'static str),
    /// The tag exists and has any other value.
    PresentExcept(&'static str, &'static str),
    /// The tag has one of the values.
    OneOf(&'static str, &'static [&'static str]),
    /// The value of the tag contains a match of the pattern.
    Matches(&'static str, Regex),
    /// All nested rules match.
    All(Vec<TagRule>),
}

impl TagRule {
    pub fn matches(&self, tags: &Tags) -> bool {
        match self {
            Self::Equals(key, value) => tags.get(key) == Some(*value),
            Self::Present(key) => tags.contains_key(key),
            Self::PresentExcept(key, value) => tags.get(key).is_some_and(|v| v != *value),
            Self::OneOf(key, values) => tags.get(key).is_some_and(|v| values.contains(&v)),
            Self::Matches(key, pattern) => tags.get(key).is_some_and(|v| pattern.is_match(v)),
            Self::All(rules) => rules.iter().all(|r| r.matches(tags)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlacePolicy {
    include: Vec<TagRule>,
    exclude: Vec<TagRule>,
}

impl PlacePolicy {
    pub const fn new(include: Vec<TagRule>, exclude: Vec<TagRule>) -> Self {
        Self { include, exclude }
    }

    /// NGOs, charities, helpful social facilities and clothes donation points.
    ///
    /// Medical, commercial, educational and residential
    /// facilities are rejected.
    pub fn charitable_organizations() -> Self {
        use TagRule as R;
        let include = vec![
            R::Equals("office", "ngo"),
            R::PresentExcept("charity", "no"),
            R::All(vec![
                R::Equals("amenity", "social_facility"),
                R::Matches("social_facility", HELPFUL_SOCIAL_FACILITY.clone()),
            ]),
            R::Equals("donation:clothes", "yes"),
            R::Matches("donation", CLOTHES_DONATION.clone()),
        ];
        let exclude = vec![
            R::OneOf("amenity", EXCLUDED_AMENITIES),
            R::Present("shop"),
            R::Present("healthcare"),
            R::Matches("social_facility", RESIDENTIAL_SOCIAL_FACILITY.clone()),
        ];
        Self::new(include, exclude)
    }

    pub fn is_included(&self, tags: &Tags) -> bool {
        self.include.iter().any(|r| r.matches(tags))
    }

    pub fn is_excluded(&self, tags: &Tags) -> bool {
        self.exclude.iter().any(|r| r.matches(tags))
    }

    pub fn accepts(&self, tags: &Tags) -> bool {
        self.is_included(tags) && !self.is_excluded(tags)
    }
}

impl Default for PlacePolicy {
    fn default() -> Self {
        Self::charitable_organizations()
    }
}
