pub mod geocode;
pub mod identity;
pub mod location;
pub mod navigate;
pub mod places;
