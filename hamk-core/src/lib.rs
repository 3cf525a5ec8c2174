//! # hamk-core
//!
//! Application logic of the HAMK NGO finder: classification of places,
//! ranking, map state, notifications and the use cases that drive
//! the external gateways.

pub mod classify;
pub mod fallback;
pub mod gateways;
pub mod map;
pub mod notification;
pub mod rank;
pub mod usecases;

pub mod entities {
    pub use hamk_entities::{geo::*, organization::*, tag::*, user::*};
}
