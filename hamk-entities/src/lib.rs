#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # hamk-entities
//!
//! Reusable, agnostic domain entities for the HAMK NGO finder.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod organization;
pub mod tag;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
