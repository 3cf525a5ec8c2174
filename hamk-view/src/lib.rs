//! Output of the search results, the map and notifications.
//!
//! Everything is rendered as HTML fragments and as plain text
//! for the terminal.

pub mod map;
pub mod notification;
pub mod results;
