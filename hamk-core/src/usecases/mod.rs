mod auth;
mod error;
mod find_nearby;
mod search_page;
mod search_places;

#[cfg(test)]
pub mod tests;

pub use self::{
    auth::*, error::Error, find_nearby::*, search_page::*, search_places::*,
};

pub type Result<T> = std::result::Result<T, Error>;

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::entities::*;
}
