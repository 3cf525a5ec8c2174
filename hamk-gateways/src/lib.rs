//! HTTP adapters of the gateways defined in `hamk-core`.

pub mod device_location;
pub mod firebase;
pub mod nominatim;
pub mod overpass;
