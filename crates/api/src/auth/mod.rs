//! Authentication against OpenStreetMap.

pub mod osm;
