//! Point-of-interest queries against the Overpass API (OpenStreetMap).

pub mod client;

pub use client::OverpassClient;
