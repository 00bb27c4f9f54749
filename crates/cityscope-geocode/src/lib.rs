//! Forward geocoding: resolve a free-text place name to coordinates.
//!
//! Uses the Open-Meteo geocoding API - free, no API key required.

pub mod client;

pub use client::GeocodeClient;
