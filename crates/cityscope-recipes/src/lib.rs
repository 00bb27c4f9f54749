//! Recipe search via TheMealDB - free, no API key required.

pub mod client;

pub use client::MealDbClient;
