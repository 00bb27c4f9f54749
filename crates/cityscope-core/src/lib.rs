//! Shared foundation for Cityscope: domain types, provider trait seams,
//! the provider error taxonomy, and configuration.
//!
//! Provider adapters (geocoding, weather, points of interest, recipes)
//! implement the traits in [`providers`]; the aggregator consumes them
//! without knowing which HTTP backend sits behind each one.

pub mod config;
pub mod error;
pub mod providers;
pub mod types;

pub use config::Config;
pub use error::ProviderError;
pub use providers::{Geocoder, PoiProvider, RecipeProvider, WeatherProvider};
pub use types::{
    GeoLocation, PlaceQuery, PoiCategory, PointOfInterest, Recipe, TemperatureCategory,
    WeatherReading,
};

use anyhow::Result;

/// Initialize tracing for binaries. Call once at startup.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::debug!("Cityscope core initialized");
    Ok(())
}
