//! Trait seams between the aggregation workflow and the HTTP adapters.
//!
//! Each external capability is one trait; adapters live in their own
//! crates and tests substitute in-memory fakes.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::{GeoLocation, PoiCategory, PointOfInterest, Recipe, WeatherReading};

/// Resolves a free-text place name to zero-or-one best match.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` means the provider found no candidate; transport
    /// failures are errors.
    async fn resolve(&self, name: &str) -> Result<Option<GeoLocation>, ProviderError>;
}

/// Current weather at a coordinate pair.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, lat: f64, lon: f64) -> Result<WeatherReading, ProviderError>;
}

/// Spatial point-of-interest queries around a coordinate pair.
///
/// The radius is fixed per category ([`PoiCategory::radius_meters`]).
/// Results come back in provider order, untruncated; the caller applies
/// any display limit.
#[async_trait]
pub trait PoiProvider: Send + Sync {
    async fn query_near(
        &self,
        lat: f64,
        lon: f64,
        category: PoiCategory,
    ) -> Result<Vec<PointOfInterest>, ProviderError>;
}

/// Recipe search by food name.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// An empty vector means no match; not an error.
    async fn search_by_name(&self, name: &str) -> Result<Vec<Recipe>, ProviderError>;
}
