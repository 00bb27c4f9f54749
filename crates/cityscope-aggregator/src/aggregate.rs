//! The city-data aggregation workflow.

use std::sync::Arc;

use tracing::instrument;

use cityscope_core::{
    Geocoder, PlaceQuery, PoiCategory, PoiProvider, PointOfInterest, WeatherProvider,
};

use crate::error::AggregateError;
use crate::types::{AggregationResult, PopulationBreakdown, SourceFailures, MAX_POIS_PER_CATEGORY};

/// Orchestrates one aggregation run per call; holds no mutable state, so
/// concurrent calls are fully independent.
#[derive(Clone)]
pub struct Aggregator {
    geocoder: Arc<dyn Geocoder>,
    weather: Arc<dyn WeatherProvider>,
    poi: Arc<dyn PoiProvider>,
}

impl Aggregator {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        weather: Arc<dyn WeatherProvider>,
        poi: Arc<dyn PoiProvider>,
    ) -> Self {
        Self {
            geocoder,
            weather,
            poi,
        }
    }

    /// Resolve a place name and gather every data source for it.
    ///
    /// Fails only when the query is empty, the geocoder finds no
    /// candidate, or the geocoder itself is unreachable. Weather and
    /// point-of-interest failures degrade to absent/empty fields with
    /// the matching [`SourceFailures`] flag set.
    #[instrument(skip(self), level = "info")]
    pub async fn aggregate(&self, query: &str) -> Result<AggregationResult, AggregateError> {
        let query = PlaceQuery::new(query).ok_or(AggregateError::InvalidQuery)?;

        let location = self
            .geocoder
            .resolve(query.as_str())
            .await?
            .ok_or_else(|| AggregateError::PlaceNotFound(query.to_string()))?;

        tracing::info!(
            "Resolved {:?} to ({}, {})",
            query.as_str(),
            location.latitude,
            location.longitude
        );

        // Independent lookups; join all, never fail-fast.
        let (weather, education, water) = tokio::join!(
            self.weather
                .current_weather(location.latitude, location.longitude),
            self.poi
                .query_near(location.latitude, location.longitude, PoiCategory::Education),
            self.poi
                .query_near(location.latitude, location.longitude, PoiCategory::Water),
        );

        let mut failures = SourceFailures::default();

        let weather = match weather {
            Ok(reading) => Some(reading),
            Err(e) => {
                tracing::warn!("Weather lookup failed: {}", e);
                failures.weather = true;
                None
            }
        };

        let education = match education {
            Ok(pois) => truncate(pois),
            Err(e) => {
                tracing::warn!("Education POI lookup failed: {}", e);
                failures.education = true;
                Vec::new()
            }
        };

        let water = match water {
            Ok(pois) => truncate(pois),
            Err(e) => {
                tracing::warn!("Water POI lookup failed: {}", e);
                failures.water = true;
                Vec::new()
            }
        };

        let population = location
            .population
            .filter(|p| *p > 0)
            .map(PopulationBreakdown::from_total);

        Ok(AggregationResult {
            location,
            weather,
            population,
            education,
            water,
            failures,
        })
    }
}

/// Keep the first entries in provider order.
fn truncate(mut pois: Vec<PointOfInterest>) -> Vec<PointOfInterest> {
    pois.truncate(MAX_POIS_PER_CATEGORY);
    pois
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_preserves_order() {
        let pois: Vec<PointOfInterest> = (0..12)
            .map(|i| PointOfInterest {
                name: Some(format!("School {}", i)),
            })
            .collect();

        let kept = truncate(pois);
        assert_eq!(kept.len(), 5);
        assert_eq!(kept[0].name.as_deref(), Some("School 0"));
        assert_eq!(kept[4].name.as_deref(), Some("School 4"));
    }

    #[test]
    fn test_truncate_short_list_untouched() {
        let pois = vec![PointOfInterest { name: None }];
        assert_eq!(truncate(pois).len(), 1);
    }
}
