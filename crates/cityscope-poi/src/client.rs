//! Overpass API client.
//!
//! Queries are Overpass QL unions of node/way/relation clauses with an
//! `around` filter; the response lists matching elements with their tags.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use cityscope_core::{Config, PoiCategory, PoiProvider, PointOfInterest, ProviderError};

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(default)]
    tags: Option<ElementTags>,
}

#[derive(Debug, Deserialize)]
struct ElementTags {
    name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: reqwest::Client,
    base_url: String,
}

impl OverpassClient {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.providers.overpass_url.clone(),
        })
    }

    /// Build the Overpass QL query for a category around a point.
    fn build_query(lat: f64, lon: f64, category: PoiCategory) -> String {
        let radius = category.radius_meters();
        let around = format!("around:{},{},{}", radius, lat, lon);

        let clauses = match category {
            PoiCategory::Education => format!(
                concat!(
                    "node({a})[\"amenity\"~\"^(school|college|university)$\"];",
                    "way({a})[\"amenity\"~\"^(school|college|university)$\"];",
                    "relation({a})[\"amenity\"~\"^(school|college|university)$\"];",
                ),
                a = around
            ),
            PoiCategory::Water => format!(
                concat!(
                    "node({a})[\"natural\"=\"water\"];",
                    "way({a})[\"natural\"=\"water\"];",
                    "relation({a})[\"natural\"=\"water\"];",
                    "way({a})[\"waterway\"];",
                    "node({a})[\"amenity\"=\"drinking_water\"];",
                ),
                a = around
            ),
        };

        format!("[out:json][timeout:25];({});out tags;", clauses)
    }
}

#[async_trait]
impl PoiProvider for OverpassClient {
    #[instrument(skip(self), level = "info")]
    async fn query_near(
        &self,
        lat: f64,
        lon: f64,
        category: PoiCategory,
    ) -> Result<Vec<PointOfInterest>, ProviderError> {
        let url = format!("{}/api/interpreter", self.base_url);
        let query = Self::build_query(lat, lon, category);

        let response = self
            .client
            .post(&url)
            .form(&[("data", query.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: OverpassResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("JSON parse error: {}", e)))?;

        let pois: Vec<PointOfInterest> = body
            .elements
            .into_iter()
            .map(|e| PointOfInterest {
                name: e.tags.and_then(|t| t.name),
            })
            .collect();

        tracing::debug!("{} {} POIs near ({}, {})", pois.len(), category.label(), lat, lon);
        Ok(pois)
    }
}
