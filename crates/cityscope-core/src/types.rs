//! Domain value types shared by the provider adapters and the aggregator.

use serde::{Deserialize, Serialize};

/// A validated place search query: trimmed, guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceQuery(String);

impl PlaceQuery {
    /// Returns `None` for empty or whitespace-only input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlaceQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved geographic location.
///
/// Produced once per successful geocoding resolution and immutable
/// afterwards; lives only for the duration of one aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Resident population, when the geocoder knows it.
    pub population: Option<u64>,
    /// Canonical place name reported by the geocoder.
    pub name: Option<String>,
}

/// Current instantaneous weather at a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_celsius: f64,
}

impl WeatherReading {
    pub fn category(&self) -> TemperatureCategory {
        TemperatureCategory::from_celsius(self.temperature_celsius)
    }
}

/// Coarse temperature buckets with fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureCategory {
    Cold,
    Mild,
    Hot,
}

impl TemperatureCategory {
    /// Cold below 15 C, mild from 15 C through 30 C inclusive, hot above.
    pub fn from_celsius(celsius: f64) -> Self {
        if celsius < 15.0 {
            Self::Cold
        } else if celsius <= 30.0 {
            Self::Mild
        } else {
            Self::Hot
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Mild => "mild",
            Self::Hot => "hot",
        }
    }
}

/// A tagged geographic feature returned by a spatial query.
///
/// Many OSM features carry no name tag, so `name` stays optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: Option<String>,
}

/// Point-of-interest categories with their fixed search radii.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiCategory {
    /// Schools, colleges, universities.
    Education,
    /// Natural water bodies, waterways, drinking-water points.
    Water,
}

impl PoiCategory {
    pub fn radius_meters(&self) -> u32 {
        match self {
            Self::Education => 10_000,
            Self::Water => 15_000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Water => "water",
        }
    }
}

/// A recipe as returned by the recipe provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub instructions: String,
}
