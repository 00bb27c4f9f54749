//! Result types assembled by one aggregation run.

use serde::{Deserialize, Serialize};

use cityscope_core::{GeoLocation, PointOfInterest, WeatherReading};

/// Display limit applied to each point-of-interest category.
pub const MAX_POIS_PER_CATEGORY: usize = 5;

const MALE_RATIO: f64 = 0.52;
const FEMALE_RATIO: f64 = 0.48;

/// Population split by fixed ratios.
///
/// `male` and `female` are rounded independently and are not reconciled
/// back to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationBreakdown {
    pub total: u64,
    pub male: u64,
    pub female: u64,
}

impl PopulationBreakdown {
    pub fn from_total(total: u64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let split = |ratio: f64| (total as f64 * ratio).round() as u64;
        Self {
            total,
            male: split(MALE_RATIO),
            female: split(FEMALE_RATIO),
        }
    }
}

/// Per-source partial-failure flags.
///
/// A set flag means that source errored and its slice of the result is
/// absent/empty; it distinguishes "source failed" from "nothing found".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFailures {
    pub weather: bool,
    pub education: bool,
    pub water: bool,
}

impl SourceFailures {
    pub fn any(&self) -> bool {
        self.weather || self.education || self.water
    }
}

/// The combined view produced by one aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub location: GeoLocation,
    pub weather: Option<WeatherReading>,
    pub population: Option<PopulationBreakdown>,
    pub education: Vec<PointOfInterest>,
    pub water: Vec<PointOfInterest>,
    pub failures: SourceFailures,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_fixed_ratios() {
        let breakdown = PopulationBreakdown::from_total(1_000_000);
        assert_eq!(breakdown.total, 1_000_000);
        assert_eq!(breakdown.male, 520_000);
        assert_eq!(breakdown.female, 480_000);
    }

    #[test]
    fn test_breakdown_rounds_independently() {
        // 0.52 * 25 = 13.0, 0.48 * 25 = 12.0
        let breakdown = PopulationBreakdown::from_total(25);
        assert_eq!(breakdown.male, 13);
        assert_eq!(breakdown.female, 12);

        // 0.52 * 101 = 52.52 -> 53, 0.48 * 101 = 48.48 -> 48
        let breakdown = PopulationBreakdown::from_total(101);
        assert_eq!(breakdown.male, 53);
        assert_eq!(breakdown.female, 48);
    }

    #[test]
    fn test_failures_any() {
        assert!(!SourceFailures::default().any());
        assert!(SourceFailures {
            water: true,
            ..Default::default()
        }
        .any());
    }
}
