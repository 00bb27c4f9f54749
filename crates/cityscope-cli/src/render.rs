//! Plain-text rendering of aggregation and recipe results.

use cityscope_aggregator::AggregationResult;
use cityscope_core::{PointOfInterest, Recipe};

/// Display cap for recipe instructions.
const INSTRUCTIONS_LIMIT: usize = 300;

/// Render one aggregation result as display lines.
pub fn render_city(result: &AggregationResult) -> Vec<String> {
    let mut lines = Vec::new();

    let place = result.location.name.as_deref().unwrap_or("Unknown place");
    lines.push(format!(
        "{} ({:.4}, {:.4})",
        place, result.location.latitude, result.location.longitude
    ));

    match &result.weather {
        Some(reading) => lines.push(format!(
            "Temperature: {:.1} C ({})",
            reading.temperature_celsius,
            reading.category().label()
        )),
        None if result.failures.weather => {
            lines.push("Temperature: source unavailable".to_string())
        }
        None => {}
    }

    if let Some(population) = &result.population {
        lines.push(format!(
            "Population: {} (male ~{}, female ~{})",
            group_thousands(population.total),
            group_thousands(population.male),
            group_thousands(population.female)
        ));
    }

    lines.push(render_poi_section(
        "Education (within 10 km)",
        &result.education,
        result.failures.education,
    ));
    lines.push(render_poi_section(
        "Water (within 15 km)",
        &result.water,
        result.failures.water,
    ));

    lines
}

fn render_poi_section(header: &str, pois: &[PointOfInterest], failed: bool) -> String {
    if failed {
        return format!("{}: source unavailable", header);
    }
    if pois.is_empty() {
        return format!("{}: none found nearby", header);
    }

    let names: Vec<&str> = pois
        .iter()
        .map(|p| p.name.as_deref().unwrap_or("(unnamed)"))
        .collect();
    format!("{}:\n  - {}", header, names.join("\n  - "))
}

/// Render a recipe, truncating the instructions for display.
pub fn render_recipe(recipe: &Recipe) -> String {
    format!(
        "{}\n\n{}",
        recipe.title,
        truncate_chars(&recipe.instructions, INSTRUCTIONS_LIMIT)
    )
}

/// Character-boundary-safe truncation with an ellipsis marker.
fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let truncated: String = text.chars().take(limit).collect();
    format!("{}...", truncated)
}

/// Insert thousands separators into an integer.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityscope_aggregator::{PopulationBreakdown, SourceFailures};
    use cityscope_core::{GeoLocation, WeatherReading};

    fn base_result() -> AggregationResult {
        AggregationResult {
            location: GeoLocation {
                latitude: 52.52,
                longitude: 13.41,
                population: Some(1_000_000),
                name: Some("Berlin, Germany".to_string()),
            },
            weather: Some(WeatherReading {
                temperature_celsius: 21.3,
            }),
            population: Some(PopulationBreakdown::from_total(1_000_000)),
            education: vec![PointOfInterest {
                name: Some("Humboldt University".to_string()),
            }],
            water: vec![],
            failures: SourceFailures::default(),
        }
    }

    #[test]
    fn test_render_city_full() {
        let lines = render_city(&base_result());
        let text = lines.join("\n");

        assert!(text.contains("Berlin, Germany"));
        assert!(text.contains("21.3 C (mild)"));
        assert!(text.contains("1,000,000"));
        assert!(text.contains("520,000"));
        assert!(text.contains("Humboldt University"));
        assert!(text.contains("Water (within 15 km): none found nearby"));
    }

    #[test]
    fn test_render_distinguishes_failure_from_empty() {
        let mut result = base_result();
        result.weather = None;
        result.failures.weather = true;
        result.failures.water = true;

        let text = render_city(&result).join("\n");
        assert!(text.contains("Temperature: source unavailable"));
        assert!(text.contains("Water (within 15 km): source unavailable"));
        // Education still rendered normally.
        assert!(text.contains("Humboldt University"));
    }

    #[test]
    fn test_unnamed_pois_render_placeholder() {
        let mut result = base_result();
        result.water = vec![PointOfInterest { name: None }];

        let text = render_city(&result).join("\n");
        assert!(text.contains("(unnamed)"));
    }

    #[test]
    fn test_truncate_chars_limit() {
        let long = "x".repeat(400);
        let rendered = truncate_chars(&long, 300);
        assert_eq!(rendered.chars().count(), 303);
        assert!(rendered.ends_with("..."));

        let short = "short text";
        assert_eq!(truncate_chars(short, 300), short);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(3_426_354), "3,426,354");
    }
}
