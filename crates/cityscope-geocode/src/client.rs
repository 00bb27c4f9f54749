//! Open-Meteo geocoding API client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use cityscope_core::{Config, GeoLocation, Geocoder, ProviderError};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    // Absent entirely when the query matches nothing.
    results: Option<Vec<SearchResult>>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    latitude: f64,
    longitude: f64,
    population: Option<u64>,
    name: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.providers.geocoding_url.clone(),
        })
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ProviderError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ProviderError::InvalidResponse(format!("JSON parse error: {}", e)))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl Geocoder for GeocodeClient {
    /// Resolve a place name to its best match, limit 1.
    #[instrument(skip(self), level = "info")]
    async fn resolve(&self, name: &str) -> Result<Option<GeoLocation>, ProviderError> {
        let url = format!(
            "{}/v1/search?name={}&count=1&format=json",
            self.base_url,
            urlencoding::encode(name),
        );

        let response = self.client.get(&url).send().await?;
        let body: SearchResponse = Self::handle_response(response).await?;

        let Some(best) = body.results.unwrap_or_default().into_iter().next() else {
            tracing::debug!("No geocoding match for {:?}", name);
            return Ok(None);
        };

        let display_name = match (best.name, best.country) {
            (Some(n), Some(c)) if n != c => Some(format!("{}, {}", n, c)),
            (Some(n), _) => Some(n),
            (None, Some(c)) => Some(c),
            (None, None) => None,
        };

        Ok(Some(GeoLocation {
            latitude: best.latitude,
            longitude: best.longitude,
            population: best.population,
            name: display_name,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> Config {
        let mut config = Config::default();
        config.providers.geocoding_url = base_url.to_string();
        config
    }

    #[tokio::test]
    async fn test_resolve_best_match() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("name", "Berlin"))
            .and(query_param("count", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{
                    "latitude": 52.52437,
                    "longitude": 13.41053,
                    "name": "Berlin",
                    "country": "Germany",
                    "population": 3426354
                }]
            })))
            .mount(&mock_server)
            .await;

        let client = GeocodeClient::new(&test_config(&mock_server.uri())).unwrap();
        let location = client.resolve("Berlin").await.unwrap().unwrap();

        assert!((location.latitude - 52.52437).abs() < 1e-9);
        assert!((location.longitude - 13.41053).abs() < 1e-9);
        assert_eq!(location.population, Some(3426354));
        assert_eq!(location.name.as_deref(), Some("Berlin, Germany"));
    }

    #[tokio::test]
    async fn test_resolve_no_results_key() {
        let mock_server = MockServer::start().await;

        // Open-Meteo omits "results" when nothing matched.
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"generationtime_ms": 0.5})),
            )
            .mount(&mock_server)
            .await;

        let client = GeocodeClient::new(&test_config(&mock_server.uri())).unwrap();
        let location = client.resolve("Nowhereville123").await.unwrap();

        assert!(location.is_none());
    }

    #[tokio::test]
    async fn test_resolve_empty_results_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": []
            })))
            .mount(&mock_server)
            .await;

        let client = GeocodeClient::new(&test_config(&mock_server.uri())).unwrap();
        assert!(client.resolve("x").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_without_population() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{"latitude": 1.0, "longitude": 2.0, "name": "Tinytown"}]
            })))
            .mount(&mock_server)
            .await;

        let client = GeocodeClient::new(&test_config(&mock_server.uri())).unwrap();
        let location = client.resolve("Tinytown").await.unwrap().unwrap();

        assert_eq!(location.population, None);
        assert_eq!(location.name.as_deref(), Some("Tinytown"));
    }

    #[tokio::test]
    async fn test_resolve_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = GeocodeClient::new(&test_config(&mock_server.uri())).unwrap();
        let result = client.resolve("Berlin").await;

        assert!(matches!(
            result,
            Err(ProviderError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = GeocodeClient::new(&test_config(&mock_server.uri())).unwrap();
        let result = client.resolve("Berlin").await;

        assert!(matches!(result, Err(ProviderError::InvalidResponse(_))));
    }
}
