//! Open-Meteo forecast API client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use cityscope_core::{Config, ProviderError, WeatherProvider, WeatherReading};

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.providers.weather_url.clone(),
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    #[instrument(skip(self), level = "info")]
    async fn current_weather(&self, lat: f64, lon: f64) -> Result<WeatherReading, ProviderError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true",
            self.base_url, lat, lon,
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("JSON parse error: {}", e)))?;

        let current = body.current_weather.ok_or_else(|| {
            ProviderError::InvalidResponse("Missing current_weather in response".to_string())
        })?;

        Ok(WeatherReading {
            temperature_celsius: current.temperature,
        })
    }
}
