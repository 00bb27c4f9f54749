//! TheMealDB API client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use cityscope_core::{Config, ProviderError, Recipe, RecipeProvider};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    // Explicit JSON null when nothing matched.
    meals: Option<Vec<Meal>>,
}

#[derive(Debug, Deserialize)]
struct Meal {
    #[serde(rename = "strMeal")]
    name: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.providers.recipes_url.clone(),
        })
    }
}

#[async_trait]
impl RecipeProvider for MealDbClient {
    #[instrument(skip(self), level = "info")]
    async fn search_by_name(&self, name: &str) -> Result<Vec<Recipe>, ProviderError> {
        let url = format!(
            "{}/api/json/v1/1/search.php?s={}",
            self.base_url,
            urlencoding::encode(name),
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

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("JSON parse error: {}", e)))?;

        let recipes = body
            .meals
            .unwrap_or_default()
            .into_iter()
            .filter_map(|meal| {
                Some(Recipe {
                    title: meal.name?,
                    instructions: meal.instructions.unwrap_or_default(),
                })
            })
            .collect();

        Ok(recipes)
    }
}
