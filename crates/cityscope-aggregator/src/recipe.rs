//! Recipe lookup by food name.

use std::sync::Arc;

use tracing::instrument;

use cityscope_core::{ProviderError, Recipe, RecipeProvider};

/// Independent of the Aggregator; shares no coordinate pipeline.
#[derive(Clone)]
pub struct RecipeLookup {
    provider: Arc<dyn RecipeProvider>,
}

impl RecipeLookup {
    pub fn new(provider: Arc<dyn RecipeProvider>) -> Self {
        Self { provider }
    }

    /// Find the first recipe matching a food name.
    ///
    /// Empty input and zero provider matches both yield `Ok(None)`;
    /// "nothing matched" is not an error here. Empty input issues no
    /// network call.
    #[instrument(skip(self), level = "info")]
    pub async fn find_recipe(&self, food_name: &str) -> Result<Option<Recipe>, ProviderError> {
        let trimmed = food_name.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let matches = self.provider.search_by_name(trimmed).await?;
        Ok(matches.into_iter().next())
    }
}
