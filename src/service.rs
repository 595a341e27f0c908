use std::sync::Arc;

use crate::client::CityApiClient;
use crate::constants::{MAX_CONTENT_LEN, MIN_CONTENT_LEN};
use crate::error::{AppError, RecipeLookup, ValidationError};
use crate::formatters::compose_infos;
use crate::models::{CityInfos, Recipe, RecipeDraft, RecipeId};
use crate::store::RecipeStore;

/// Handles city infos reads and recipe writes.
///
/// Every operation confirms the city with the provider before the store is
/// read or written.
#[derive(Clone)]
pub struct CityService {
    client: CityApiClient,
    store: Arc<RecipeStore>,
}

impl CityService {
    pub fn new(client: CityApiClient, store: Arc<RecipeStore>) -> Self {
        Self { client, store }
    }

    /// Checks the city exists upstream, without needing its full snapshot
    async fn require_city(&self, city_id: &str) -> Result<(), AppError> {
        self.client.city_exists(city_id).await.map_err(|e| {
            tracing::error!("City check for {} failed: {}", city_id, e);
            AppError::CityNotFound
        })
    }

    /// Merges city metadata, the two-day forecast and stored recipes.
    pub async fn city_infos(&self, city_id: &str) -> Result<CityInfos, AppError> {
        tracing::info!("Getting infos for city: {}", city_id);

        let city = self.client.fetch_city(city_id).await.map_err(|e| {
            tracing::error!("City lookup for {} failed: {}", city_id, e);
            AppError::CityNotFound
        })?;

        let forecast = self.client.fetch_weather(city_id).await.map_err(|e| {
            tracing::error!("Weather lookup for {} failed: {}", city_id, e);
            AppError::WeatherUnavailable
        })?;

        let recipes = self.store.list(city_id);
        Ok(compose_infos(city, forecast, recipes))
    }

    /// Validates and stores a new recipe.
    pub async fn create_recipe(
        &self,
        city_id: &str,
        draft: impl Into<RecipeDraft>,
    ) -> Result<Recipe, AppError> {
        tracing::info!("Creating recipe for city: {}", city_id);
        let draft = draft.into();

        self.require_city(city_id).await?;
        let content = match draft {
            RecipeDraft::Content(content) => validate_content(content)?,
            RecipeDraft::Oversized => return Err(ValidationError::TooLong.into()),
        };

        Ok(self.store.add(city_id, content))
    }

    /// Deletes a recipe. Ids that are not integers are simply not found.
    pub async fn delete_recipe(&self, city_id: &str, recipe_id: &str) -> Result<(), AppError> {
        tracing::info!("Deleting recipe {} for city: {}", recipe_id, city_id);

        self.require_city(city_id).await?;

        let removed = match recipe_id.parse::<RecipeId>() {
            Ok(id) => self.store.remove(city_id, id),
            Err(_) if self.store.has_city(city_id) => Err(RecipeLookup::UnknownId),
            Err(_) => Err(RecipeLookup::NoRecipesForCity),
        };

        removed.map(|_| ()).map_err(|e| {
            tracing::warn!("Recipe {} for {}: {}", recipe_id, city_id, e);
            AppError::from(e)
        })
    }
}

/// Content must be present, non-empty and within the length bounds,
/// measured in UTF-16 code units.
pub fn validate_content(content: Option<String>) -> Result<String, ValidationError> {
    let content = match content {
        Some(c) if !c.is_empty() => c,
        _ => return Err(ValidationError::Required),
    };

    let len = content.encode_utf16().count();
    if len < MIN_CONTENT_LEN {
        return Err(ValidationError::TooShort);
    }
    if len > MAX_CONTENT_LEN {
        return Err(ValidationError::TooLong);
    }
    Ok(content)
}
