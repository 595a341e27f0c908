//! Error types for the upstream client and the request-handling core.

use thiserror::Error;
use warp::http::StatusCode;

/// Failure talking to the city data provider.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Request failed with status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected payload: {0}")]
    UnexpectedShape(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Content is required")]
    Required,

    #[error("Content is too short (minimum 10 characters)")]
    TooShort,

    #[error("Content is too long (maximum 2000 characters)")]
    TooLong,
}

/// Why a recipe could not be located for deletion.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeLookup {
    #[error("No recipes found for this city")]
    NoRecipesForCity,

    #[error("Recipe not found")]
    UnknownId,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("City not found")]
    CityNotFound,

    #[error("Failed to fetch weather data")]
    WeatherUnavailable,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    RecipeNotFound(#[from] RecipeLookup),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::CityNotFound | Self::WeatherUnavailable | Self::RecipeNotFound(_) => {
                StatusCode::NOT_FOUND
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(AppError::CityNotFound.to_string(), "City not found");
        assert_eq!(
            AppError::from(ValidationError::TooShort).to_string(),
            "Content is too short (minimum 10 characters)"
        );
        assert_eq!(
            AppError::from(ValidationError::TooLong).to_string(),
            "Content is too long (maximum 2000 characters)"
        );
        assert_eq!(
            AppError::from(RecipeLookup::NoRecipesForCity).to_string(),
            "No recipes found for this city"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::CityNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::WeatherUnavailable.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(ValidationError::Required).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(RecipeLookup::UnknownId).status_code(),
            StatusCode::NOT_FOUND
        );
    }
}
