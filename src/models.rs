use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// City Data Provider Models
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityResponse {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub coordinates: Option<CoordinatesPayload>,
    pub population: u64,
    #[serde(default)]
    pub known_for: Vec<String>,
}

/// The provider has shipped coordinates both as a pair and as an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CoordinatesPayload {
    Pair(f64, f64),
    Named { latitude: f64, longitude: f64 },
}

impl CityResponse {
    /// Resolves the city position, preferring the `coordinates` field.
    pub fn position(&self) -> Option<(f64, f64)> {
        match self.coordinates {
            Some(CoordinatesPayload::Pair(lat, lon)) => Some((lat, lon)),
            Some(CoordinatesPayload::Named {
                latitude,
                longitude,
            }) => Some((latitude, longitude)),
            None => self.latitude.zip(self.longitude),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ForecastEntry {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WeatherResponse {
    List(Vec<ForecastEntry>),
    Wrapped { predictions: Vec<ForecastEntry> },
}

impl WeatherResponse {
    pub fn into_entries(self) -> Vec<ForecastEntry> {
        match self {
            Self::List(entries) | Self::Wrapped { predictions: entries } => entries,
        }
    }
}

/// Per-request view of a city, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct CitySnapshot {
    pub latitude: f64,
    pub longitude: f64,
    pub population: u64,
    pub known_for: Vec<String>,
}

// ============================================================================
// HTTP API Models
// ============================================================================

pub type RecipeId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Recipe {
    pub id: RecipeId,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum When {
    Today,
    Tomorrow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherPrediction {
    pub when: When,
    pub min: f64,
    pub max: f64,
}

/// Response body of `GET /cities/{cityId}/infos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityInfos {
    /// Latitude then longitude
    pub coordinates: (f64, f64),
    pub population: u64,
    pub known_for: Vec<String>,
    pub weather_predictions: Vec<WeatherPrediction>,
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreateRecipeRequest {
    #[serde(default)]
    pub content: Option<String>,
}

/// A create body as read off the wire, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeDraft {
    /// `None` when the body carried no usable `content` string
    Content(Option<String>),
    /// The body ran past the read limit
    Oversized,
}

impl RecipeDraft {
    /// Anything but a JSON object with a string `content` counts as missing content.
    pub fn from_body(body: &[u8]) -> Self {
        let content = serde_json::from_slice::<CreateRecipeRequest>(body)
            .ok()
            .and_then(|req| req.content);
        Self::Content(content)
    }
}

impl From<Option<String>> for RecipeDraft {
    fn from(content: Option<String>) -> Self {
        Self::Content(content)
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ErrorBody {
    pub error: String,
}
