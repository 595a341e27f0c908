use crate::models::{CityInfos, CitySnapshot, ForecastEntry, Recipe, WeatherPrediction, When};

/// Labels the provider's two entries today then tomorrow, keeping their order
pub fn label_predictions(forecast: [ForecastEntry; 2]) -> Vec<WeatherPrediction> {
    [When::Today, When::Tomorrow]
        .into_iter()
        .zip(forecast)
        .map(|(when, entry)| WeatherPrediction {
            when,
            min: entry.min,
            max: entry.max,
        })
        .collect()
}

/// Builds the response body for a city infos request
pub fn compose_infos(
    city: CitySnapshot,
    forecast: [ForecastEntry; 2],
    recipes: Vec<Recipe>,
) -> CityInfos {
    CityInfos {
        coordinates: (city.latitude, city.longitude),
        population: city.population,
        known_for: city.known_for,
        weather_predictions: label_predictions(forecast),
        recipes,
    }
}
