use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;

use crate::constants::{API_KEY_HEADER, USER_AGENT};
use crate::error::UpstreamError;
use crate::models::{CityResponse, CitySnapshot, ForecastEntry, WeatherResponse};

/// Client for the city data provider (city metadata and weather).
#[derive(Clone)]
pub struct CityApiClient {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl CityApiClient {
    /// Creates a client rooted at `base_url`
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, UpstreamError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Makes an authenticated GET request and deserializes the JSON response
    async fn make_request<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
    ) -> Result<T, UpstreamError> {
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Fetches the current snapshot of a city. Any non-2xx answer is an error.
    pub async fn fetch_city(&self, city_id: &str) -> Result<CitySnapshot, UpstreamError> {
        let url = format!("{}/cities/{}", self.base_url, urlencoding::encode(city_id));
        tracing::debug!("Fetching city {}", city_id);

        let city = self.make_request::<CityResponse>(&url).await?;
        let (latitude, longitude) = city
            .position()
            .ok_or_else(|| UpstreamError::UnexpectedShape("city has no coordinates".into()))?;

        Ok(CitySnapshot {
            latitude,
            longitude,
            population: city.population,
            known_for: city.known_for,
        })
    }

    /// Confirms the provider knows the city. Only needs a 2xx JSON answer,
    /// whatever fields it carries.
    pub async fn city_exists(&self, city_id: &str) -> Result<(), UpstreamError> {
        let url = format!("{}/cities/{}", self.base_url, urlencoding::encode(city_id));
        tracing::debug!("Checking city {}", city_id);

        self.make_request::<serde_json::Value>(&url).await?;
        Ok(())
    }

    /// Fetches the today/tomorrow forecast for a city, in provider order.
    pub async fn fetch_weather(&self, city_id: &str) -> Result<[ForecastEntry; 2], UpstreamError> {
        let url = format!("{}/weather/{}", self.base_url, urlencoding::encode(city_id));
        tracing::debug!("Fetching weather for city {}", city_id);

        let weather = self.make_request::<WeatherResponse>(&url).await?;
        first_two(weather.into_entries())
    }

    /// Same as [`fetch_weather`](Self::fetch_weather), addressed by coordinates.
    pub async fn fetch_weather_at(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<[ForecastEntry; 2], UpstreamError> {
        let url = format!(
            "{}/weather?lat={}&lon={}",
            self.base_url, latitude, longitude
        );
        tracing::debug!("Fetching weather at {}, {}", latitude, longitude);

        let weather = self.make_request::<WeatherResponse>(&url).await?;
        first_two(weather.into_entries())
    }
}

fn first_two(entries: Vec<ForecastEntry>) -> Result<[ForecastEntry; 2], UpstreamError> {
    match entries.as_slice() {
        [today, tomorrow, ..] => Ok([*today, *tomorrow]),
        _ => Err(UpstreamError::UnexpectedShape(format!(
            "expected two forecast entries, got {}",
            entries.len()
        ))),
    }
}
