use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::WeatherError;
use crate::model::{WeatherData, WeatherFailure, WeatherModel};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Client for the provider's current-conditions endpoint.
///
/// Stateless apart from the API key and base URL; every fetch is an
/// independent request with no retries and no caching. Dropping the returned
/// future cancels the fetch, so no outcome is ever delivered after the
/// caller loses interest.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different endpoint, e.g. a local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// Fetch current conditions for a coordinate pair.
    pub async fn fetch_by_coordinates(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherModel, WeatherError> {
        let url = self.coordinates_url(lat, lon);
        self.handle_request(&url).await
    }

    /// Fetch current conditions for a free-text city name.
    pub async fn fetch_by_city(&self, city: &str) -> Result<WeatherModel, WeatherError> {
        let url = self.city_url(city);
        self.handle_request(&url).await
    }

    fn coordinates_url(&self, lat: f64, lon: f64) -> String {
        // Numeric values need no percent-encoding.
        format!(
            "{}?appid={}&units=metric&lat={lat:.6}&lon={lon:.6}",
            self.base_url, self.api_key
        )
    }

    fn city_url(&self, city: &str) -> String {
        let query = urlencoding::encode(city);
        format!("{}?q={query}&appid={}&units=metric", self.base_url, self.api_key)
    }

    async fn handle_request(&self, url: &str) -> Result<WeatherModel, WeatherError> {
        debug!(url, "requesting current weather");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|_| WeatherError::Unknown)?;

        let status = res.status();
        let body = res.text().await.map_err(|_| WeatherError::Unknown)?;

        if status.is_success() {
            let data: WeatherData =
                serde_json::from_str(&body).map_err(|_| WeatherError::Unknown)?;
            let model = WeatherModel::from(data);
            debug!(city = %model.city_name, "current weather fetched");
            return Ok(model);
        }

        debug!(%status, "current weather request failed");
        Err(classify_failure(status, &body))
    }
}

/// A 404 whose body carries the provider's `{"message": ...}` shape surfaces
/// that message; every other failure, including a 404 with an unparseable
/// body, is opaque.
fn classify_failure(status: StatusCode, body: &str) -> WeatherError {
    if status == StatusCode::NOT_FOUND
        && let Ok(failure) = serde_json::from_str::<WeatherFailure>(body)
    {
        return WeatherError::Custom(failure.message);
    }

    WeatherError::Unknown
}
