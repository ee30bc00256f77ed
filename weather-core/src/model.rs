use serde::Deserialize;

/// Success payload of the provider's `/weather` endpoint.
///
/// Decoded, mapped into a [`WeatherModel`] and discarded. Only the first
/// element of `weather` is consulted.
#[derive(Debug, Deserialize)]
pub struct WeatherData {
    name: String,
    main: MainData,
    weather: Vec<ConditionData>,
}

#[derive(Debug, Deserialize)]
struct MainData {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionData {
    id: i64,
    description: String,
}

/// Body the provider returns with a 404, e.g. `{"message":"city not found"}`.
#[derive(Debug, Deserialize)]
pub struct WeatherFailure {
    pub message: String,
}

/// Display-ready snapshot of current conditions, built per successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherModel {
    pub city_name: String,
    pub temperature_c: f64,
    pub condition_id: i64,
    pub condition_description: String,
}

impl WeatherModel {
    pub fn condition_image(&self) -> ConditionImage {
        ConditionImage::from_condition_id(self.condition_id)
    }

    /// Temperature rendered with exactly one decimal place.
    pub fn temperature_display(&self) -> String {
        format!("{:.1}", self.temperature_c)
    }
}

impl From<WeatherData> for WeatherModel {
    fn from(data: WeatherData) -> Self {
        // An empty `weather` array degrades to code 0 / empty description
        // rather than failing the fetch.
        let (condition_id, condition_description) = data
            .weather
            .into_iter()
            .next()
            .map(|w| (w.id, w.description))
            .unwrap_or((0, String::new()));

        Self {
            city_name: data.name,
            temperature_c: data.main.temp,
            condition_id,
            condition_description,
        }
    }
}

/// Coarse display category for a provider condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionImage {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
}

impl ConditionImage {
    /// Bucket for a provider condition code, first match wins.
    ///
    /// Codes outside the table (including gaps such as 233..=299) fall back
    /// to `Clear`. The fallback mirrors the provider's icon scheme and is
    /// intentional, not an error condition.
    pub fn from_condition_id(id: i64) -> Self {
        match id {
            200..=232 => ConditionImage::Thunderstorm,
            300..=321 => ConditionImage::Drizzle,
            500..=531 => ConditionImage::Rain,
            600..=622 => ConditionImage::Snow,
            701..=781 => ConditionImage::Atmosphere,
            800 => ConditionImage::Clear,
            801..=804 => ConditionImage::Clouds,
            _ => ConditionImage::Clear,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionImage::Thunderstorm => "Thunderstorm",
            ConditionImage::Drizzle => "Drizzle",
            ConditionImage::Rain => "Rain",
            ConditionImage::Snow => "Snow",
            ConditionImage::Atmosphere => "Atmosphere",
            ConditionImage::Clear => "Clear",
            ConditionImage::Clouds => "Clouds",
        }
    }
}

impl std::fmt::Display for ConditionImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
