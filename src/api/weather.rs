//! Current conditions from OpenWeatherMap.

use serde::Deserialize;
use tracing::warn;

use super::{fetch_json, ApiOutcome, Provider, Transport};

#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
    /// City as the user typed it.
    pub city: String,
    /// Degrees Celsius.
    pub temperature: f64,
    pub description: String,
}

#[derive(Deserialize)]
struct WeatherResponse {
    main: MainReading,
    weather: Vec<Condition>,
}

#[derive(Deserialize)]
struct MainReading {
    temp: f64,
}

#[derive(Deserialize)]
struct Condition {
    description: String,
}

pub fn fetch(
    transport: &dyn Transport,
    base: &str,
    key: Option<&str>,
    city: &str,
) -> ApiOutcome<Weather> {
    let Some(key) = key else {
        return ApiOutcome::ConfigMissing;
    };

    let Some(response) = fetch_json::<WeatherResponse>(
        transport,
        Provider::Weather,
        base,
        &["data", "2.5", "weather"],
        &[("q", city), ("appid", key), ("units", "metric")],
    ) else {
        return ApiOutcome::UpstreamFailure;
    };

    let Some(condition) = response.weather.into_iter().next() else {
        warn!(provider = "weather", "response has no weather conditions");
        return ApiOutcome::UpstreamFailure;
    };

    ApiOutcome::Success(Weather {
        city: city.to_string(),
        temperature: response.main.temp,
        description: condition.description,
    })
}
