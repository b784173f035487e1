//! Clients for the upstream providers.
//!
//! Every client is total: whatever happens on the wire it returns an
//! [`ApiOutcome`], and the details of a failure are logged rather than
//! propagated. Missing credentials short-circuit before any request is made.

pub mod currency;
pub mod joke;
pub mod news;
pub mod transport;
pub mod weather;

use std::fmt;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::context::{Endpoints, Settings};

pub use currency::Conversion;
pub use joke::Joke;
pub use news::{Headline, Headlines};
pub use transport::{HttpResponse, ReqwestTransport, Transport, TransportError};
pub use weather::Weather;

/// Result of a provider call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    /// The provider needs a key and none is configured. No request was sent.
    ConfigMissing,
    /// Transport error, non-success status, or a payload we could not use.
    UpstreamFailure,
    /// The request succeeded but returned nothing to show.
    EmptyResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Weather,
    Joke,
    News,
    Currency,
}

impl Provider {
    pub fn name(self) -> &'static str {
        match self {
            Provider::Weather => "weather",
            Provider::Joke => "joke",
            Provider::News => "news",
            Provider::Currency => "currency",
        }
    }

    /// Environment variable holding the provider's key, if it needs one.
    pub fn key_var(self) -> Option<&'static str> {
        match self {
            Provider::Weather => Some(ApiKeys::WEATHER_VAR),
            Provider::Joke => None,
            Provider::News => Some(ApiKeys::NEWS_VAR),
            Provider::Currency => Some(ApiKeys::EXCHANGE_RATE_VAR),
        }
    }

    /// Where to obtain a key.
    pub fn signup_url(self) -> &'static str {
        match self {
            Provider::Weather => "https://openweathermap.org/",
            Provider::Joke => "https://jokeapi.dev/",
            Provider::News => "https://newsapi.org/",
            Provider::Currency => "https://www.exchangerate-api.com/",
        }
    }
}

/// Pre-issued provider credentials.
#[derive(Clone, Default)]
pub struct ApiKeys {
    pub weather: Option<String>,
    pub news: Option<String>,
    pub exchange_rate: Option<String>,
}

impl fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn state(key: &Option<String>) -> &'static str {
            if key.is_some() { "set" } else { "unset" }
        }
        f.debug_struct("ApiKeys")
            .field("weather", &state(&self.weather))
            .field("news", &state(&self.news))
            .field("exchange_rate", &state(&self.exchange_rate))
            .finish()
    }
}

impl ApiKeys {
    pub const WEATHER_VAR: &'static str = "WEATHER_API_KEY";
    pub const NEWS_VAR: &'static str = "NEWS_API_KEY";
    pub const EXCHANGE_RATE_VAR: &'static str = "EXCHANGE_RATE_API_KEY";

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read keys through `lookup`. Blank values count as absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        Self {
            weather: read(Self::WEATHER_VAR),
            news: read(Self::NEWS_VAR),
            exchange_rate: read(Self::EXCHANGE_RATE_VAR),
        }
    }
}

/// All four provider clients behind one transport.
pub struct ApiClient {
    transport: Box<dyn Transport>,
    keys: ApiKeys,
    endpoints: Endpoints,
    news_limit: usize,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("keys", &self.keys)
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(transport: Box<dyn Transport>, keys: ApiKeys, settings: &Settings) -> Self {
        Self {
            transport,
            keys,
            endpoints: settings.endpoints.clone(),
            news_limit: settings.news.limit,
        }
    }

    pub fn weather(&self, city: &str) -> ApiOutcome<Weather> {
        weather::fetch(
            self.transport.as_ref(),
            &self.endpoints.weather,
            self.keys.weather.as_deref(),
            city,
        )
    }

    pub fn joke(&self) -> ApiOutcome<Joke> {
        joke::fetch(self.transport.as_ref(), &self.endpoints.joke)
    }

    pub fn news(&self, topic: &str) -> ApiOutcome<Headlines> {
        news::fetch(
            self.transport.as_ref(),
            &self.endpoints.news,
            self.keys.news.as_deref(),
            topic,
            self.news_limit,
        )
    }

    pub fn convert(&self, amount: f64, from: &str, to: &str) -> ApiOutcome<Conversion> {
        currency::fetch(
            self.transport.as_ref(),
            &self.endpoints.currency,
            self.keys.exchange_rate.as_deref(),
            amount,
            from,
            to,
        )
    }
}

/// GET `base/segments?query` and decode the body as JSON.
///
/// Returns `None` for every failure after logging it. Only the host is
/// logged since some providers carry the key in the path or query.
pub(crate) fn fetch_json<T: DeserializeOwned>(
    transport: &dyn Transport,
    provider: Provider,
    base: &str,
    segments: &[&str],
    query: &[(&str, &str)],
) -> Option<T> {
    let provider_name = provider.name();

    let url = match transport::endpoint(base, segments, query) {
        Ok(url) => url,
        Err(e) => {
            warn!(provider = provider_name, error = %e, "could not build request");
            return None;
        }
    };

    debug!(provider = provider_name, host = url.host_str().unwrap_or_default(), "sending request");

    let response = match transport.get(&url) {
        Ok(response) => response,
        Err(e) => {
            warn!(provider = provider_name, error = %e, "request failed");
            return None;
        }
    };

    if !response.is_ok() {
        warn!(provider = provider_name, status = response.status, "upstream returned an error status");
        return None;
    }

    match serde_json::from_str(&response.body) {
        Ok(payload) => Some(payload),
        Err(e) => {
            warn!(provider = provider_name, error = %e, "malformed response body");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::transport::stub::StubTransport;
    use super::*;

    fn keys(pairs: &[(&str, &str)]) -> ApiKeys {
        let owned: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiKeys::from_lookup(move |name| {
            owned
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn test_blank_keys_count_as_absent() {
        let keys = keys(&[("WEATHER_API_KEY", ""), ("NEWS_API_KEY", "   "), ("EXCHANGE_RATE_API_KEY", " abc ")]);
        assert!(keys.weather.is_none());
        assert!(keys.news.is_none());
        assert_eq!(keys.exchange_rate.as_deref(), Some("abc"));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let keys = keys(&[("WEATHER_API_KEY", "secret-value")]);
        let debug = format!("{:?}", keys);
        assert!(!debug.contains("secret-value"));
        assert!(debug.contains("weather: \"set\""));
        assert!(debug.contains("news: \"unset\""));
    }

    #[test]
    fn test_missing_keys_never_touch_the_network() {
        let stub = StubTransport::new();
        let calls = stub.calls();
        let client = ApiClient::new(Box::new(stub), ApiKeys::default(), &Settings::default());

        assert_eq!(client.weather("London"), ApiOutcome::ConfigMissing);
        assert_eq!(client.news("rust"), ApiOutcome::ConfigMissing);
        assert_eq!(client.convert(1.0, "usd", "eur"), ApiOutcome::ConfigMissing);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_fetch_json_collapses_failures() {
        #[derive(serde::Deserialize)]
        struct Anything {}

        let stub = StubTransport::new()
            .fail("connection refused")
            .respond(404, "{}")
            .respond(200, "not json");

        for _ in 0..3 {
            let result: Option<Anything> =
                fetch_json(&stub, Provider::Joke, "https://example.com", &["x"], &[]);
            assert!(result.is_none());
        }
        assert_eq!(stub.calls().borrow().len(), 3);
    }

    #[test]
    fn test_fetch_json_skips_request_for_bad_base() {
        let stub = StubTransport::new();
        let result: Option<serde_json::Value> =
            fetch_json(&stub, Provider::Joke, "::bad::", &["x"], &[]);
        assert!(result.is_none());
        assert!(stub.calls().borrow().is_empty());
    }
}
