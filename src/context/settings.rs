//! Settings for the helper.
//!
//! The settings file (`config.yml`) lives in the data directory next to the
//! task file and tunes provider endpoints, news defaults and HTTP behaviour.
//! API keys are never read from here; they come from the environment.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_NEWS_TOPIC: &str = "technology";
pub const DEFAULT_NEWS_LIMIT: usize = 5;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewsConfig {
    /// Topic used by a bare `news` command.
    pub default_topic: String,
    /// Maximum number of headlines shown.
    pub limit: usize,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            default_topic: DEFAULT_NEWS_TOPIC.to_string(),
            limit: DEFAULT_NEWS_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    /// Request timeout. When unset the HTTP client default applies.
    pub timeout_secs: Option<u64>,
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Base URLs of the upstream providers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Endpoints {
    pub weather: String,
    pub joke: String,
    pub news: String,
    pub currency: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            weather: "https://api.openweathermap.org".to_string(),
            joke: "https://v2.jokeapi.dev".to_string(),
            news: "https://newsapi.org".to_string(),
            currency: "https://v6.exchangerate-api.com".to_string(),
        }
    }
}

impl Endpoints {
    fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("weather", self.weather.as_str()),
            ("joke", self.joke.as_str()),
            ("news", self.news.as_str()),
            ("currency", self.currency.as_str()),
        ]
        .into_iter()
    }
}

/// Settings loaded from `config.yml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub news: NewsConfig,
    pub http: HttpConfig,
    pub endpoints: Endpoints,
}

/// Errors that can occur when loading or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("news.limit must be at least 1")]
    ZeroNewsLimit,

    #[error("endpoint '{name}' is not a valid URL: {url}")]
    InvalidEndpoint { name: String, url: String },
}

impl Settings {
    /// Load settings from a file path.
    ///
    /// Returns the defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let settings = match std::fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => Self::default(),
            Ok(content) => serde_yaml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(SettingsError::Io(e)),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.news.limit == 0 {
            return Err(SettingsError::ZeroNewsLimit);
        }
        for (name, url) in self.endpoints.iter() {
            if reqwest::Url::parse(url).is_err() {
                return Err(SettingsError::InvalidEndpoint {
                    name: name.to_string(),
                    url: url.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.yml");

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.news.default_topic, "technology");
        assert_eq!(settings.news.limit, 5);
        assert!(settings.http.timeout().is_none());
    }

    #[test]
    fn test_load_empty_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yml");
        std::fs::write(&path, "").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.endpoints.joke, "https://v2.jokeapi.dev");
    }

    #[test]
    fn test_load_partial_config_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yml");
        std::fs::write(
            &path,
            "news:\n  default_topic: science\nhttp:\n  timeout_secs: 3\nendpoints:\n  weather: http://localhost:8080\n",
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.news.default_topic, "science");
        assert_eq!(settings.news.limit, 5);
        assert_eq!(settings.http.timeout(), Some(Duration::from_secs(3)));
        assert_eq!(settings.endpoints.weather, "http://localhost:8080");
        assert_eq!(settings.endpoints.news, "https://newsapi.org");
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yml");
        std::fs::write(&path, "weather_api_key: abc\n").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_validate_zero_limit() {
        let mut settings = Settings::default();
        settings.news.limit = 0;
        assert!(matches!(settings.validate(), Err(SettingsError::ZeroNewsLimit)));
    }

    #[test]
    fn test_validate_bad_endpoint() {
        let mut settings = Settings::default();
        settings.endpoints.currency = "not a url".to_string();

        let err = settings.validate().unwrap_err();
        assert!(matches!(err, SettingsError::InvalidEndpoint { name, .. } if name == "currency"));
    }
}
