use std::fmt;
use std::io;

use owo_colors::OwoColorize;

use crate::api::{ApiKeys, TransportError};
use crate::context::SettingsError;

/// Fatal application error with context for actionable error messages.
///
/// Everything a single command can get wrong is rendered inline by the
/// prompt loop; these are the errors that stop the process.
#[derive(Debug)]
pub enum AppError {
    /// Settings file could not be loaded or is invalid
    Settings { path: String, source: SettingsError },
    /// HTTP client could not be constructed
    HttpClient(TransportError),
    /// IO error with context
    Io { context: String, source: io::Error },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Settings { path, source } => {
                write!(f, "{}", format_settings_error(source, path))
            }
            AppError::HttpClient(source) => {
                write!(f, "{}", format_http_client_error(source))
            }
            AppError::Io { context, source } => {
                write!(f, "{}", format_cli_error(&format!("{}: {}", context, source)))
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<TransportError> for AppError {
    fn from(e: TransportError) -> Self {
        AppError::HttpClient(e)
    }
}

/// Extension trait to add file path context to settings results.
pub trait SettingsResultExt<T> {
    fn with_path(self, path: &str) -> Result<T, AppError>;
}

impl<T> SettingsResultExt<T> for Result<T, SettingsError> {
    fn with_path(self, path: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Settings {
            path: path.to_string(),
            source: e,
        })
    }
}

/// Extension trait to add context to IO results.
pub trait IoResultExt<T> {
    fn with_context(self, context: &str) -> Result<T, AppError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn with_context(self, context: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Io {
            context: context.to_string(),
            source: e,
        })
    }
}

// ============================================================================
// Formatting functions (internal implementation)
// ============================================================================

fn format_settings_error(error: &SettingsError, path: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));

    match error {
        SettingsError::Io(e) => {
            out.push_str(&format!("failed to read {}\n", path.cyan()));
            out.push('\n');
            out.push_str(&format!("  {}\n", e.to_string().dimmed()));
        }
        SettingsError::Parse(e) => {
            out.push_str(&format!("invalid YAML in {}\n", path.cyan()));
            out.push('\n');
            out.push_str(&format!("  {}\n", e.to_string().dimmed()));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "Valid sections".bold()));
            out.push_str(&format!("    {}\n", "news:      default_topic, limit".dimmed()));
            out.push_str(&format!("    {}\n", "http:      timeout_secs".dimmed()));
            out.push_str(&format!("    {}\n", "endpoints: weather, joke, news, currency".dimmed()));
            out.push('\n');
            out.push_str(&format!(
                "  {}\n",
                format!(
                    "API keys are not read from this file. Set {}, {} and {} in the environment or .env.",
                    ApiKeys::WEATHER_VAR,
                    ApiKeys::NEWS_VAR,
                    ApiKeys::EXCHANGE_RATE_VAR
                )
                .dimmed()
            ));
        }
        SettingsError::ZeroNewsLimit => {
            out.push_str(&format!("news limit is 0 in {}\n", path.cyan()));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str(&format!(
                "    Set {} to 1 or more, or remove it to use the default of 5\n",
                "news.limit".cyan()
            ));
        }
        SettingsError::InvalidEndpoint { name, url } => {
            out.push_str(&format!(
                "endpoint '{}' in {} is not a valid URL\n",
                name.yellow(),
                path.cyan()
            ));
            out.push('\n');
            out.push_str(&format!("  {}\n", url.dimmed()));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str(&format!(
                "    Use an absolute URL such as {} or remove {} to use the default\n",
                "https://api.example.com".cyan(),
                format!("endpoints.{}", name).cyan()
            ));
        }
    }

    out
}

fn format_http_client_error(error: &TransportError) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}: could not start the HTTP client\n", "error".red().bold()));
    out.push('\n');
    out.push_str(&format!("  {}\n", error.to_string().dimmed()));
    out
}

fn format_cli_error(message: &str) -> String {
    format!("{}: {}\n", "error".red().bold(), message)
}
