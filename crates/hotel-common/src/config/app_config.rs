//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;

use crate::telemetry::TracingConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub presentation: PresentationConfig,
    /// Force JSON log output regardless of environment
    #[serde(default)]
    pub log_json: Option<bool>,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// How guest rows are rendered
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PresentationConfig {
    /// Prefix joined to badge categories, e.g. `badge-` + `danger`
    #[serde(default = "default_badge_prefix")]
    pub badge_prefix: String,
    /// Initial shown for guests without a name
    #[serde(default = "default_fallback_initial")]
    pub fallback_initial: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            badge_prefix: default_badge_prefix(),
            fallback_initial: default_fallback_initial(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "hotel-guests".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_badge_prefix() -> String {
    "badge-".to_string()
}

fn default_fallback_initial() -> String {
    "G".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unusable value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(value) => Environment::parse(&value)
                .ok_or(ConfigError::InvalidValue("APP_ENV", value))?,
            None => default_env(),
        };

        let fallback_initial = match lookup("GUEST_FALLBACK_INITIAL") {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidValue("GUEST_FALLBACK_INITIAL", value));
            }
            Some(value) => value,
            None => default_fallback_initial(),
        };

        let log_json = match lookup("LOG_FORMAT") {
            Some(value) => match value.to_lowercase().as_str() {
                "json" => Some(true),
                "pretty" | "text" => Some(false),
                _ => return Err(ConfigError::InvalidValue("LOG_FORMAT", value)),
            },
            None => None,
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            presentation: PresentationConfig {
                badge_prefix: lookup("GUEST_BADGE_PREFIX").unwrap_or_else(default_badge_prefix),
                fallback_initial,
            },
            log_json,
        })
    }

    /// Tracing setup matching the environment
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        let mut config = if self.app.env.is_production() {
            TracingConfig::production()
        } else {
            TracingConfig::development()
        };
        if let Some(json) = self.log_json {
            config.json = json;
        }
        config
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
