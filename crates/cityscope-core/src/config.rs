use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Provider endpoint configuration.
///
/// Defaults point at the public instances; tests point individual fields
/// at a local mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Open-Meteo geocoding search endpoint base.
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    /// Open-Meteo forecast endpoint base.
    #[serde(default = "default_weather_url")]
    pub weather_url: String,

    /// Overpass API endpoint base.
    #[serde(default = "default_overpass_url")]
    pub overpass_url: String,

    /// TheMealDB endpoint base.
    #[serde(default = "default_recipes_url")]
    pub recipes_url: String,
}

fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com".to_string()
}

fn default_weather_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_overpass_url() -> String {
    "https://overpass-api.de".to_string()
}

fn default_recipes_url() -> String {
    "https://www.themealdb.com".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            geocoding_url: default_geocoding_url(),
            weather_url: default_weather_url(),
            overpass_url: default_overpass_url(),
            recipes_url: default_recipes_url(),
        }
    }
}

/// HTTP client settings shared by all adapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout; a provider exceeding it is treated as
    /// unavailable for that source.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub providers: ProviderConfig,

    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load from a file if given, falling back to defaults, and validate.
    pub fn load_validated(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(p) => Self::load_from(p)?,
            None => Self::default(),
        };

        let validation = config.validate();
        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(
            &self.providers.geocoding_url,
            "providers.geocoding_url",
            &mut result,
        );
        self.validate_url(
            &self.providers.weather_url,
            "providers.weather_url",
            &mut result,
        );
        self.validate_url(
            &self.providers.overpass_url,
            "providers.overpass_url",
            &mut result,
        );
        self.validate_url(
            &self.providers.recipes_url,
            "providers.recipes_url",
            &mut result,
        );

        if self.http.timeout_secs == 0 {
            result.add_error("http.timeout_secs", "Timeout must be greater than 0");
        } else if self.http.timeout_secs > 120 {
            result.add_warning(
                "http.timeout_secs",
                "Timeout is unusually large (>120 seconds)",
            );
        }

        result
    }

    fn validate_url(&self, value: &str, field: &str, result: &mut ValidationResult) {
        match Url::parse(value) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => {
                result.add_error(field, format!("Unsupported URL scheme: {}", url.scheme()));
            }
            Err(e) => {
                result.add_error(field, format!("Invalid URL: {}", e));
            }
        }
    }
}
