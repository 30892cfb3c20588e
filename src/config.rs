use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Meal planner API the meals and recipes are read from.
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarConfig {
    /// Lifetime of the `yearmonth` cookie.
    #[serde(default = "default_cookie_hours")]
    pub cookie_hours: u32,
    /// Line length of the wrapped notes tooltip.
    #[serde(default = "default_tooltip_width")]
    pub tooltip_width: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            cookie_hours: default_cookie_hours(),
            tooltip_width: default_tooltip_width(),
        }
    }
}

fn default_cookie_hours() -> u32 {
    mealplanner_calendar::cookie::DEFAULT_COOKIE_HOURS
}

fn default_tooltip_width() -> usize {
    mealplanner_calendar::DEFAULT_TOOLTIP_WIDTH
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALPLANNER__UPSTREAM__BASE_URL, etc.)
    /// 2. Config file specified by path, `CONFIG_PATH` or `config/default.toml`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("upstream.base_url", "http://localhost:8000")?
            .set_default("upstream.timeout_secs", 10)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALPLANNER")
                .separator("__")
                .try_parsing(true),
        );

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port must not be 0".to_owned()));
        }

        if self.upstream.base_url.trim().is_empty() {
            return Err(ConfigError::Message(
                "upstream.base_url must not be empty".to_owned(),
            ));
        }

        if self.calendar.cookie_hours == 0 {
            return Err(ConfigError::Message(
                "calendar.cookie_hours must be at least 1".to_owned(),
            ));
        }

        if self.calendar.tooltip_width == 0 {
            return Err(ConfigError::Message(
                "calendar.tooltip_width must be at least 1".to_owned(),
            ));
        }

        Ok(())
    }
}
