//! # Runtime Configuration
//!
//! Every externally supplied value (URLs, keys, fetch policy, mail identifiers) lives in
//! [`Config`], which is built once and handed to adapters and services when they are
//! constructed. Nothing below the binary reads the environment on its own.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;

use crate::error::ConfigError;
use crate::weather::city::{self, City};
use crate::weather::temperature::TemperatureScale;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub weather: WeatherConfig,
    pub query: QueryPolicy,
    pub mail: MailConfig,
    /// How long a notification stays visible unless superseded.
    pub notification_lifetime: Duration,
    pub temperature: TemperatureScale,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub url: String,
    pub api_key: String,
    pub icon_url: String,
    pub units: String,
    pub language: String,
    pub cities: Vec<City>,
}

/// Cache and retry behaviour shared by every data fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPolicy {
    /// Data younger than this is served from cache.
    pub stale_time: Duration,
    /// Extra attempts after the first failure.
    pub retry: u32,
    pub refetch_on_focus: bool,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(600),
            retry: 3,
            refetch_on_focus: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:3000".to_string(),
                timeout: Duration::from_secs(10),
            },
            weather: WeatherConfig {
                url: "https://api.openweathermap.org/data/2.5/weather".to_string(),
                api_key: String::new(),
                icon_url: "https://openweathermap.org/img/wn".to_string(),
                units: "metric".to_string(),
                language: "ru".to_string(),
                cities: City::defaults(),
            },
            query: QueryPolicy::default(),
            mail: MailConfig {
                endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
                service_id: String::new(),
                template_id: String::new(),
                public_key: String::new(),
            },
            notification_lifetime: Duration::from_secs(5),
            temperature: TemperatureScale::default(),
        }
    }
}

impl Config {
    /// Loads configuration from `TOURBOOK_*` environment variables.
    ///
    /// A `.env` file in the working directory is read first when present.
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reading from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg: Config = Config::default();

        set_string(&lookup, "TOURBOOK_API_URL", &mut cfg.api.base_url);
        if let Some(secs) = parse_var::<u64, _>(&lookup, "TOURBOOK_API_TIMEOUT_SECS")? {
            cfg.api.timeout = Duration::from_secs(secs);
        }

        set_string(&lookup, "TOURBOOK_WEATHER_URL", &mut cfg.weather.url);
        set_string(&lookup, "TOURBOOK_WEATHER_API_KEY", &mut cfg.weather.api_key);
        set_string(&lookup, "TOURBOOK_WEATHER_ICON_URL", &mut cfg.weather.icon_url);
        set_string(&lookup, "TOURBOOK_WEATHER_UNITS", &mut cfg.weather.units);
        set_string(&lookup, "TOURBOOK_WEATHER_LANGUAGE", &mut cfg.weather.language);
        if let Some(raw) = lookup("TOURBOOK_WEATHER_CITIES") {
            cfg.weather.cities = city::parse_list(&raw).map_err(|e| invalid("TOURBOOK_WEATHER_CITIES", e))?;
        }

        if let Some(secs) = parse_var::<u64, _>(&lookup, "TOURBOOK_QUERY_STALE_SECS")? {
            cfg.query.stale_time = Duration::from_secs(secs);
        }
        if let Some(retry) = parse_var::<u32, _>(&lookup, "TOURBOOK_QUERY_RETRY")? {
            cfg.query.retry = retry;
        }
        if let Some(focus) = parse_var::<bool, _>(&lookup, "TOURBOOK_QUERY_REFETCH_ON_FOCUS")? {
            cfg.query.refetch_on_focus = focus;
        }

        set_string(&lookup, "TOURBOOK_MAIL_ENDPOINT", &mut cfg.mail.endpoint);
        set_string(&lookup, "TOURBOOK_MAIL_SERVICE_ID", &mut cfg.mail.service_id);
        set_string(&lookup, "TOURBOOK_MAIL_TEMPLATE_ID", &mut cfg.mail.template_id);
        set_string(&lookup, "TOURBOOK_MAIL_PUBLIC_KEY", &mut cfg.mail.public_key);

        if let Some(secs) = parse_var::<u64, _>(&lookup, "TOURBOOK_NOTIFICATION_SECS")? {
            cfg.notification_lifetime = Duration::from_secs(secs);
        }

        let colors: Option<[String; 8]> = lookup("TOURBOOK_TEMP_COLORS").map(|raw| parse_colors(&raw)).transpose()?;
        let default_color: Option<String> = lookup("TOURBOOK_TEMP_COLOR_DEFAULT").map(|raw| raw.trim().to_string());
        if colors.is_some() || default_color.is_some() {
            let colors: [String; 8] = colors.unwrap_or_else(|| cfg.temperature.colors().clone());
            let default_color: String = default_color.unwrap_or_else(|| cfg.temperature.default_color().to_string());
            cfg.temperature = cfg.temperature.with_colors(colors, default_color);
        }
        if let Some(raw) = lookup("TOURBOOK_TEMP_THRESHOLDS") {
            cfg.temperature = parse_scale(&raw, &cfg.temperature)?;
        }

        debug!(api = %cfg.api.base_url, cities = cfg.weather.cities.len(), "configuration loaded");
        Ok(cfg)
    }
}

fn set_string<F>(lookup: &F, key: &str, slot: &mut String)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(key) {
        *slot = value;
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| raw.trim().parse::<T>().map_err(|e| invalid(key, e)))
        .transpose()
}

/// Parses seven comma-separated thresholds, keeping the current colours.
fn parse_scale(raw: &str, current: &TemperatureScale) -> Result<TemperatureScale, ConfigError> {
    let key: &str = "TOURBOOK_TEMP_THRESHOLDS";
    let values: Vec<f64> = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|e| invalid(key, e)))
        .collect::<Result<_, _>>()?;

    let thresholds: [f64; 7] = values
        .try_into()
        .map_err(|v: Vec<f64>| invalid(key, format!("expected 7 values, got {}", v.len())))?;

    current.clone().with_thresholds(thresholds)
}

/// Parses eight comma-separated colour names, coldest band first.
fn parse_colors(raw: &str) -> Result<[String; 8], ConfigError> {
    let key: &str = "TOURBOOK_TEMP_COLORS";
    let names: Vec<String> = raw.split(',').map(|part| part.trim().to_string()).collect();
    if names.iter().any(String::is_empty) {
        return Err(invalid(key, "colour names must not be empty"));
    }
    names
        .try_into()
        .map_err(|v: Vec<String>| invalid(key, format!("expected 8 colours, got {}", v.len())))
}

fn invalid(key: &str, reason: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
