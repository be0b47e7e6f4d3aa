//! Current-weather client for the OpenWeather `data/2.5/weather` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tourbook_common::config::WeatherConfig;
use tourbook_common::error::GatewayError;
use tourbook_common::weather::city::City;
use tourbook_common::weather::report::WeatherReport;
use tourbook_core::ports::WeatherProvider;
use tracing::debug;

use crate::http;

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    main: MainBlock,
    #[serde(default)]
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct Condition {
    main: String,
    description: String,
    icon: String,
}

impl CurrentWeather {
    /// The payload's own `name` is ignored; the configured display name wins.
    fn into_report(self, city: &City) -> Result<WeatherReport, GatewayError> {
        let condition: Condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::Decode(format!("no weather conditions for {}", city.id)))?;
        Ok(WeatherReport {
            city: city.name.clone(),
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            summary: condition.main,
            description: condition.description,
            icon: condition.icon,
        })
    }
}

pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
    timeout: Duration,
}

impl OpenWeatherClient {
    pub fn new(config: WeatherConfig, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self {
            client: http::build_client(timeout)?,
            config,
            timeout,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &City) -> Result<WeatherReport, GatewayError> {
        debug!("Weather request for {} ({}, {})", city.id, city.lat, city.lon);
        let response = self
            .client
            .get(&self.config.url)
            .query(&[
                ("lat", city.lat.to_string()),
                ("lon", city.lon.to_string()),
                ("appid", self.config.api_key.clone()),
                ("units", self.config.units.clone()),
                ("lang", self.config.language.clone()),
            ])
            .send()
            .await
            .map_err(|e| http::map_send_error(e, self.timeout))?;
        let payload: CurrentWeather = http::read_json(response).await?;
        payload.into_report(city)
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
