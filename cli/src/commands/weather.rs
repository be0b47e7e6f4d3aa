use std::sync::Arc;

use anyhow::Context;
use colored::*;
use tourbook_common::config::Config;
use tourbook_core::query::Resource;
use tourbook_core::weather::WeatherService;
use tourbook_protocols::openweather::OpenWeatherClient;
use tracing::warn;

use crate::terminal::{colors, format, print, spinner};

pub async fn weather(config: &Config) -> anyhow::Result<()> {
    if config.weather.api_key.is_empty() {
        warn!("TOURBOOK_WEATHER_API_KEY is not set; requests will likely be refused");
    }
    let client: OpenWeatherClient = OpenWeatherClient::new(config.weather.clone(), config.api.timeout)
        .context("building weather client")?;
    let mut service: WeatherService =
        WeatherService::new(Arc::new(client), config.weather.cities.clone(), config.query);

    let results = spinner::spin("Fetching weather...", service.load_all()).await;

    for (idx, (city, state)) in results.into_iter().enumerate() {
        print::tree_head(idx, &city.name);
        let lines: Vec<(String, ColoredString)> = match state {
            Resource::Ready(report) => format::weather_lines(report, &config.temperature, &config.weather.icon_url),
            Resource::Failed(err) => vec![("error".to_string(), err.as_str().color(colors::ERROR))],
            Resource::Idle | Resource::Loading => vec![("status".to_string(), "no data".color(colors::MUTED))],
        };
        print::as_tree_one_level(lines);
    }
    Ok(())
}
