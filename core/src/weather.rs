//! Current weather for the destination cities.
//!
//! Each city has its own cached [`Query`]; all cities load concurrently and fail
//! independently.

use std::sync::Arc;

use futures::future::join_all;
use tourbook_common::config::QueryPolicy;
use tourbook_common::weather::city::City;
use tourbook_common::weather::report::WeatherReport;
use tracing::info;

use crate::ports::WeatherProvider;
use crate::query::{Query, Resource};

pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
    cities: Vec<City>,
    queries: Vec<Query<WeatherReport>>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>, cities: Vec<City>, policy: QueryPolicy) -> Self {
        let queries: Vec<Query<WeatherReport>> = cities
            .iter()
            .map(|city| Query::new(format!("weather/{}", city.id), policy))
            .collect();
        Self {
            provider,
            cities,
            queries,
        }
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Loads every city, serving fresh entries from cache.
    pub async fn load_all(&mut self) -> Vec<(&City, &Resource<WeatherReport>)> {
        let provider: &dyn WeatherProvider = self.provider.as_ref();
        let fetches = self
            .queries
            .iter_mut()
            .zip(&self.cities)
            .map(|(query, city)| query.fetch(move || provider.current(city)));
        let states: Vec<&Resource<WeatherReport>> = join_all(fetches).await;

        let ready: usize = states.iter().filter(|state| state.data().is_some()).count();
        info!("Weather loaded for {ready}/{} cities", self.cities.len());

        self.cities.iter().zip(states).collect()
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
