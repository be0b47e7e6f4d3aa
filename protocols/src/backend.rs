//! REST backend: `GET /tours`, `GET /excursions`, `POST /applications`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tourbook_common::booking::form::Application;
use tourbook_common::booking::tour::{Excursion, Tour};
use tourbook_common::config::ApiConfig;
use tourbook_common::error::GatewayError;
use tourbook_core::ports::BookingBackend;
use tracing::debug;

use crate::http;

pub struct RestBackend {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl RestBackend {
    pub fn new(config: &ApiConfig) -> Result<Self, GatewayError> {
        Ok(Self {
            client: http::build_client(config.timeout)?,
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        })
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url: String = http::endpoint(&self.base_url, path);
        debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| http::map_send_error(e, self.timeout))?;
        http::read_json(response).await
    }
}

#[async_trait]
impl BookingBackend for RestBackend {
    async fn fetch_tours(&self) -> Result<Vec<Tour>, GatewayError> {
        self.get("tours").await
    }

    async fn fetch_excursions(&self) -> Result<Vec<Excursion>, GatewayError> {
        self.get("excursions").await
    }

    async fn submit_application(&self, application: &Application) -> Result<(), GatewayError> {
        let url: String = http::endpoint(&self.base_url, "applications");
        debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .json(application)
            .send()
            .await
            .map_err(|e| http::map_send_error(e, self.timeout))?;
        http::ensure_success(response).await?;
        Ok(())
    }
}
