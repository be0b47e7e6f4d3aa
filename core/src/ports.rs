//! # Outbound Ports
//!
//! Contracts for everything the booking flow needs from the outside world.
//!
//! ## Rules
//! 1. Only traits live here; the HTTP implementations are in `tourbook-protocols`.
//! 2. Signatures use the models from `tourbook-common`.
//! 3. Failures are reported as [`GatewayError`] and never panic.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tourbook_common::booking::form::Application;
use tourbook_common::booking::tour::{Excursion, Tour};
use tourbook_common::error::GatewayError;
use tourbook_common::weather::city::City;
use tourbook_common::weather::report::WeatherReport;

/// The tour agency's REST backend.
#[async_trait]
pub trait BookingBackend: Send + Sync {
    /// `GET /tours`
    async fn fetch_tours(&self) -> Result<Vec<Tour>, GatewayError>;

    /// `GET /excursions`
    async fn fetch_excursions(&self) -> Result<Vec<Excursion>, GatewayError>;

    /// `POST /applications`; any non-2xx answer is an error.
    async fn submit_application(&self, application: &Application) -> Result<(), GatewayError>;
}

/// Flat key/value parameters substituted into a mail template.
pub type TemplateParams = BTreeMap<String, String>;

/// A transactional email service addressed by template.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, params: &TemplateParams) -> Result<(), GatewayError>;
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &City) -> Result<WeatherReport, GatewayError>;
}
