//! Reference data: the tour and excursion lists.
//!
//! Both lists are fetched concurrently through their own [`Query`], so one failing
//! never blocks or invalidates the other.

use std::sync::Arc;

use tourbook_common::booking::tour::{Excursion, Tour};
use tourbook_common::config::QueryPolicy;
use tracing::info;

use crate::ports::BookingBackend;
use crate::query::{Query, Resource};

pub struct Catalog {
    backend: Arc<dyn BookingBackend>,
    tours: Query<Vec<Tour>>,
    excursions: Query<Vec<Excursion>>,
}

impl Catalog {
    pub fn new(backend: Arc<dyn BookingBackend>, policy: QueryPolicy) -> Self {
        Self {
            backend,
            tours: Query::new("tours", policy),
            excursions: Query::new("excursions", policy),
        }
    }

    /// Fetches whatever is stale. Fresh lists are served from cache.
    pub async fn load(&mut self) {
        let backend: &dyn BookingBackend = self.backend.as_ref();
        let (tours, excursions) = tokio::join!(
            self.tours.fetch(|| backend.fetch_tours()),
            self.excursions.fetch(|| backend.fetch_excursions()),
        );
        info!(
            "Catalog: {} tours, {} excursions",
            tours.data().map_or(0, Vec::len),
            excursions.data().map_or(0, Vec::len)
        );
    }

    /// Window focus; refetches only if the policy enables it.
    pub async fn on_focus(&mut self) {
        let backend: &dyn BookingBackend = self.backend.as_ref();
        tokio::join!(
            self.tours.on_focus(|| backend.fetch_tours()),
            self.excursions.on_focus(|| backend.fetch_excursions()),
        );
    }

    pub fn tours(&self) -> &Resource<Vec<Tour>> {
        self.tours.state()
    }

    pub fn excursions(&self) -> &Resource<Vec<Excursion>> {
        self.excursions.state()
    }

    /// Loaded tours, or an empty slice while loading or after a failure.
    pub fn tour_list(&self) -> &[Tour] {
        self.tours.state().data().map(Vec::as_slice).unwrap_or_default()
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
