//! Dependent-field resolver for excursions.
//!
//! The set of selectable excursions is derived from the selected tour. Whenever either
//! input changes the derived set is rebuilt and the selection is cleared, even for
//! excursions that would still be offered.

use std::collections::BTreeSet;

use tourbook_common::booking::tour::Excursion;
use tourbook_common::error::FormError;

/// Excursions offered under `tour_id`, in catalog order.
pub fn available_for<'a>(tour_id: &str, catalog: &'a [Excursion]) -> Vec<&'a Excursion> {
    if tour_id.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|excursion| excursion.is_offered_for(tour_id))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct ExcursionPicker {
    catalog: Vec<Excursion>,
    available: Vec<Excursion>,
    selected: BTreeSet<String>,
}

impl ExcursionPicker {
    /// Replaces the loaded excursion list and re-resolves against `tour_id`.
    pub fn load(&mut self, catalog: Vec<Excursion>, tour_id: &str) {
        self.catalog = catalog;
        self.resolve(tour_id);
    }

    /// Recomputes the available set for `tour_id` and drops every selection.
    pub fn resolve(&mut self, tour_id: &str) {
        self.available = available_for(tour_id, &self.catalog)
            .into_iter()
            .cloned()
            .collect();
        self.selected.clear();
    }

    pub fn catalog(&self) -> &[Excursion] {
        &self.catalog
    }

    pub fn available(&self) -> &[Excursion] {
        &self.available
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn is_available(&self, excursion_id: &str) -> bool {
        self.available.iter().any(|excursion| excursion.id == excursion_id)
    }

    /// Flips the selection of one excursion and returns whether it is now selected.
    pub fn toggle(&mut self, excursion_id: &str) -> Result<bool, FormError> {
        if !self.is_available(excursion_id) {
            return Err(FormError::ExcursionUnavailable(excursion_id.to_string()));
        }
        if self.selected.remove(excursion_id) {
            return Ok(false);
        }
        self.selected.insert(excursion_id.to_string());
        Ok(true)
    }

    /// Names of the selected excursions, in catalog order.
    pub fn selected_names(&self) -> Vec<&str> {
        self.available
            .iter()
            .filter(|excursion| self.selected.contains(&excursion.id))
            .map(|excursion| excursion.name.as_str())
            .collect()
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
