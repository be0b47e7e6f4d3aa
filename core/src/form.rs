//! # Form State Store
//!
//! Holds the registration form: current values, per-field touched flags and errors,
//! the excursion picker and the tourist list.
//!
//! All mutation goes through [`FormState::apply`] with a [`FormEvent`], so the whole
//! store behaves as a `(state, event) -> state` reducer independent of any renderer.
//! Overall validity is never stored; [`FormState::is_valid`] recomputes it from the
//! current values every time.

pub mod excursions;
pub mod tourists;

use std::collections::{BTreeMap, BTreeSet};

use tourbook_common::booking::form::{Application, Field, FormData};
use tourbook_common::booking::tour::Excursion;
use tourbook_common::booking::tourist::{TouristField, TouristId};
use tourbook_common::error::FormError;
use tourbook_common::validation;

use excursions::ExcursionPicker;
use tourists::{TouristError, TouristList};

/// A discrete user or I/O event the form reacts to.
#[derive(Debug, Clone)]
pub enum FormEvent {
    Input { field: Field, value: String },
    Blur(Field),
    SelectTour(String),
    ToggleExcursion(String),
    ExcursionsLoaded(Vec<Excursion>),
    AddTourist,
    RemoveTourist(TouristId),
    MoveTourist { id: TouristId, to: usize },
    TouristInput { id: TouristId, field: TouristField, value: String },
    TouristBlur { id: TouristId, field: TouristField },
    Reset,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: BTreeMap<Field, String>,
    errors: BTreeMap<Field, String>,
    touched: BTreeSet<Field>,
    show_errors: bool,
    excursions: ExcursionPicker,
    tourists: TouristList,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: FormEvent) -> Result<(), FormError> {
        match event {
            FormEvent::Input { field, value } => self.set_field(field, value),
            FormEvent::Blur(field) => self.blur(field),
            FormEvent::SelectTour(tour_id) => self.set_field(Field::Tour, tour_id),
            FormEvent::ToggleExcursion(id) => {
                self.excursions.toggle(&id)?;
            }
            FormEvent::ExcursionsLoaded(catalog) => self.load_excursions(catalog),
            FormEvent::AddTourist => {
                self.tourists.add();
            }
            FormEvent::RemoveTourist(id) => {
                self.tourists.remove(id)?;
            }
            FormEvent::MoveTourist { id, to } => self.tourists.move_to(id, to)?,
            FormEvent::TouristInput { id, field, value } => {
                self.tourists.update(id, field, value, self.show_errors)?
            }
            FormEvent::TouristBlur { id, field } => self.tourists.blur(id, field)?,
            FormEvent::Reset => self.reset(),
        }
        Ok(())
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Updates a value, marks it touched and recomputes its error.
    ///
    /// Changing the tour re-resolves the excursion picker.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value: String = value.into();
        let tour_changed: bool = field == Field::Tour && self.value(Field::Tour) != value;

        self.touched.insert(field);
        self.errors.insert(field, validation::validate(field, &value));
        self.values.insert(field, value);

        if tour_changed {
            let tour_id: String = self.value(Field::Tour).to_string();
            self.excursions.resolve(&tour_id);
        }
    }

    /// Installs a freshly loaded excursion list; the selection is cleared.
    pub fn load_excursions(&mut self, catalog: Vec<Excursion>) {
        let tour_id: String = self.value(Field::Tour).to_string();
        self.excursions.load(catalog, &tour_id);
    }

    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        let error: String = validation::validate(field, self.value(field));
        self.errors.insert(field, error);
    }

    /// Force-touches every required field and every tourist name.
    pub fn touch_all_required(&mut self) {
        self.touched.extend(Field::REQUIRED);
        self.tourists.touch_all();
    }

    /// Raises the form-wide flag that makes every stored error visible.
    pub fn reveal_errors(&mut self) {
        self.show_errors = true;
    }

    pub fn show_errors(&self) -> bool {
        self.show_errors
    }

    /// Runs every rule against the current values.
    ///
    /// On failure all freshly computed errors replace the stored ones. On success the
    /// stored errors are left alone: validity comes from this run only.
    pub fn validate_all(&mut self) -> bool {
        let field_errors: BTreeMap<Field, String> = self.fresh_errors();
        let tourist_errors: Vec<TouristError> = self.tourists.validate();

        let valid: bool = field_errors.values().all(String::is_empty) && tourist_errors.is_empty();
        if !valid {
            self.errors = field_errors;
            self.tourists.write_errors(&tourist_errors);
        }
        valid
    }

    pub fn is_valid(&self) -> bool {
        self.fresh_errors().values().all(String::is_empty) && self.tourists.validate().is_empty()
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn touched(&self) -> &BTreeSet<Field> {
        &self.touched
    }

    /// Last stored error for a field, empty errors excluded.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors
            .get(&field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    /// Stored error, gated by the touched flag or the form-wide flag.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.show_errors || self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn errors(&self) -> BTreeMap<Field, &str> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.error(field).map(|message| (field, message)))
            .collect()
    }

    pub fn excursions(&self) -> &ExcursionPicker {
        &self.excursions
    }

    pub fn tourists(&self) -> &TouristList {
        &self.tourists
    }

    pub fn add_tourist(&mut self) -> TouristId {
        self.tourists.add()
    }

    /// Snapshot of the raw values.
    pub fn data(&self) -> FormData {
        let mut data: FormData = FormData {
            excursion_ids: self.excursions.selected().clone(),
            tourists: self.tourists.iter().cloned().collect(),
            ..FormData::default()
        };
        for field in Field::ALL {
            data.set(field, self.value(field));
        }
        data
    }

    pub fn application(&self) -> Application {
        self.data().to_application()
    }

    /// Back to an empty form with one blank tourist.
    ///
    /// The loaded excursion list is reference data and survives the reset.
    pub fn reset(&mut self) {
        let catalog: Vec<Excursion> = self.excursions.catalog().to_vec();
        *self = FormState::default();
        self.excursions.load(catalog, "");
    }

    fn fresh_errors(&self) -> BTreeMap<Field, String> {
        Field::ALL
            .into_iter()
            .map(|field| (field, validation::validate(field, self.value(field))))
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
