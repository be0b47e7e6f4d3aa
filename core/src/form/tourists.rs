//! Variable-length tourist list.
//!
//! Every record carries its own errors and touched flags, stored next to the record and
//! addressed by its [`TouristId`]. Removing or moving one record therefore never shifts
//! error state onto a neighbour.

use std::collections::{BTreeMap, BTreeSet};

use tourbook_common::booking::tourist::{Tourist, TouristField, TouristId};
use tourbook_common::error::FormError;
use tourbook_common::validation;

#[derive(Debug, Clone)]
struct TouristEntry {
    tourist: Tourist,
    errors: BTreeMap<TouristField, String>,
    touched: BTreeSet<TouristField>,
}

impl TouristEntry {
    fn blank() -> Self {
        Self {
            tourist: Tourist::blank(),
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
        }
    }

    fn revalidate(&mut self, field: TouristField) {
        let error: String = validation::validate_tourist(&self.tourist, field);
        self.errors.insert(field, error);
    }
}

/// A fresh validation error for one field of one tourist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouristError {
    pub id: TouristId,
    pub field: TouristField,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct TouristList {
    entries: Vec<TouristEntry>,
}

impl Default for TouristList {
    fn default() -> Self {
        Self {
            entries: vec![TouristEntry::blank()],
        }
    }
}

impl TouristList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tourist> {
        self.entries.iter().map(|entry| &entry.tourist)
    }

    pub fn get(&self, id: TouristId) -> Option<&Tourist> {
        self.entries
            .iter()
            .find(|entry| entry.tourist.id == id)
            .map(|entry| &entry.tourist)
    }

    pub fn ids(&self) -> Vec<TouristId> {
        self.iter().map(|tourist| tourist.id).collect()
    }

    /// Appends a blank tourist and returns its handle.
    pub fn add(&mut self) -> TouristId {
        let entry: TouristEntry = TouristEntry::blank();
        let id: TouristId = entry.tourist.id;
        self.entries.push(entry);
        id
    }

    /// Removes the tourist with `id`. The last remaining tourist is never removed.
    pub fn remove(&mut self, id: TouristId) -> Result<Tourist, FormError> {
        let idx: usize = self.position(id)?;
        if self.entries.len() == 1 {
            return Err(FormError::LastTourist);
        }
        Ok(self.entries.remove(idx).tourist)
    }

    /// Moves a tourist to `to` (clamped to the end of the list).
    pub fn move_to(&mut self, id: TouristId, to: usize) -> Result<(), FormError> {
        let idx: usize = self.position(id)?;
        let entry: TouristEntry = self.entries.remove(idx);
        let to: usize = to.min(self.entries.len());
        self.entries.insert(to, entry);
        Ok(())
    }

    /// Sets one name of one tourist.
    ///
    /// The field's error is recomputed only when the field is touched or `show_errors`
    /// is raised; otherwise the previous error (if any) is kept as is.
    pub fn update(
        &mut self,
        id: TouristId,
        field: TouristField,
        value: impl Into<String>,
        show_errors: bool,
    ) -> Result<(), FormError> {
        let entry: &mut TouristEntry = self.entry_mut(id)?;
        entry.tourist.set(field, value);
        if show_errors || entry.touched.contains(&field) {
            entry.revalidate(field);
        }
        Ok(())
    }

    /// The user left the field: mark it touched and validate it.
    pub fn blur(&mut self, id: TouristId, field: TouristField) -> Result<(), FormError> {
        let entry: &mut TouristEntry = self.entry_mut(id)?;
        entry.touched.insert(field);
        entry.revalidate(field);
        Ok(())
    }

    pub fn touch_all(&mut self) {
        for entry in &mut self.entries {
            entry.touched.extend(TouristField::ALL);
        }
    }

    pub fn is_touched(&self, id: TouristId, field: TouristField) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.tourist.id == id && entry.touched.contains(&field))
    }

    /// Last stored error for a field, whether or not it should be shown.
    pub fn error(&self, id: TouristId, field: TouristField) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.tourist.id == id)
            .and_then(|entry| entry.errors.get(&field))
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    pub fn visible_error(&self, id: TouristId, field: TouristField, show_errors: bool) -> Option<&str> {
        if show_errors || self.is_touched(id, field) {
            self.error(id, field)
        } else {
            None
        }
    }

    /// Runs the name rules over every record that takes part in the application.
    ///
    /// Blank records are skipped, unless every record is blank; then the first one is
    /// validated so that at least one named tourist is demanded.
    pub fn validate(&self) -> Vec<TouristError> {
        let all_blank: bool = self.iter().all(Tourist::is_blank);
        let mut errors: Vec<TouristError> = Vec::new();

        for (idx, entry) in self.entries.iter().enumerate() {
            let checked: bool = !entry.tourist.is_blank() || (all_blank && idx == 0);
            if !checked {
                continue;
            }
            for field in TouristField::ALL {
                let message: String = validation::validate_tourist(&entry.tourist, field);
                if !message.is_empty() {
                    errors.push(TouristError {
                        id: entry.tourist.id,
                        field,
                        message,
                    });
                }
            }
        }
        errors
    }

    /// Replaces every stored error with `errors`.
    pub fn write_errors(&mut self, errors: &[TouristError]) {
        for entry in &mut self.entries {
            entry.errors.clear();
        }
        for error in errors {
            if let Ok(entry) = self.entry_mut(error.id) {
                entry.errors.insert(error.field, error.message.clone());
            }
        }
    }

    fn position(&self, id: TouristId) -> Result<usize, FormError> {
        self.entries
            .iter()
            .position(|entry| entry.tourist.id == id)
            .ok_or(FormError::UnknownTourist(id))
    }

    fn entry_mut(&mut self, id: TouristId) -> Result<&mut TouristEntry, FormError> {
        let idx: usize = self.position(id)?;
        Ok(&mut self.entries[idx])
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

#[cfg(test)]
mod tests {
    use super::*;
    use tourbook_common::validation::{NAME_REQUIRED, NAME_UPPERCASE};

    #[test]
    fn remove_on_single_tourist_is_refused() {
        let mut list: TouristList = TouristList::new();
        let id: TouristId = list.ids()[0];

        assert_eq!(list.remove(id), Err(FormError::LastTourist));
        assert_eq!(list.len(), 1);
        assert!(list.get(id).is_some());
    }

    #[test]
    fn add_assigns_fresh_ids() {
        let mut list: TouristList = TouristList::new();
        let second: TouristId = list.add();
        let third: TouristId = list.add();

        assert_eq!(list.len(), 3);
        assert_ne!(second, third);
        assert!(list.get(second).unwrap().is_blank());
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut list: TouristList = TouristList::new();
        let stranger: TouristId = TouristId::generate();

        assert_eq!(list.remove(stranger), Err(FormError::UnknownTourist(stranger)));
        assert!(list.blur(stranger, TouristField::FirstName).is_err());
    }

    #[test]
    fn update_validates_only_touched_fields() {
        let mut list: TouristList = TouristList::new();
        let id: TouristId = list.ids()[0];

        list.update(id, TouristField::FirstName, "ivan", false).unwrap();
        assert_eq!(list.error(id, TouristField::FirstName), None);

        list.blur(id, TouristField::FirstName).unwrap();
        assert_eq!(list.error(id, TouristField::FirstName), Some(NAME_UPPERCASE));

        list.update(id, TouristField::FirstName, "Ivan", false).unwrap();
        assert_eq!(list.error(id, TouristField::FirstName), None);
    }

    #[test]
    fn show_errors_forces_revalidation() {
        let mut list: TouristList = TouristList::new();
        let id: TouristId = list.ids()[0];

        list.update(id, TouristField::LastName, "petrov", true).unwrap();
        assert_eq!(list.visible_error(id, TouristField::LastName, true), Some(NAME_UPPERCASE));
        assert_eq!(list.visible_error(id, TouristField::LastName, false), None);
    }

    #[test]
    fn errors_follow_the_record_after_removal_and_reorder() {
        let mut list: TouristList = TouristList::new();
        let first: TouristId = list.ids()[0];
        let second: TouristId = list.add();
        let third: TouristId = list.add();

        list.blur(third, TouristField::FirstName).unwrap();
        list.update(second, TouristField::FirstName, "Anna", false).unwrap();
        list.blur(second, TouristField::FirstName).unwrap();

        list.remove(first).unwrap();
        list.move_to(third, 0).unwrap();

        assert_eq!(list.ids(), vec![third, second]);
        assert_eq!(list.error(third, TouristField::FirstName), Some(NAME_REQUIRED));
        assert_eq!(list.error(second, TouristField::FirstName), None);
    }

    #[test]
    fn blank_records_are_skipped_unless_all_are_blank() {
        let mut list: TouristList = TouristList::new();
        let first: TouristId = list.ids()[0];
        let second: TouristId = list.add();

        let errors: Vec<TouristError> = list.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.id == first));

        list.update(second, TouristField::FirstName, "Ivan", false).unwrap();
        list.update(second, TouristField::LastName, "Petrov", false).unwrap();
        assert!(list.validate().is_empty());
    }

    #[test]
    fn touch_all_is_idempotent() {
        let mut list: TouristList = TouristList::new();
        let id: TouristId = list.ids()[0];

        list.touch_all();
        list.touch_all();

        assert!(list.is_touched(id, TouristField::FirstName));
        assert!(list.is_touched(id, TouristField::LastName));
    }
}
