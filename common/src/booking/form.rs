use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::booking::tourist::Tourist;

/// Top-level fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Email,
    Name,
    Phone,
    Message,
    Tour,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Email, Field::Name, Field::Phone, Field::Message, Field::Tour];

    /// Every field except the free-text message.
    pub const REQUIRED: [Field; 4] = [Field::Email, Field::Name, Field::Phone, Field::Tour];

    pub fn is_required(self) -> bool {
        self != Field::Message
    }

    pub fn key(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Message => "message",
            Field::Tour => "tour",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw values the user has typed or picked so far.
///
/// A fresh value always carries exactly one blank tourist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub message: String,
    pub tour_id: String,
    pub excursion_ids: BTreeSet<String>,
    pub tourists: Vec<Tourist>,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            email: String::new(),
            name: String::new(),
            phone: String::new(),
            message: String::new(),
            tour_id: String::new(),
            excursion_ids: BTreeSet::new(),
            tourists: vec![Tourist::blank()],
        }
    }
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
            Field::Tour => &self.tour_id,
        }
    }

    pub(crate) fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Email => &mut self.email,
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
            Field::Tour => &mut self.tour_id,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Builds the backend payload, trimming values and dropping blank tourists.
    pub fn to_application(&self) -> Application {
        Application {
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
            tour_id: self.tour_id.clone(),
            excursion_ids: self.excursion_ids.iter().cloned().collect(),
            tourists: self
                .tourists
                .iter()
                .filter(|tourist| !tourist.is_blank())
                .map(|tourist| Tourist {
                    id: tourist.id,
                    first_name: tourist.first_name.trim().to_string(),
                    last_name: tourist.last_name.trim().to_string(),
                })
                .collect(),
        }
    }
}

/// Body of `POST /applications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub message: String,
    pub tour_id: String,
    pub excursion_ids: Vec<String>,
    pub tourists: Vec<Tourist>,
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
    use crate::booking::tourist::TouristField;

    #[test]
    fn default_form_has_one_blank_tourist() {
        let form: FormData = FormData::default();
        assert_eq!(form.tourists.len(), 1);
        assert!(form.tourists[0].is_blank());
    }

    #[test]
    fn message_is_the_only_optional_field() {
        let optional: Vec<Field> = Field::ALL.into_iter().filter(|f| !f.is_required()).collect();
        assert_eq!(optional, vec![Field::Message]);
        assert!(!Field::REQUIRED.contains(&Field::Message));
    }

    #[test]
    fn application_drops_blank_tourists_and_trims() {
        let mut form: FormData = FormData::default();
        form.set(Field::Email, " a@b.com ");
        form.set(Field::Tour, "t1");
        form.tourists[0].set(TouristField::FirstName, " Ivan ");
        form.tourists[0].set(TouristField::LastName, "Petrov");
        form.tourists.push(Tourist::blank());

        let application: Application = form.to_application();

        assert_eq!(application.email, "a@b.com");
        assert_eq!(application.tourists.len(), 1);
        assert_eq!(application.tourists[0].first_name, "Ivan");
    }

    #[test]
    fn application_serializes_camel_case() {
        let mut form: FormData = FormData::default();
        form.set(Field::Tour, "t1");
        form.excursion_ids.insert("e1".into());

        let json: serde_json::Value = serde_json::to_value(form.to_application()).unwrap();

        assert_eq!(json["tourId"], "t1");
        assert_eq!(json["excursionIds"][0], "e1");
        assert!(json["tourists"].as_array().unwrap().is_empty());
    }
}
