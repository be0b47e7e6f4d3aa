use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle assigned to a tourist when it is created.
///
/// Edits and removals address tourists by this handle, never by list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TouristId(Uuid);

impl TouristId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TouristId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tourist {
    pub id: TouristId,
    pub first_name: String,
    pub last_name: String,
}

impl Tourist {
    pub fn blank() -> Self {
        Self {
            id: TouristId::generate(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    pub fn get(&self, field: TouristField) -> &str {
        match field {
            TouristField::FirstName => &self.first_name,
            TouristField::LastName => &self.last_name,
        }
    }

    pub fn set(&mut self, field: TouristField, value: impl Into<String>) {
        match field {
            TouristField::FirstName => self.first_name = value.into(),
            TouristField::LastName => self.last_name = value.into(),
        }
    }

    /// A record with neither name filled in.
    pub fn is_blank(&self) -> bool {
        self.first_name.trim().is_empty() && self.last_name.trim().is_empty()
    }

    /// "Lastname Firstname", the order used in confirmation emails.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name.trim(), self.first_name.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TouristField {
    FirstName,
    LastName,
}

impl TouristField {
    pub const ALL: [TouristField; 2] = [TouristField::FirstName, TouristField::LastName];
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
