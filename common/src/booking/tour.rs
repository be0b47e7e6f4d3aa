use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// An optional add-on, offered under one or more tours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Excursion {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tour_ids: BTreeSet<String>,
}

impl Excursion {
    pub fn is_offered_for(&self, tour_id: &str) -> bool {
        self.tour_ids.contains(tour_id)
    }
}

/// Looks up a tour name, falling back to the raw id when the catalog does not know it.
pub fn tour_name<'a>(tours: &'a [Tour], tour_id: &'a str) -> &'a str {
    tours
        .iter()
        .find(|tour| tour.id == tour_id)
        .map(|tour| tour.name.as_str())
        .unwrap_or(tour_id)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
