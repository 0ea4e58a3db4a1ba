// src/model/element.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::Category;
use super::electrons::{self, Subshell};
use super::positions::{self, Position};

/// A named compound with a short description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    pub name: String,
    pub description: String,
}

/// One chemical element as described by the bundled dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub atomic_weight: f64,
    pub category: Category,
    pub room_temp_state: String,
    pub fact: String,
    pub history: String,
    pub wikipedia_link: String,
    pub applications: Vec<String>,

    // Optional extended fields
    #[serde(default)]
    pub examples: Vec<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Kelvin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub melting_point: Option<f64>,
    /// Kelvin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boiling_point: Option<f64>,
    /// Pauling scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electronegativity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovered_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fun_facts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compounds: Option<Vec<Compound>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_references: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability_notes: Option<String>,
}

impl ElementRecord {
    /// Minimal record; descriptive fields start empty.
    pub fn new(
        atomic_number: u32,
        symbol: &str,
        name: &str,
        atomic_weight: f64,
        category: Category,
    ) -> Self {
        Self {
            atomic_number,
            symbol: symbol.to_string(),
            name: name.to_string(),
            atomic_weight,
            category,
            room_temp_state: String::new(),
            fact: String::new(),
            history: String::new(),
            wikipedia_link: String::new(),
            applications: Vec::new(),
            examples: Vec::new(),
            icon: None,
            melting_point: None,
            boiling_point: None,
            electronegativity: None,
            discovery_year: None,
            discovered_by: None,
            fun_facts: None,
            compounds: None,
            cultural_references: None,
            sustainability_notes: None,
        }
    }

    /// Grid cell from the static table, (1, 1) for unknown symbols.
    pub fn position(&self) -> Position {
        positions::get_position(&self.symbol).unwrap_or_default()
    }

    pub fn group(&self) -> u8 {
        self.position().group
    }

    pub fn period(&self) -> u8 {
        self.position().period
    }

    pub fn subshells(&self) -> Vec<Subshell> {
        electrons::configuration(self.atomic_number, &self.symbol)
    }

    pub fn electron_configuration(&self) -> String {
        electrons::format_configuration(&self.subshells())
    }

    /// Electrons per Bohr shell, innermost first.
    pub fn shells(&self) -> Vec<u32> {
        electrons::shell_occupancy(&self.subshells())
    }

    pub fn category_color(&self) -> (f64, f64, f64) {
        self.category.color()
    }
}
