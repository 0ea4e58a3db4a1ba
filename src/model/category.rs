// src/model/category.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chemical classification used for grouping and colouring elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Actinide,
        Category::AlkaliMetal,
        Category::AlkalineEarthMetal,
        Category::Halogen,
        Category::Lanthanide,
        Category::Metalloid,
        Category::NobleGas,
        Category::Nonmetal,
        Category::PostTransitionMetal,
        Category::TransitionMetal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::AlkaliMetal => "Alkali Metal",
            Category::AlkalineEarthMetal => "Alkaline Earth Metal",
            Category::TransitionMetal => "Transition Metal",
            Category::PostTransitionMetal => "Post-Transition Metal",
            Category::Metalloid => "Metalloid",
            Category::Nonmetal => "Nonmetal",
            Category::Halogen => "Halogen",
            Category::NobleGas => "Noble Gas",
            Category::Lanthanide => "Lanthanide",
            Category::Actinide => "Actinide",
        }
    }

    /// Case-insensitive lookup by display label.
    pub fn from_label(label: &str) -> Option<Self> {
        let needle = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
    }

    /// Tile colour (r, g, b) in 0..1.
    pub fn color(self) -> (f64, f64, f64) {
        match self {
            Category::AlkaliMetal => (0.96, 0.55, 0.38),         // Coral
            Category::AlkalineEarthMetal => (0.98, 0.80, 0.38),  // Amber
            Category::TransitionMetal => (0.93, 0.65, 0.70),     // Rose
            Category::PostTransitionMetal => (0.55, 0.78, 0.85), // Steel Blue
            Category::Metalloid => (0.56, 0.80, 0.60),           // Sage
            Category::Nonmetal => (0.42, 0.70, 0.95),            // Sky
            Category::Halogen => (0.78, 0.90, 0.40),             // Lime
            Category::NobleGas => (0.72, 0.60, 0.92),            // Lavender
            Category::Lanthanide => (0.45, 0.85, 0.80),          // Teal
            Category::Actinide => (0.90, 0.50, 0.85),            // Orchid
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Category::from_label(&value).ok_or_else(|| format!("unknown category '{}'", value))
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.label().to_string()
    }
}
