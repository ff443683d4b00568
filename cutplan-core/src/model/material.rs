//! Material catalogue model.

use serde::{Deserialize, Serialize};

use super::numeric::NumericInput;

/// Catalogue category of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialCategory {
    Profile,
    Glass,
    Hardware,
    Accessory,
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialCategory::Profile => write!(f, "Profile"),
            MaterialCategory::Glass => write!(f, "Glass"),
            MaterialCategory::Hardware => write!(f, "Hardware"),
            MaterialCategory::Accessory => write!(f, "Accessory"),
        }
    }
}

/// One purchasable stock length row, as stored in the catalogue.
///
/// The length may arrive as a number, a numeric string, or a decimal
/// wrapper; the unit is kept as its raw spelling so a malformed row can be
/// skipped with a warning instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardLengthEntry {
    /// Raw length value.
    pub length: NumericInput,
    /// Unit spelling, e.g. "ft" or "mm".
    pub unit: String,
}

/// A material as read from the catalogue.
///
/// Value object: the planner copies what it needs at the start of a run and
/// never mutates the catalogue in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub company_id: String,
    pub category: MaterialCategory,
    /// Purchasable standard stock lengths for this material.
    pub standard_lengths: Vec<StandardLengthEntry>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

impl Material {
    /// Create a material with an empty catalogue.
    pub fn new(
        id: impl Into<String>,
        company_id: impl Into<String>,
        category: MaterialCategory,
    ) -> Self {
        Self {
            id: id.into(),
            company_id: company_id.into(),
            category,
            standard_lengths: Vec::new(),
            name: None,
        }
    }

    /// Append a standard length row.
    pub fn with_standard_length(
        mut self,
        length: impl Into<NumericInput>,
        unit: impl Into<String>,
    ) -> Self {
        self.standard_lengths.push(StandardLengthEntry {
            length: length.into(),
            unit: unit.into(),
        });
        self
    }

    /// Name to show in reports; falls back to the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
