//! Unit parsing and conversion.
//!
//! Two independent dimensional families are supported, each convertible only
//! within itself through a fixed factor to a common base: linear units
//! (base: feet) and area units (base: square feet). Count-style units
//! (pcs, piece, item, unit, set) convert to each other as identity and never
//! to a dimensional unit.

use serde::{Deserialize, Serialize};

use crate::error::UnitError;

/// Conversion factor: feet per inch.
const FT_PER_IN: f64 = 1.0 / 12.0;
/// Conversion factor: feet per millimeter.
const FT_PER_MM: f64 = 1.0 / 304.8;
/// Conversion factor: feet per centimeter.
const FT_PER_CM: f64 = 1.0 / 30.48;
/// Conversion factor: feet per meter.
const FT_PER_M: f64 = 1.0 / 0.3048;

/// Conversion factor: square feet per square inch.
const SQFT_PER_SQIN: f64 = 1.0 / 144.0;
/// Conversion factor: square feet per square millimeter.
const SQFT_PER_SQMM: f64 = 1.0 / 92_903.04;
/// Conversion factor: square feet per square centimeter.
const SQFT_PER_SQCM: f64 = 1.0 / 929.030_4;
/// Conversion factor: square feet per square meter.
const SQFT_PER_SQM: f64 = 1.0 / 0.092_903_04;

/// Linear length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinearUnit {
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "m")]
    Meters,
}

impl LinearUnit {
    /// Parse a linear unit spelling, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "in" | "inch" | "inches" => Some(LinearUnit::Inches),
            "ft" | "foot" | "feet" => Some(LinearUnit::Feet),
            "mm" => Some(LinearUnit::Millimeters),
            "cm" => Some(LinearUnit::Centimeters),
            "m" => Some(LinearUnit::Meters),
            _ => None,
        }
    }

    /// Conversion factor from this unit to the family base (feet).
    pub fn to_feet_factor(&self) -> f64 {
        match self {
            LinearUnit::Inches => FT_PER_IN,
            LinearUnit::Feet => 1.0,
            LinearUnit::Millimeters => FT_PER_MM,
            LinearUnit::Centimeters => FT_PER_CM,
            LinearUnit::Meters => FT_PER_M,
        }
    }
}

impl std::fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinearUnit::Inches => write!(f, "in"),
            LinearUnit::Feet => write!(f, "ft"),
            LinearUnit::Millimeters => write!(f, "mm"),
            LinearUnit::Centimeters => write!(f, "cm"),
            LinearUnit::Meters => write!(f, "m"),
        }
    }
}

/// Area unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaUnit {
    #[serde(rename = "sqin")]
    SquareInches,
    #[serde(rename = "sqft")]
    SquareFeet,
    #[serde(rename = "sqmm")]
    SquareMillimeters,
    #[serde(rename = "sqcm")]
    SquareCentimeters,
    #[serde(rename = "sqm")]
    SquareMeters,
}

impl AreaUnit {
    /// Parse an area unit spelling, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sqin" => Some(AreaUnit::SquareInches),
            "sqft" => Some(AreaUnit::SquareFeet),
            "sqmm" => Some(AreaUnit::SquareMillimeters),
            "sqcm" => Some(AreaUnit::SquareCentimeters),
            "sqm" => Some(AreaUnit::SquareMeters),
            _ => None,
        }
    }

    /// Conversion factor from this unit to the family base (square feet).
    pub fn to_square_feet_factor(&self) -> f64 {
        match self {
            AreaUnit::SquareInches => SQFT_PER_SQIN,
            AreaUnit::SquareFeet => 1.0,
            AreaUnit::SquareMillimeters => SQFT_PER_SQMM,
            AreaUnit::SquareCentimeters => SQFT_PER_SQCM,
            AreaUnit::SquareMeters => SQFT_PER_SQM,
        }
    }
}

impl std::fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AreaUnit::SquareInches => write!(f, "sqin"),
            AreaUnit::SquareFeet => write!(f, "sqft"),
            AreaUnit::SquareMillimeters => write!(f, "sqmm"),
            AreaUnit::SquareCentimeters => write!(f, "sqcm"),
            AreaUnit::SquareMeters => write!(f, "sqm"),
        }
    }
}

/// A unit from any supported family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unit {
    Linear(LinearUnit),
    Area(AreaUnit),
    /// Count-style unit (pcs, piece, item, unit, set). All spellings are
    /// interchangeable; conversion between them is identity.
    Count,
}

impl Unit {
    /// Parse a unit spelling from any family.
    pub fn parse(s: &str) -> Option<Self> {
        if let Some(unit) = LinearUnit::parse(s) {
            return Some(Unit::Linear(unit));
        }
        if let Some(unit) = AreaUnit::parse(s) {
            return Some(Unit::Area(unit));
        }
        match s.trim().to_lowercase().as_str() {
            "pcs" | "piece" | "pieces" | "item" | "items" | "unit" | "units" | "set"
            | "sets" => Some(Unit::Count),
            _ => None,
        }
    }
}

/// Convert `value` from `from_unit` to `to_unit`.
///
/// Same-unit conversion is always identity, independent of table lookup.
/// Pure function: no state, no side effects, safe to call from concurrent
/// planning runs.
///
/// # Errors
///
/// Returns a [`UnitError`] for an unknown unit spelling, a conversion across
/// unit families, a non-finite input, or a non-finite result.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, UnitError> {
    if !value.is_finite() {
        return Err(UnitError::NonFiniteInput { value });
    }

    // Identity shortcut before any table lookup.
    if from_unit.trim().eq_ignore_ascii_case(to_unit.trim()) {
        return Ok(value);
    }

    let from = Unit::parse(from_unit).ok_or_else(|| UnitError::UnknownUnit {
        unit: from_unit.trim().to_string(),
    })?;
    let to = Unit::parse(to_unit).ok_or_else(|| UnitError::UnknownUnit {
        unit: to_unit.trim().to_string(),
    })?;

    let result = match (from, to) {
        (Unit::Linear(from), Unit::Linear(to)) => {
            value * from.to_feet_factor() / to.to_feet_factor()
        }
        (Unit::Area(from), Unit::Area(to)) => {
            value * from.to_square_feet_factor() / to.to_square_feet_factor()
        }
        (Unit::Count, Unit::Count) => value,
        _ => {
            return Err(UnitError::IncompatibleFamilies {
                from: from_unit.trim().to_string(),
                to: to_unit.trim().to_string(),
            });
        }
    };

    if !result.is_finite() {
        return Err(UnitError::NonFiniteResult {
            value,
            from: from_unit.trim().to_string(),
            to: to_unit.trim().to_string(),
        });
    }

    Ok(result)
}
