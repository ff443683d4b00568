//! External numeric input adapter.
//!
//! Length values arrive from the upstream service in several shapes: plain
//! JSON numbers, numeric strings, or the document store's decimal wrapper
//! (`{"$numberDecimal": "12.5"}`). All three are normalized here, at the
//! input boundary, so the planner itself only ever computes with `f64`.

use serde::{Deserialize, Serialize};

/// A numeric value in any of the accepted external shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// Plain JSON number.
    Number(f64),
    /// Decimal wrapper emitted by the document store.
    Decimal {
        #[serde(rename = "$numberDecimal")]
        value: String,
    },
    /// Numeric string.
    Text(String),
}

impl NumericInput {
    /// Parse into a finite float.
    ///
    /// Returns `None` for unparseable text and for non-finite values.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Decimal { value } => value.trim().parse().ok()?,
            NumericInput::Text(s) => s.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl std::fmt::Display for NumericInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericInput::Number(n) => write!(f, "{n}"),
            NumericInput::Decimal { value } => write!(f, "{value}"),
            NumericInput::Text(s) => write!(f, "{s}"),
        }
    }
}
