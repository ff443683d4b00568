//! Error types for consumption planning.

use thiserror::Error;

/// Unit conversion failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("unknown unit '{unit}'")]
    UnknownUnit { unit: String },

    #[error("cannot convert '{from}' to '{to}': incompatible unit families")]
    IncompatibleFamilies { from: String, to: String },

    #[error("input value {value} is not a finite number")]
    NonFiniteInput { value: f64 },

    #[error("converting {value} from '{from}' to '{to}' produced a non-finite result")]
    NonFiniteResult {
        value: f64,
        from: String,
        to: String,
    },
}

/// Main error type for the planner.
///
/// Every variant is a deterministic client/input error; there is no
/// transient or retryable kind. Re-invoking with the same input reproduces
/// the same error.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("material {material_id} does not belong to the requesting company")]
    CompanyMismatch { material_id: String },

    #[error("material {material_id} has category {category}, expected Profile")]
    WrongCategory {
        material_id: String,
        category: String,
    },

    #[error("material {material_id} has no standard lengths defined")]
    EmptyCatalogue { material_id: String },

    #[error("material {material_id} has no standard length that converts to a positive inch value")]
    NoUsableStandardLength { material_id: String },

    #[error("required cut #{index} is not a positive number: '{value}'")]
    InvalidCutLength { index: usize, value: String },

    #[error("required cut of {cut_ft:.2}ft ({cut_in:.2}in) exceeds the largest standard stock length of {max_ft:.2}ft ({max_in:.2}in)")]
    Infeasible {
        cut_ft: f64,
        cut_in: f64,
        max_ft: f64,
        max_in: f64,
    },

    #[error("unit conversion failed for {context}: {source}")]
    Conversion {
        context: String,
        #[source]
        source: UnitError,
    },
}

impl PlanError {
    /// HTTP-style status for this error.
    ///
    /// All planning failures are input errors, so every variant maps to 400.
    pub fn status(&self) -> u16 {
        400
    }
}

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, PlanError>;
