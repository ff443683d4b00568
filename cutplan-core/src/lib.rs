//! cutplan-core - Cutting-stock planning for aluminium profile materials.
//!
//! Given a material's catalogue of standard stock-pipe lengths and a list of
//! required cut lengths in feet, the planner decides which pipes to consume
//! and how to pack cuts onto them, minimizing waste under a kerf-loss model.
//! The computation is synchronous, allocation-scoped, and side-effect free;
//! warnings flow through an injectable diagnostics sink.
//!
//! # Example
//!
//! ```
//! use cutplan_core::{plan_consumption, Material, MaterialCategory};
//!
//! let material = Material::new("alu-50x50", "acme", MaterialCategory::Profile)
//!     .with_standard_length(12.0, "ft");
//!
//! let plan = plan_consumption(&material, "acme", &[5.0.into(), 5.0.into(), 1.9.into()]).unwrap();
//! assert_eq!(plan.total_pipes_from_stock, 1);
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod optimizer;
pub mod report;
pub mod units;

// Re-exports for convenience
pub use diagnostics::{Diagnostics, RecordingDiagnostics, TracingDiagnostics};
pub use error::{PlanError, Result, UnitError};
pub use model::{
    ConsumptionPlan, Material, MaterialCategory, NumericInput, PipeLayout, StandardLengthEntry,
    StockLength, StockUsage,
};
pub use optimizer::plan_profile_consumption;
pub use report::render_plan;
pub use units::{convert, AreaUnit, LinearUnit, Unit};

/// Plan consumption with the default tracing-backed diagnostics sink.
///
/// Thin wrapper over [`plan_profile_consumption`] for callers that do not
/// need to capture warnings themselves.
pub fn plan_consumption(
    material: &Material,
    company_id: &str,
    required_cuts_ft: &[NumericInput],
) -> Result<ConsumptionPlan> {
    let mut diagnostics = TracingDiagnostics;
    plan_profile_consumption(material, company_id, required_cuts_ft, &mut diagnostics)
}
