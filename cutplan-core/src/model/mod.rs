//! Data model: material catalogue, numeric input adapter, plan results.

pub mod material;
pub mod numeric;
pub mod plan;

pub use material::{Material, MaterialCategory, StandardLengthEntry};
pub use numeric::NumericInput;
pub use plan::{ConsumptionPlan, PipeLayout, StockLength, StockUsage};
