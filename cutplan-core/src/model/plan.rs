//! Plan result model: normalized stock lengths, pipe layouts, aggregates.

use serde::{Deserialize, Serialize};

use crate::config::{float_cmp, EPSILON_IN, INCHES_PER_FOOT, KERF_LOSS_IN};
use crate::units::LinearUnit;

/// A catalogue standard length normalized to inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLength {
    /// Catalogue value in its original unit.
    pub length: f64,
    /// Original catalogue unit.
    pub unit: LinearUnit,
    /// Normalized length in inches; always positive.
    pub length_in_inches: f64,
}

impl StockLength {
    /// Whether two stock lengths refer to the same catalogue standard.
    pub fn same_standard(&self, other: &StockLength) -> bool {
        self.unit == other.unit && float_cmp::approx_eq(self.length, other.length, EPSILON_IN)
    }
}

/// One consumed physical pipe and the cuts packed onto it.
///
/// Immutable once created; one instance per pipe taken from stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipeLayout {
    /// The standard stock length this pipe was purchased as.
    pub stock: StockLength,
    /// Packed cut lengths in inches, in packing order.
    pub cuts_in: Vec<f64>,
    /// Total length consumed including kerf loss, in inches.
    pub used_in: f64,
    /// Immediate leftover, in inches.
    pub leftover_in: f64,
}

impl PipeLayout {
    /// Kerf loss charged on this pipe, in inches. The first cut on a pipe
    /// incurs no loss.
    pub fn kerf_loss_in(&self) -> f64 {
        match self.cuts_in.len() {
            0 | 1 => 0.0,
            n => (n - 1) as f64 * KERF_LOSS_IN,
        }
    }

    /// Immediate leftover in feet.
    pub fn leftover_ft(&self) -> f64 {
        self.leftover_in / INCHES_PER_FOOT
    }
}

/// Purchase count for one standard length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUsage {
    /// Catalogue value in its original unit.
    pub length: f64,
    /// Original catalogue unit.
    pub unit: LinearUnit,
    /// Normalized length in inches.
    pub length_in_inches: f64,
    /// Number of pipes of this standard length consumed.
    pub count: u32,
}

/// Aggregate result of a consumption planning run.
///
/// Derived entirely from the pipe layouts plus unfulfillable-cut scrap;
/// never mutated after construction. Field names on the wire match the
/// upstream estimation workflow's interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionPlan {
    /// Total physical pipes consumed from stock.
    #[serde(rename = "totalPipesFromStock")]
    pub total_pipes_from_stock: u32,
    /// Purchase counts per standard length, in descending length order.
    #[serde(rename = "pipesTakenPerStandardLength")]
    pub pipes_per_standard_length: Vec<StockUsage>,
    /// Total unusable scrap in feet, rounded to 3 decimals.
    #[serde(rename = "totalScrapGenerated_ft")]
    pub total_scrap_ft: f64,
    /// Reusable offcuts in feet, ascending, rounded to 3 decimals.
    #[serde(rename = "finalUsableOffcuts_ft")]
    pub usable_offcuts_ft: Vec<f64>,
    /// Per-pipe layout detail.
    #[serde(rename = "pipeLayouts")]
    pub layouts: Vec<PipeLayout>,
}

impl ConsumptionPlan {
    /// The zero plan returned for an empty cut list.
    pub fn empty() -> Self {
        Self {
            total_pipes_from_stock: 0,
            pipes_per_standard_length: Vec::new(),
            total_scrap_ft: 0.0,
            usable_offcuts_ft: Vec::new(),
            layouts: Vec::new(),
        }
    }
}
