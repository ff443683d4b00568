//! Consumption planning: candidate selection loop and result aggregation.

use crate::config::{
    float_cmp, round_ft, CUT_MATCH_TOLERANCE_IN, EPSILON_IN, INCHES_PER_FOOT,
    USABLE_OFFCUT_MIN_FT,
};
use crate::diagnostics::Diagnostics;
use crate::error::{PlanError, Result};
use crate::model::{
    ConsumptionPlan, Material, MaterialCategory, NumericInput, PipeLayout, StockLength, StockUsage,
};

use super::normalize::{normalize_catalogue, normalize_cuts};
use super::packing::{simulate_packing, PackingTrial};

/// Compute a purchase/cut plan for `material` covering `required_cuts_ft`.
///
/// Greedy, multi-candidate, kerf-aware: each iteration simulates packing the
/// remaining cuts onto every standard length and takes the candidate with
/// the smallest immediate leftover, until no cuts remain. A cut no pipe can
/// hold is written off as scrap so the loop always terminates.
///
/// The run operates on fresh copies of the catalogue and cut lists; the
/// material is never mutated, and concurrent calls are fully independent.
///
/// # Errors
///
/// Fails (always with status 400, never partially) when the material belongs
/// to another company or is not a `Profile`, when the catalogue has no
/// usable standard length, when any required cut is non-numeric or
/// non-positive, or when the largest cut exceeds the largest standard
/// length. The infeasibility check runs eagerly before the main loop.
pub fn plan_profile_consumption(
    material: &Material,
    company_id: &str,
    required_cuts_ft: &[NumericInput],
    diagnostics: &mut dyn Diagnostics,
) -> Result<ConsumptionPlan> {
    if material.company_id != company_id {
        return Err(PlanError::CompanyMismatch {
            material_id: material.id.clone(),
        });
    }
    if material.category != MaterialCategory::Profile {
        return Err(PlanError::WrongCategory {
            material_id: material.id.clone(),
            category: material.category.to_string(),
        });
    }

    let stock = normalize_catalogue(material, diagnostics)?;
    let mut remaining = normalize_cuts(required_cuts_ft)?;

    if remaining.is_empty() {
        return Ok(ConsumptionPlan::empty());
    }

    // Both lists are sorted descending, so the heads are the extremes.
    let largest_cut_in = remaining[0];
    let largest_stock_in = stock[0].length_in_inches;
    if largest_cut_in > largest_stock_in + EPSILON_IN {
        return Err(PlanError::Infeasible {
            cut_ft: largest_cut_in / INCHES_PER_FOOT,
            cut_in: largest_cut_in,
            max_ft: largest_stock_in / INCHES_PER_FOOT,
            max_in: largest_stock_in,
        });
    }

    let mut layouts: Vec<PipeLayout> = Vec::new();
    let mut unfulfillable_scrap_in = 0.0;

    while !remaining.is_empty() {
        match select_candidate(&stock, &remaining) {
            Some((index, trial)) => {
                let PackingTrial {
                    cuts_in,
                    used_in,
                    leftover_in,
                } = trial;
                for &cut in &cuts_in {
                    remove_cut(&mut remaining, cut, diagnostics);
                }
                layouts.push(PipeLayout {
                    stock: stock[index],
                    cuts_in,
                    used_in,
                    leftover_in,
                });
            }
            None => {
                // No pipe fits even one cut. The head of the list is the
                // largest remaining cut; writing it off shrinks the list and
                // guarantees termination.
                let lost = remaining.remove(0);
                unfulfillable_scrap_in += lost;
                diagnostics.warn(&format!(
                    "no standard length fits a {lost:.3}in cut, counting it as scrap"
                ));
            }
        }
    }

    Ok(aggregate(&stock, layouts, unfulfillable_scrap_in))
}

/// Simulate every candidate against the current remaining cuts and pick the
/// least-waste one. Strict less-than comparison, so the first candidate in
/// scan order keeps a tie.
fn select_candidate(stock: &[StockLength], remaining: &[f64]) -> Option<(usize, PackingTrial)> {
    let mut best: Option<(usize, PackingTrial)> = None;
    for (index, candidate) in stock.iter().enumerate() {
        let trial = simulate_packing(candidate.length_in_inches, remaining);
        if trial.cuts_in.is_empty() {
            continue;
        }
        let better = match &best {
            None => true,
            Some((_, current)) => trial.leftover_in < current.leftover_in,
        };
        if better {
            best = Some((index, trial));
        }
    }
    best
}

/// Remove the first near-equal occurrence of `cut` from the working list.
///
/// Tolerant matching absorbs floating-point drift from unit conversion. An
/// unmatched cut should be unreachable; it is reported and skipped rather
/// than aborting the run.
fn remove_cut(remaining: &mut Vec<f64>, cut: f64, diagnostics: &mut dyn Diagnostics) {
    match remaining
        .iter()
        .position(|&c| float_cmp::approx_eq(c, cut, CUT_MATCH_TOLERANCE_IN))
    {
        Some(position) => {
            remaining.remove(position);
        }
        None => diagnostics.warn(&format!(
            "packed cut of {cut:.3}in not found in the working list, skipping removal"
        )),
    }
}

/// Fold the pipe layouts and unfulfillable scrap into the final plan.
fn aggregate(
    stock: &[StockLength],
    layouts: Vec<PipeLayout>,
    unfulfillable_scrap_in: f64,
) -> ConsumptionPlan {
    // Purchase counts per standard length, in catalogue (descending) order.
    let mut usage: Vec<StockUsage> = Vec::new();
    for (index, candidate) in stock.iter().enumerate() {
        if stock[..index]
            .iter()
            .any(|earlier| earlier.same_standard(candidate))
        {
            continue;
        }
        let count = layouts
            .iter()
            .filter(|layout| layout.stock.same_standard(candidate))
            .count() as u32;
        if count > 0 {
            usage.push(StockUsage {
                length: candidate.length,
                unit: candidate.unit,
                length_in_inches: candidate.length_in_inches,
                count,
            });
        }
    }

    let mut scrap_in = unfulfillable_scrap_in;
    let mut offcuts_ft: Vec<f64> = Vec::new();
    for layout in &layouts {
        let leftover_ft = layout.leftover_ft();
        if leftover_ft >= USABLE_OFFCUT_MIN_FT {
            offcuts_ft.push(round_ft(leftover_ft));
        } else {
            scrap_in += layout.leftover_in;
        }
    }
    offcuts_ft.retain(|&ft| ft > 0.0);
    offcuts_ft.sort_by(|a, b| a.total_cmp(b));

    ConsumptionPlan {
        total_pipes_from_stock: layouts.len() as u32,
        pipes_per_standard_length: usage,
        total_scrap_ft: round_ft(scrap_in / INCHES_PER_FOOT),
        usable_offcuts_ft: offcuts_ft,
        layouts,
    }
}
