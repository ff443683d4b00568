//! Greedy packing simulation for a single candidate pipe.

use crate::config::{float_cmp, KERF_LOSS_IN};

/// Outcome of simulating a pack of the remaining cuts onto one pipe.
#[derive(Debug, Clone, PartialEq)]
pub struct PackingTrial {
    /// Cut lengths packed, in inches, in walk order.
    pub cuts_in: Vec<f64>,
    /// Total length consumed including kerf loss, in inches.
    pub used_in: f64,
    /// Capacity minus consumed, in inches.
    pub leftover_in: f64,
}

/// Walk the remaining cuts in their current order, packing every cut that
/// still fits on a pipe of `capacity_in` inches.
///
/// Kerf loss accrues progressively, once per cut after the first. The walk
/// only adds cuts; it never reorders, backtracks, or tries subsets. A cut
/// that does not fit is skipped and the walk continues with the next
/// (smaller) one.
pub fn simulate_packing(capacity_in: f64, remaining_cuts_in: &[f64]) -> PackingTrial {
    let mut cuts_in = Vec::new();
    let mut used_in = 0.0;

    for &cut in remaining_cuts_in {
        let extra = if cuts_in.is_empty() {
            cut
        } else {
            KERF_LOSS_IN + cut
        };
        if float_cmp::fits(used_in + extra, capacity_in) {
            used_in += extra;
            cuts_in.push(cut);
        }
    }

    PackingTrial {
        leftover_in: capacity_in - used_in,
        cuts_in,
        used_in,
    }
}
