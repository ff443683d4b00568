//! Configuration constants for the cutting-stock planner.

/// Capacity comparison epsilon, in inches.
///
/// Tolerates floating-point drift from successive unit conversions; applied
/// to every comparison against a pipe's capacity.
pub const EPSILON_IN: f64 = 0.001;

/// Material lost to the saw blade, in inches.
///
/// Charged once per cut after the first packed on a given pipe: n cuts on
/// one pipe consume `sum(cuts) + (n - 1) * kerf`.
pub const KERF_LOSS_IN: f64 = 0.125;

/// Minimum leftover length that counts as a reusable offcut, in feet.
/// Shorter leftovers are folded into unusable scrap.
pub const USABLE_OFFCUT_MIN_FT: f64 = 3.0;

/// Near-equality tolerance when matching a packed cut back to the working
/// list, in inches.
pub const CUT_MATCH_TOLERANCE_IN: f64 = 0.001;

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Round a feet-denominated output value to 3 decimal places.
#[inline]
pub fn round_ft(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Utility functions for floating-point length comparisons.
pub mod float_cmp {
    use super::EPSILON_IN;

    /// Check if two lengths are approximately equal within `tol`.
    #[inline]
    pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    /// Check if `length` fits within `capacity` under the capacity epsilon.
    #[inline]
    pub fn fits(length: f64, capacity: f64) -> bool {
        length <= capacity + EPSILON_IN
    }
}
