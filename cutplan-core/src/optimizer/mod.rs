//! Cutting-stock optimizer: input normalization, per-pipe packing
//! simulation, and the greedy least-waste consumption loop.

pub mod consumption;
pub mod normalize;
pub mod packing;

pub use consumption::plan_profile_consumption;
pub use normalize::{normalize_catalogue, normalize_cuts};
pub use packing::{simulate_packing, PackingTrial};
