//! Greedy schedule construction.
//!
//! Builds one feasible session grid at a time, placing each staff member in
//! the room that minimizes a multi-term penalty derived from the pairing and
//! load statistics accumulated by all prior placements.

mod builder;
mod stats;

pub use builder::GreedyBuilder;
pub use stats::{LoadStats, PairingMatrix};
