//! Simulated-annealing refinement of a constructed schedule.
//!
//! A single-solution trajectory search: clone the current schedule, perturb
//! one or more sessions, evaluate the energy, and accept or reject under a
//! geometric cooling schedule. The returned schedule is the best one
//! encountered along the trajectory.

mod config;
mod energy;
mod neighbor;
mod runner;

pub use config::AnnealConfig;
pub use energy::schedule_energy;
pub use neighbor::perturb;
pub use runner::{AnnealResult, AnnealRunner};
