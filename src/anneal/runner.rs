//! Annealing execution loop.

use super::config::AnnealConfig;
use super::energy::schedule_energy;
use super::neighbor::perturb;
use crate::error::SolveError;
use crate::model::{RoomPlan, Schedule};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Iterations between samples of the best-energy history.
const HISTORY_INTERVAL: usize = 10_000;

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The best schedule encountered along the trajectory.
    pub schedule: Schedule,

    /// Energy of the best schedule.
    pub energy: u64,

    /// Energy of the starting schedule, before any perturbation.
    pub initial_energy: u64,

    /// Total iterations (candidate evaluations).
    pub iterations: usize,

    /// Accepted moves, improvements included.
    pub accepted_moves: usize,

    /// Strictly improving moves.
    pub improving_moves: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best energy sampled at regular intervals.
    pub energy_history: Vec<u64>,
}

/// Executes the annealing loop over a constructed schedule.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Refines `schedule` under `config`, consuming draws from `rng`.
    pub fn run<R: Rng>(
        schedule: Schedule,
        plan: &RoomPlan,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult, SolveError> {
        Self::run_with_cancel(schedule, plan, config, rng, None)
    }

    /// Runs the loop with an optional cancellation token, checked once per
    /// iteration. A cancelled run returns the best schedule found so far
    /// with `cancelled` set; it is not an error.
    ///
    /// Per iteration: clone the current schedule, perturb the clone, and
    /// evaluate its energy. A strictly lower energy is accepted outright;
    /// otherwise the candidate is accepted when a uniform draw in `[0, 1)`
    /// falls below `exp((candidate - current) / temperature)`. The
    /// temperature then shrinks geometrically until it reaches the
    /// configured minimum.
    ///
    /// A perturbation failure ([`SolveError::DegenerateSession`] or
    /// [`SolveError::PerturbationExhausted`]) aborts the whole run.
    pub fn run_with_cancel<R: Rng>(
        schedule: Schedule,
        plan: &RoomPlan,
        config: &AnnealConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult, SolveError> {
        config.validate().expect("invalid AnnealConfig");

        let cooling_factor = 1.0 - config.cooling_rate;
        let mut temperature = config.initial_temperature;

        let mut current = schedule;
        let mut current_energy = schedule_energy(&current, plan);
        let initial_energy = current_energy;

        let mut best = current.clone();
        let mut best_energy = current_energy;

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let mut energy_history = vec![best_energy];

        while temperature > config.min_temperature {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let mut candidate = current.clone();
            perturb(&mut candidate, rng)?;
            let candidate_energy = schedule_energy(&candidate, plan);

            let accept = if candidate_energy < current_energy {
                improving_moves += 1;
                true
            } else {
                let delta = candidate_energy as f64 - current_energy as f64;
                let probability = (delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                current = candidate;
                current_energy = candidate_energy;
                accepted_moves += 1;

                if current_energy < best_energy {
                    best = current.clone();
                    best_energy = current_energy;
                }
            }

            iterations += 1;
            if iterations % HISTORY_INTERVAL == 0 {
                energy_history.push(best_energy);
            }

            temperature *= cooling_factor;
        }

        if energy_history.last() != Some(&best_energy) {
            energy_history.push(best_energy);
        }

        Ok(AnnealResult {
            schedule: best,
            energy: best_energy,
            initial_energy,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            cancelled,
            energy_history,
        })
    }
}
