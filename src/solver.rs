//! End-to-end pipeline: room plan, greedy construction, annealing.

use crate::anneal::{schedule_energy, AnnealConfig, AnnealResult, AnnealRunner};
use crate::error::SolveError;
use crate::greedy::{GreedyBuilder, PairingMatrix};
use crate::model::{RoomPlan, Schedule};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// The input triple: how many staff, rooms, and sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    /// Number of staff members, identified as `0..population`.
    pub population: usize,
    /// Number of rooms; capacity is `ceil(population / room_count)` each.
    pub room_count: usize,
    /// Number of sessions to schedule.
    pub sessions: usize,
}

impl Problem {
    pub fn new(population: usize, room_count: usize, sessions: usize) -> Self {
        Self {
            population,
            room_count,
            sessions,
        }
    }
}

/// Everything produced by one optimization run.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// The room layout the schedule was built against.
    pub plan: RoomPlan,
    /// The final (annealed, or greedy-only for trivial inputs) schedule.
    pub schedule: Schedule,
    /// Energy of the final schedule.
    pub energy: u64,
    /// Pair co-occurrence counts accumulated during construction.
    pub pairing: PairingMatrix,
    /// Annealing statistics; `None` when annealing was skipped because there
    /// was nothing to perturb.
    pub anneal: Option<AnnealResult>,
}

/// Runs the full pipeline for `problem` under `config`.
///
/// One `StdRng`, seeded from `config.seed` (or entropy), drives both the
/// greedy construction and the annealing loop, so a fixed seed replays the
/// entire run. Annealing is skipped when the schedule has no sessions or no
/// staff; every other failure propagates immediately and no schedule is
/// returned.
pub fn solve(problem: &Problem, config: &AnnealConfig) -> Result<SolveReport, SolveError> {
    solve_with_cancel(problem, config, None)
}

/// [`solve`] with a cancellation token checked once per annealing iteration.
pub fn solve_with_cancel(
    problem: &Problem,
    config: &AnnealConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<SolveReport, SolveError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let plan = RoomPlan::uniform(problem.population, problem.room_count)?;

    let mut builder = GreedyBuilder::new(&plan);
    let schedule = builder.build(problem.sessions, &mut rng)?;
    let pairing = builder.pairing().clone();

    // Nothing to perturb without sessions or staff.
    if problem.sessions == 0 || problem.population == 0 {
        let energy = schedule_energy(&schedule, &plan);
        return Ok(SolveReport {
            plan,
            schedule,
            energy,
            pairing,
            anneal: None,
        });
    }

    let result = AnnealRunner::run_with_cancel(schedule, &plan, config, &mut rng, cancel)?;

    Ok(SolveReport {
        plan,
        schedule: result.schedule.clone(),
        energy: result.energy,
        pairing,
        anneal: Some(result),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config(seed: u64) -> AnnealConfig {
        AnnealConfig::default()
            .with_initial_temperature(1_000.0)
            .with_cooling_rate(0.005)
            .with_seed(seed)
    }

    #[test]
    fn test_full_pipeline() {
        let problem = Problem::new(13, 6, 6);
        let report = solve(&problem, &fast_config(42)).unwrap();

        assert_eq!(report.schedule.session_count(), 6);
        let anneal = report.anneal.as_ref().unwrap();
        assert!(
            anneal.energy <= anneal.initial_energy,
            "annealing made the schedule worse: {} > {}",
            anneal.energy,
            anneal.initial_energy
        );

        for grid in report.schedule.iter() {
            let mut seen = vec![false; 13];
            for room in 0..grid.room_count() {
                assert!(grid.occupancy(room) <= 3, "capacity is ceil(13/6) = 3");
                for &staff in grid.occupants(room) {
                    assert!(!seen[staff]);
                    seen[staff] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_zero_rooms() {
        let problem = Problem::new(10, 0, 3);
        assert_eq!(
            solve(&problem, &fast_config(0)).unwrap_err(),
            SolveError::InvalidRoomCount
        );
    }

    #[test]
    fn test_zero_sessions_skips_annealing() {
        let problem = Problem::new(4, 2, 0);
        let report = solve(&problem, &fast_config(0)).unwrap();
        assert!(report.schedule.is_empty());
        assert!(report.anneal.is_none());
        assert_eq!(report.energy, 0);
    }

    #[test]
    fn test_zero_population_skips_annealing() {
        let problem = Problem::new(0, 3, 2);
        let report = solve(&problem, &fast_config(0)).unwrap();
        assert!(report.anneal.is_none());
        for grid in report.schedule.iter() {
            assert_eq!(grid.total_occupancy(), 0);
        }
    }

    #[test]
    fn test_single_room_fails_in_annealing() {
        let problem = Problem::new(5, 1, 3);
        assert!(matches!(
            solve(&problem, &fast_config(1)),
            Err(SolveError::DegenerateSession { .. })
        ));
    }

    #[test]
    fn test_seeded_runs_replay() {
        let problem = Problem::new(13, 6, 6);
        let a = solve(&problem, &fast_config(77)).unwrap();
        let b = solve(&problem, &fast_config(77)).unwrap();
        assert_eq!(a.schedule, b.schedule);
        assert_eq!(a.energy, b.energy);
    }
}
