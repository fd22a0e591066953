//! Neighborhood moves over a schedule.

use crate::error::SolveError;
use crate::model::{Schedule, SessionGrid};
use rand::Rng;

/// Attempts before a room-pair draw gives up.
const MAX_RETRIES: usize = 64;

/// Perturbs `schedule` in place with 1–3 rotate-swap steps.
///
/// Each step picks a session uniformly at random, then two distinct
/// non-empty rooms in it, and rotates: the last-assigned occupant of each
/// room moves to the front of the other room's list. Occupancy per room is
/// unchanged, so capacity compliance and the per-session staff permutation
/// are preserved.
///
/// Fails with [`SolveError::DegenerateSession`] when the chosen session has
/// fewer than two rooms, and with [`SolveError::PerturbationExhausted`] when
/// no valid room pair is drawn within the retry budget. On failure the
/// schedule may already be partially perturbed; callers discard it.
pub fn perturb<R: Rng>(schedule: &mut Schedule, rng: &mut R) -> Result<(), SolveError> {
    let steps = rng.random_range(1..=3);
    for _ in 0..steps {
        let session = rng.random_range(0..schedule.session_count());
        rotate_step(schedule.session_mut(session), session, rng)?;
    }
    Ok(())
}

/// One rotate-swap between two rooms of `grid`.
fn rotate_step<R: Rng>(
    grid: &mut SessionGrid,
    session: usize,
    rng: &mut R,
) -> Result<(), SolveError> {
    let rooms = grid.room_count();
    if rooms < 2 {
        return Err(SolveError::DegenerateSession { session });
    }

    let mut attempts = 0;
    let (a, b) = loop {
        let a = rng.random_range(0..rooms);
        let b = rng.random_range(0..rooms);
        if a != b && grid.occupancy(a) > 0 && grid.occupancy(b) > 0 {
            break (a, b);
        }
        attempts += 1;
        if attempts > MAX_RETRIES {
            return Err(SolveError::PerturbationExhausted);
        }
    };

    // Both rooms are non-empty, so the pops cannot fail.
    let from_a = grid.pop(a).ok_or(SolveError::PerturbationExhausted)?;
    let from_b = grid.pop(b).ok_or(SolveError::PerturbationExhausted)?;
    grid.push_front(a, from_b);
    grid.push_front(b, from_a);

    Ok(())
}
