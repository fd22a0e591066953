//! Schedule energy: the scalar cost the annealing loop minimizes.

use crate::model::{RoomPlan, Schedule};

/// Computes the energy of `schedule` under `plan`. Lower is better; the
/// result is always non-negative, and evaluating an unchanged schedule twice
/// yields the same value.
///
/// Two components:
///
/// - **Concentration**: for each staff member, count their appearances per
///   room index across all sessions, square each count, and sum. A person who
///   keeps landing in the same room scores quadratically worse than one whose
///   placements are spread out.
/// - **Slack imbalance**: per session, `max_free * (max_free - min_free)`
///   over the rooms' free-seat counts. Sessions that pack some rooms tight
///   while leaving others mostly empty score worse.
pub fn schedule_energy(schedule: &Schedule, plan: &RoomPlan) -> u64 {
    if schedule.is_empty() {
        return 0;
    }

    concentration_cost(schedule) + slack_cost(schedule, plan)
}

/// Sum over staff of the squared per-room appearance counts.
///
/// The staff population is taken from the first session's total occupancy;
/// every session of a constructed schedule seats the same staff `0..n`.
fn concentration_cost(schedule: &Schedule) -> u64 {
    let population = schedule.session(0).total_occupancy();
    let room_count = schedule.session(0).room_count();

    let mut cost = 0u64;
    let mut counts = vec![0u64; room_count];

    for staff in 0..population {
        counts.fill(0);
        for grid in schedule.iter() {
            for (room, count) in counts.iter_mut().enumerate() {
                if grid.room_contains(room, staff) {
                    *count += 1;
                    break;
                }
            }
        }
        cost += counts.iter().map(|&c| c * c).sum::<u64>();
    }

    cost
}

/// Sum over sessions of `max_free * (max_free - min_free)`.
fn slack_cost(schedule: &Schedule, plan: &RoomPlan) -> u64 {
    let mut cost = 0u64;
    for grid in schedule.iter() {
        let free = (0..grid.room_count()).map(|room| grid.free_slots(plan, room));
        let (mut min, mut max) = (usize::MAX, 0usize);
        for f in free {
            min = min.min(f);
            max = max.max(f);
        }
        if min != usize::MAX {
            cost += (max * (max - min)) as u64;
        }
    }
    cost
}
