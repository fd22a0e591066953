//! Penalty-driven greedy placement.

use super::stats::{LoadStats, PairingMatrix};
use crate::error::SolveError;
use crate::model::{RoomPlan, Schedule, SessionGrid, StaffId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Base weight of every load-related penalty term. Large enough that a single
/// repeat assignment dominates any accumulated pairing weight.
const PENALTY_SCALE: u64 = 10_000_000;

/// Small bound on the capacity-class term. The term is uniform across rooms,
/// so it never changes which room wins; it only shifts absolute scores.
const CAPACITY_CLASS_BOUND: usize = 2;

/// Builds a feasible schedule session by session, placing each staff member
/// into the room with the smallest placement penalty.
///
/// The builder owns the [`PairingMatrix`] and [`LoadStats`] accumulators, so
/// every session is constructed against the statistics of all sessions built
/// before it. One builder serves one optimization run.
pub struct GreedyBuilder<'a> {
    plan: &'a RoomPlan,
    pairing: PairingMatrix,
    loads: LoadStats,
}

impl<'a> GreedyBuilder<'a> {
    /// A fresh builder with zeroed statistics for `plan`.
    pub fn new(plan: &'a RoomPlan) -> Self {
        Self {
            plan,
            pairing: PairingMatrix::new(plan.population()),
            loads: LoadStats::new(plan.population(), plan.len()),
        }
    }

    /// Constructs `sessions` session grids in order.
    ///
    /// Each session visits the staff in a freshly shuffled order and places
    /// every member in the cheapest room with spare capacity, ties going to
    /// the lowest room index. Returns [`SolveError::CapacityExceeded`] if a
    /// member cannot be seated, which can only happen when the population
    /// exceeds the plan's total capacity.
    pub fn build<R: Rng>(&mut self, sessions: usize, rng: &mut R) -> Result<Schedule, SolveError> {
        let population = self.plan.population();
        let mut grids = Vec::with_capacity(sessions);

        for session in 0..sessions {
            let mut grid = SessionGrid::new(self.plan.len());

            let mut order: Vec<StaffId> = (0..population).collect();
            order.shuffle(rng);

            for &staff in &order {
                let room = self
                    .cheapest_room(&grid, staff)
                    .ok_or(SolveError::CapacityExceeded { staff, session })?;

                for &other in grid.occupants(room) {
                    self.pairing.record(staff, other);
                }
                grid.push(room, staff);
                self.loads.record(staff, room);
            }

            grids.push(grid);
        }

        Ok(Schedule::new(grids))
    }

    /// The room with the strictly smallest placement penalty among those with
    /// spare capacity, lowest index winning ties. `None` when every room is
    /// full.
    fn cheapest_room(&self, grid: &SessionGrid, staff: StaffId) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for room in 0..self.plan.len() {
            if grid.occupancy(room) >= self.plan.capacity_of(room) {
                continue;
            }
            let penalty = self.placement_penalty(grid, staff, room);
            if best.is_none_or(|(_, min)| penalty < min) {
                best = Some((room, penalty));
            }
        }
        best.map(|(room, _)| room)
    }

    /// Five-term penalty for seating `staff` in `room` given the current
    /// session state.
    fn placement_penalty(&self, grid: &SessionGrid, staff: StaffId, room: usize) -> u64 {
        // How entangled this person already is, over all partners.
        let pairing: u64 = self.pairing.row_sum(staff);

        // Repeats of this exact room weigh heaviest.
        let reassignment = self.loads.count(staff, room) as u64 * PENALTY_SCALE * 10;

        // Repeats of any room in the same capacity class.
        let capacity = self.plan.capacity_of(room);
        let same_capacity: u64 = (0..self.plan.len())
            .filter(|&other| self.plan.capacity_of(other) == capacity)
            .map(|other| self.loads.count(staff, other) as u64 * PENALTY_SCALE)
            .sum();

        let capacity_class =
            PENALTY_SCALE * 100 * self.plan.population().min(CAPACITY_CLASS_BOUND) as u64;

        // Discourages piling onto a room that is already heavily used, both
        // across sessions (room total) and within the session being built.
        let seated: u64 = grid
            .occupants(room)
            .iter()
            .map(|&s| s as u64 * PENALTY_SCALE)
            .sum();
        let running_load = self.loads.room_total(room) as u64 * PENALTY_SCALE + seated;

        pairing + reassignment + same_capacity + capacity_class + running_load
    }

    /// The accumulated pairing matrix.
    pub fn pairing(&self) -> &PairingMatrix {
        &self.pairing
    }

    /// The accumulated load statistics.
    pub fn loads(&self) -> &LoadStats {
        &self.loads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(population: usize, room_count: usize, sessions: usize, seed: u64) -> (Schedule, RoomPlan, PairingMatrix) {
        let plan = RoomPlan::uniform(population, room_count).unwrap();
        let mut builder = GreedyBuilder::new(&plan);
        let mut rng = StdRng::seed_from_u64(seed);
        let schedule = builder.build(sessions, &mut rng).unwrap();
        let pairing = builder.pairing().clone();
        (schedule, plan, pairing)
    }

    fn assert_valid(schedule: &Schedule, plan: &RoomPlan, population: usize) {
        for grid in schedule.iter() {
            let mut seen = vec![false; population];
            for room in 0..grid.room_count() {
                assert!(
                    grid.occupancy(room) <= plan.capacity_of(room),
                    "room {room} over capacity: {} > {}",
                    grid.occupancy(room),
                    plan.capacity_of(room)
                );
                for &staff in grid.occupants(room) {
                    assert!(!seen[staff], "staff {staff} placed twice in one session");
                    seen[staff] = true;
                }
            }
            assert!(
                seen.iter().all(|&s| s),
                "some staff missing from a session"
            );
        }
    }

    #[test]
    fn test_four_staff_two_rooms_one_session() {
        let (schedule, plan, pairing) = build(4, 2, 1, 42);
        assert_valid(&schedule, &plan, 4);

        let grid = schedule.session(0);
        assert_eq!(grid.occupancy(0), 2);
        assert_eq!(grid.occupancy(1), 2);

        // Same-room pairs weigh 1, cross-room pairs 0.
        for a in 0..4 {
            for b in (a + 1)..4 {
                let same_room = (0..2).any(|room| {
                    grid.room_contains(room, a) && grid.room_contains(room, b)
                });
                let expected = if same_room { 1 } else { 0 };
                assert_eq!(
                    pairing.get(a, b),
                    expected,
                    "pair ({a}, {b}) expected weight {expected}"
                );
            }
        }
    }

    #[test]
    fn test_thirteen_staff_six_rooms_six_sessions() {
        let (schedule, plan, _) = build(13, 6, 6, 7);
        assert_eq!(schedule.session_count(), 6);
        assert_valid(&schedule, &plan, 13);
    }

    #[test]
    fn test_single_room_pairs_everyone_every_session() {
        let sessions = 4;
        let (schedule, plan, pairing) = build(5, 1, sessions, 11);
        assert_valid(&schedule, &plan, 5);

        for grid in schedule.iter() {
            assert_eq!(grid.occupancy(0), 5);
        }
        for a in 0..5 {
            for b in 0..5 {
                if a != b {
                    assert_eq!(pairing.get(a, b), sessions as u32);
                }
            }
        }
    }

    #[test]
    fn test_statistics_span_sessions() {
        let plan = RoomPlan::uniform(6, 3).unwrap();
        let mut builder = GreedyBuilder::new(&plan);
        let mut rng = StdRng::seed_from_u64(3);

        builder.build(4, &mut rng).unwrap();

        // Each of the 3 rooms takes 2 staff per session over 4 sessions.
        let total: u32 = (0..3).map(|room| builder.loads().room_total(room)).sum();
        assert_eq!(total, 24);
        for room in 0..3 {
            assert_eq!(builder.loads().room_total(room), 8);
        }
    }

    #[test]
    fn test_seed_determines_schedule() {
        let (a, _, _) = build(13, 6, 6, 99);
        let (b, _, _) = build(13, 6, 6, 99);
        assert_eq!(a, b);
    }
}
