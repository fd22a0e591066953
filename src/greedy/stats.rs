//! Pairing and load statistics accumulated during construction.
//!
//! All three accumulators are created zeroed, incremented monotonically while
//! sessions are built, and never reset. They feed the placement penalty; the
//! annealing phase does not touch them.

use crate::model::StaffId;

/// Counts, for every staff pair, how many times the two have shared a room.
///
/// Stored as a flat `n x n` matrix kept symmetric by [`PairingMatrix::record`].
#[derive(Debug, Clone)]
pub struct PairingMatrix {
    counts: Vec<u32>,
    population: usize,
}

impl PairingMatrix {
    /// Zeroed matrix for `population` staff.
    pub fn new(population: usize) -> Self {
        Self {
            counts: vec![0; population * population],
            population,
        }
    }

    /// Times `a` and `b` have shared a room.
    pub fn get(&self, a: StaffId, b: StaffId) -> u32 {
        self.counts[a * self.population + b]
    }

    /// Records one more shared-room occurrence for `a` and `b`, updating both
    /// halves of the matrix.
    pub fn record(&mut self, a: StaffId, b: StaffId) {
        self.counts[a * self.population + b] += 1;
        self.counts[b * self.population + a] += 1;
    }

    /// Total pairing weight of `staff` against everyone else: the penalty's
    /// proxy for how entangled this person already is.
    pub fn row_sum(&self, staff: StaffId) -> u64 {
        let row = &self.counts[staff * self.population..(staff + 1) * self.population];
        row.iter().map(|&w| w as u64).sum()
    }
}

/// Per-(staff, room) assignment counts plus per-room running totals.
#[derive(Debug, Clone)]
pub struct LoadStats {
    // n x r, row per staff member
    per_room: Vec<u32>,
    room_totals: Vec<u32>,
    room_count: usize,
}

impl LoadStats {
    /// Zeroed counters for `population` staff and `room_count` rooms.
    pub fn new(population: usize, room_count: usize) -> Self {
        Self {
            per_room: vec![0; population * room_count],
            room_totals: vec![0; room_count],
            room_count,
        }
    }

    /// Sessions that assigned `staff` to `room`.
    pub fn count(&self, staff: StaffId, room: usize) -> u32 {
        self.per_room[staff * self.room_count + room]
    }

    /// Cumulative assignments into `room` across all sessions so far.
    pub fn room_total(&self, room: usize) -> u32 {
        self.room_totals[room]
    }

    /// Records one assignment of `staff` into `room`.
    pub fn record(&mut self, staff: StaffId, room: usize) {
        self.per_room[staff * self.room_count + room] += 1;
        self.room_totals[room] += 1;
    }
}
