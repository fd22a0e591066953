//! Session grids and the full multi-session schedule.

use crate::model::RoomPlan;

/// Staff members are identified purely by index in `[0, population)`.
pub type StaffId = usize;

/// Room assignments for one session: one ordered occupant list per room.
///
/// The list order reflects assignment order within the session. Occupancy is
/// the list length; there is no sentinel value. Capacity is enforced by the
/// greedy constructor, not by this type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionGrid {
    rooms: Vec<Vec<StaffId>>,
}

impl SessionGrid {
    /// Creates an empty grid with `room_count` rooms.
    pub fn new(room_count: usize) -> Self {
        Self {
            rooms: vec![Vec::new(); room_count],
        }
    }

    /// Number of rooms in this grid.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Occupants of the room at `room`, in assignment order.
    pub fn occupants(&self, room: usize) -> &[StaffId] {
        &self.rooms[room]
    }

    /// Number of staff currently in `room`.
    pub fn occupancy(&self, room: usize) -> usize {
        self.rooms[room].len()
    }

    /// Total staff placed in this session.
    pub fn total_occupancy(&self) -> usize {
        self.rooms.iter().map(Vec::len).sum()
    }

    /// Appends `staff` to the occupant list of `room`.
    pub fn push(&mut self, room: usize, staff: StaffId) {
        self.rooms[room].push(staff);
    }

    /// Whether `staff` is somewhere in `room`.
    pub fn room_contains(&self, room: usize, staff: StaffId) -> bool {
        self.rooms[room].contains(&staff)
    }

    /// Removes and returns the most recently appended occupant of `room`,
    /// or `None` when the room is empty.
    pub fn pop(&mut self, room: usize) -> Option<StaffId> {
        self.rooms[room].pop()
    }

    /// Inserts `staff` at the front of the occupant list of `room`, shifting
    /// the existing occupants back by one.
    pub fn push_front(&mut self, room: usize, staff: StaffId) {
        self.rooms[room].insert(0, staff);
    }

    /// Free seats in `room` under `plan`. Saturates at zero so an
    /// over-occupied grid (which the constructor never produces) does not
    /// wrap.
    pub fn free_slots(&self, plan: &RoomPlan, room: usize) -> usize {
        plan.capacity_of(room).saturating_sub(self.occupancy(room))
    }
}

/// The complete schedule: one [`SessionGrid`] per session.
///
/// The session count is fixed at construction. Cloning a `Schedule` deep
/// copies every grid, which is how the annealing loop derives candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    sessions: Vec<SessionGrid>,
}

impl Schedule {
    /// Wraps an already-built sequence of session grids.
    pub fn new(sessions: Vec<SessionGrid>) -> Self {
        Self { sessions }
    }

    /// Number of sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the schedule has no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// The grid for session `index`.
    pub fn session(&self, index: usize) -> &SessionGrid {
        &self.sessions[index]
    }

    /// Mutable access to the grid for session `index`.
    pub fn session_mut(&mut self, index: usize) -> &mut SessionGrid {
        &mut self.sessions[index]
    }

    /// Iterates over the session grids in order.
    pub fn iter(&self) -> impl Iterator<Item = &SessionGrid> {
        self.sessions.iter()
    }
}
