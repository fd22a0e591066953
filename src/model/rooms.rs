//! Rooms and the uniform-capacity room plan.

use crate::error::SolveError;

/// A single room with a fixed seat capacity.
///
/// Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    /// Position of this room in the plan.
    pub index: usize,
    /// Display label, e.g. `"Room 3"`.
    pub label: String,
    /// Maximum number of staff this room can hold per session.
    pub capacity: usize,
}

/// The static room layout for one optimization run.
///
/// All rooms share the same capacity, `ceil(population / room_count)`, so
/// total capacity always covers the population.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomPlan {
    rooms: Vec<Room>,
    population: usize,
}

impl RoomPlan {
    /// Builds `room_count` rooms of uniform capacity for `population` staff.
    ///
    /// Returns [`SolveError::InvalidRoomCount`] when `room_count` is zero.
    pub fn uniform(population: usize, room_count: usize) -> Result<Self, SolveError> {
        if room_count == 0 {
            return Err(SolveError::InvalidRoomCount);
        }
        let capacity = population.div_ceil(room_count);
        let rooms = (0..room_count)
            .map(|index| Room {
                index,
                label: format!("Room {index}"),
                capacity,
            })
            .collect();
        Ok(Self { rooms, population })
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the plan has no rooms. Never true for a plan built by
    /// [`RoomPlan::uniform`].
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Population this plan was sized for.
    pub fn population(&self) -> usize {
        self.population
    }

    /// Capacity of the room at `index`.
    pub fn capacity_of(&self, index: usize) -> usize {
        self.rooms[index].capacity
    }

    /// Sum of all room capacities.
    pub fn total_capacity(&self) -> usize {
        self.rooms.iter().map(|r| r.capacity).sum()
    }

    /// Iterates over the rooms in plan order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }
}
