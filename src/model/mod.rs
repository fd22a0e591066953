//! Problem and solution data model.
//!
//! [`RoomPlan`] describes the static room layout; [`Schedule`] and
//! [`SessionGrid`] hold the mutable per-session assignments that both the
//! greedy constructor and the annealing loop operate on.

mod rooms;
mod schedule;

pub use rooms::{Room, RoomPlan};
pub use schedule::{Schedule, SessionGrid, StaffId};
