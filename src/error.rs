//! Error types for the solver pipeline.
//!
//! All failures propagate immediately to the caller; no partial schedule is
//! ever returned. This is a batch optimizer, not a service, so the policy is
//! fail fast and report.

use std::error::Error;
use std::fmt;

/// Failure kinds reported by room planning, greedy construction, and
/// annealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// Zero rooms were requested; capacity per room is undefined.
    InvalidRoomCount,

    /// The greedy constructor found every room full while a staff member
    /// still had to be placed. Total capacity must be at least the
    /// population size.
    CapacityExceeded {
        /// The staff member that could not be placed.
        staff: usize,
        /// The session being built when placement failed.
        session: usize,
    },

    /// A session has fewer than two rooms, so a two-room perturbation is
    /// undefined.
    DegenerateSession {
        /// The offending session index.
        session: usize,
    },

    /// Neighbor generation could not draw two distinct, non-empty rooms
    /// within its retry budget.
    PerturbationExhausted,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidRoomCount => {
                write!(f, "room count must be at least 1")
            }
            SolveError::CapacityExceeded { staff, session } => {
                write!(
                    f,
                    "no room with spare capacity for staff {staff} in session {session}"
                )
            }
            SolveError::DegenerateSession { session } => {
                write!(f, "session {session} has fewer than two rooms")
            }
            SolveError::PerturbationExhausted => {
                write!(f, "could not draw two distinct non-empty rooms within the retry budget")
            }
        }
    }
}

impl Error for SolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = SolveError::CapacityExceeded {
            staff: 7,
            session: 2,
        };
        assert!(e.to_string().contains("staff 7"));
        assert!(e.to_string().contains("session 2"));

        let e = SolveError::DegenerateSession { session: 0 };
        assert!(e.to_string().contains("session 0"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn Error) {}
        takes_error(&SolveError::InvalidRoomCount);
        takes_error(&SolveError::PerturbationExhausted);
    }
}
