//! Staff-to-room rotation scheduling.
//!
//! Assigns a fixed population of staff to capacity-limited rooms across
//! repeated sessions, spreading each person over different rooms and keeping
//! any two people from being grouped together more often than necessary.
//!
//! # Components
//!
//! - **Model** ([`model`]): rooms with uniform capacity `ceil(n / r)`, and
//!   the per-session assignment grids that make up a [`Schedule`].
//! - **Greedy construction** ([`greedy`]): builds one feasible grid per
//!   session, seating each staff member in the room that minimizes a
//!   multi-term penalty over accumulated pairing and load statistics.
//! - **Annealing** ([`anneal`]): refines the constructed schedule with a
//!   rotate-swap neighborhood under a geometric cooling schedule, returning
//!   the best schedule seen.
//! - **Solver** ([`solver`]): the pipeline tying the three together behind
//!   one seeded RNG stream, so runs replay deterministically.
//!
//! # Examples
//!
//! ```
//! use rotaplan::anneal::AnnealConfig;
//! use rotaplan::solver::{solve, Problem};
//!
//! let problem = Problem::new(13, 6, 6);
//! let config = AnnealConfig::default()
//!     .with_initial_temperature(1_000.0)
//!     .with_cooling_rate(0.005)
//!     .with_seed(42);
//!
//! let report = solve(&problem, &config)?;
//! for (session, grid) in report.schedule.iter().enumerate() {
//!     for room in 0..grid.room_count() {
//!         println!("session {session}, room {room}: {:?}", grid.occupants(room));
//!     }
//! }
//! # Ok::<(), rotaplan::SolveError>(())
//! ```

pub mod anneal;
pub mod error;
pub mod greedy;
pub mod model;
pub mod solver;

pub use error::SolveError;
pub use model::{Room, RoomPlan, Schedule, SessionGrid, StaffId};
pub use solver::{solve, solve_with_cancel, Problem, SolveReport};
