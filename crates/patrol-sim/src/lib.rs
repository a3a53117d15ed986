//! Walk simulator for the patrol grid agent.
//!
//! A [`Walker`] applies the step rule one transition at a time. On top of
//! it sit the two driving modes:
//!
//! - [`run_to_exit`]: walk until the agent leaves the grid and collect the
//!   distinct cells it visited. Bounded by the size of the state space
//!   rather than a seen-state set.
//! - [`run_with_cycle_detection`] / [`Trajectory`]: walk while recording
//!   every [`AgentState`](patrol_core::AgentState); the first repeated
//!   state classifies the run as [`Outcome::Looped`](patrol_core::Outcome).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod run;
pub mod states;
pub mod trajectory;
pub mod walker;

pub use error::WalkError;
pub use run::{count_distinct_visited_positions, run_to_exit, run_with_cycle_detection};
pub use states::StateSet;
pub use trajectory::Trajectory;
pub use walker::{Transition, Walker};
