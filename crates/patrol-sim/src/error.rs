//! Error types for walk simulation.

use patrol_core::AgentState;
use std::error::Error;
use std::fmt;

/// Errors from driving a walk.
///
/// Looping is not an error for cycle-detection runs; it is one of the two
/// outcomes. It only becomes an error for callers that require the walk to
/// exit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkError {
    /// The start position is not a cell of the grid.
    StartOutOfBounds {
        /// The rejected start state.
        start: AgentState,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// The walk never leaves the grid.
    NoExit {
        /// The state the walk started from.
        start: AgentState,
        /// Transitions performed before giving up.
        transitions: usize,
    },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds {
                start,
                width,
                height,
            } => write!(
                f,
                "start {start} is outside the {width}x{height} grid"
            ),
            Self::NoExit { start, transitions } => write!(
                f,
                "walk from {start} never exits the grid (gave up after {transitions} transitions)"
            ),
        }
    }
}

impl Error for WalkError {}
