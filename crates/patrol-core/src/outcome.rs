//! Terminal classification of a simulation run.

use std::fmt;

/// How a simulation run ended. Exactly one per run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The agent stepped off the grid.
    Exited,
    /// The agent revisited a state, or was boxed in on all four sides.
    Looped,
}

impl Outcome {
    /// `true` for [`Outcome::Looped`].
    pub fn is_loop(self) -> bool {
        self == Outcome::Looped
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited => f.write_str("exited"),
            Self::Looped => f.write_str("looped"),
        }
    }
}
