//! Lazy, cycle-checked sequence of agent states.

use crate::error::WalkError;
use crate::states::StateSet;
use crate::walker::{Transition, Walker};
use patrol_core::{AgentState, Outcome, TileMap};

/// Iterator over the states an agent passes through.
///
/// Yields the initial state, then the state after every transition (turns
/// included). Ends when the agent is about to leave the grid or when the
/// next state has been seen before. After the iterator is exhausted,
/// [`outcome`](Self::outcome) reports how the walk ended.
///
/// # Examples
///
/// ```
/// use patrol_core::{Outcome, Scenario};
/// use patrol_sim::Trajectory;
///
/// let s = Scenario::parse(".\n^\n").unwrap();
/// let mut t = Trajectory::new(&s.grid, s.start).unwrap();
/// assert_eq!(t.by_ref().count(), 2);
/// assert_eq!(t.outcome(), Some(Outcome::Exited));
/// ```
#[derive(Debug)]
pub struct Trajectory<'m, M: TileMap + ?Sized> {
    walker: Walker<'m, M>,
    seen: StateSet,
    pending: Option<AgentState>,
    outcome: Option<Outcome>,
    repeated: Option<AgentState>,
    transitions: usize,
}

impl<'m, M: TileMap + ?Sized> Trajectory<'m, M> {
    /// Start a trajectory on `map` from `start`.
    pub fn new(map: &'m M, start: AgentState) -> Result<Self, WalkError> {
        Ok(Self {
            walker: Walker::new(map, start)?,
            seen: StateSet::for_map(map),
            pending: Some(start),
            outcome: None,
            repeated: None,
            transitions: 0,
        })
    }

    /// How the walk ended, or `None` while states remain.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// For looped walks, the state that was reached a second time.
    pub fn repeated(&self) -> Option<AgentState> {
        self.repeated
    }

    /// Transitions applied so far, excluding the final exit.
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    /// Distinct states seen so far.
    pub fn states_seen(&self) -> usize {
        self.seen.len()
    }

    /// Drive the trajectory to its end and return the outcome.
    pub fn finish(&mut self) -> Outcome {
        while self.next().is_some() {}
        // An exhausted trajectory always has an outcome.
        self.outcome.unwrap_or(Outcome::Exited)
    }

    fn looped_at(&mut self, state: AgentState) {
        self.outcome = Some(Outcome::Looped);
        self.repeated = Some(state);
    }
}

impl<M: TileMap + ?Sized> Iterator for Trajectory<'_, M> {
    type Item = AgentState;

    fn next(&mut self) -> Option<AgentState> {
        let state = self.pending.take()?;
        if !self.seen.insert(state) {
            self.looped_at(state);
            return None;
        }
        match self.walker.step() {
            Transition::Moved(_) | Transition::Turned(_) => {
                self.transitions += 1;
                self.pending = Some(self.walker.state());
            }
            Transition::Exited => self.outcome = Some(Outcome::Exited),
            Transition::Stalled => {
                self.transitions += 1;
                self.looped_at(self.walker.state());
            }
        }
        Some(state)
    }
}
