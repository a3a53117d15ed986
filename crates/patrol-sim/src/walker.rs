//! The step rule.

use crate::error::WalkError;
use patrol_core::{AgentState, Facing, Position, TileMap};

/// Result of a single application of the step rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The agent moved forward into this cell.
    Moved(Position),
    /// A wall blocked the way; the agent turned in place to this facing.
    Turned(Facing),
    /// The cell ahead is outside the grid. Terminal.
    Exited,
    /// Four consecutive turns without moving: the agent is walled in.
    /// Terminal, and classified as a loop by every driver.
    Stalled,
}

impl Transition {
    /// Whether no further transition can change the agent's state.
    pub fn is_terminal(self) -> bool {
        matches!(self, Transition::Exited | Transition::Stalled)
    }
}

/// A single agent walking a [`TileMap`].
///
/// Owns its [`AgentState`] and borrows the map read-only.
#[derive(Debug)]
pub struct Walker<'m, M: TileMap + ?Sized> {
    map: &'m M,
    state: AgentState,
    consecutive_turns: u8,
}

impl<'m, M: TileMap + ?Sized> Walker<'m, M> {
    /// Place an agent on `map`.
    ///
    /// Returns [`WalkError::StartOutOfBounds`] if the start cell is not on
    /// the map.
    pub fn new(map: &'m M, start: AgentState) -> Result<Self, WalkError> {
        if !map.contains(start.position) {
            return Err(WalkError::StartOutOfBounds {
                start,
                width: map.width(),
                height: map.height(),
            });
        }
        Ok(Self {
            map,
            state: start,
            consecutive_turns: 0,
        })
    }

    /// The agent's current state.
    pub fn state(&self) -> AgentState {
        self.state
    }

    /// Apply the step rule once.
    ///
    /// Leaving the grid leaves the state untouched, so calling `step` after
    /// [`Transition::Exited`] keeps returning `Exited`.
    pub fn step(&mut self) -> Transition {
        let ahead = self.state.ahead();
        match self.map.tile(ahead) {
            None => Transition::Exited,
            Some(tile) if tile.is_passable() => {
                self.state.position = ahead;
                self.consecutive_turns = 0;
                Transition::Moved(ahead)
            }
            Some(_) => {
                self.state.facing = self.state.facing.rotate();
                self.consecutive_turns = self.consecutive_turns.saturating_add(1);
                if self.consecutive_turns >= 4 {
                    Transition::Stalled
                } else {
                    Transition::Turned(self.state.facing)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol_core::Grid;
    use patrol_test_utils::{boxed_in, corridor};

    #[test]
    fn open_cell_moves_forward() {
        let s = corridor(3, 3, (1, 2), Facing::Up, &[]);
        let mut w = Walker::new(&s.grid, s.start).unwrap();
        assert_eq!(w.step(), Transition::Moved(Position::new(1, 1)));
        assert_eq!(w.state().facing, Facing::Up);
    }

    #[test]
    fn wall_ahead_turns_without_moving() {
        let s = corridor(3, 3, (1, 1), Facing::Up, &[(1, 0)]);
        let mut w = Walker::new(&s.grid, s.start).unwrap();
        assert_eq!(w.step(), Transition::Turned(Facing::Right));
        assert_eq!(w.state().position, Position::new(1, 1));
        assert_eq!(w.step(), Transition::Moved(Position::new(2, 1)));
    }

    #[test]
    fn single_cell_facing_out_exits_immediately() {
        let grid = Grid::open(1, 1).unwrap();
        for facing in Facing::ALL {
            let start = AgentState::new(Position::new(0, 0), facing);
            let mut w = Walker::new(&grid, start).unwrap();
            assert_eq!(w.step(), Transition::Exited);
            assert_eq!(w.step(), Transition::Exited);
            assert_eq!(w.state(), start);
        }
    }

    #[test]
    fn boxed_in_agent_stalls_after_four_turns() {
        let s = boxed_in();
        let mut w = Walker::new(&s.grid, s.start).unwrap();
        assert_eq!(w.step(), Transition::Turned(Facing::Right));
        assert_eq!(w.step(), Transition::Turned(Facing::Down));
        assert_eq!(w.step(), Transition::Turned(Facing::Left));
        assert_eq!(w.step(), Transition::Stalled);
        assert_eq!(w.state(), s.start);
        assert!(w.step().is_terminal());
    }

    #[test]
    fn three_sided_pocket_escapes_on_fourth_facing() {
        // Walls up, right and down; open to the left.
        let s = corridor(3, 3, (1, 1), Facing::Up, &[(1, 0), (2, 1), (1, 2)]);
        let mut w = Walker::new(&s.grid, s.start).unwrap();
        assert_eq!(w.step(), Transition::Turned(Facing::Right));
        assert_eq!(w.step(), Transition::Turned(Facing::Down));
        assert_eq!(w.step(), Transition::Turned(Facing::Left));
        assert_eq!(w.step(), Transition::Moved(Position::new(0, 1)));
    }

    #[test]
    fn start_outside_grid_is_rejected() {
        let grid = Grid::open(2, 2).unwrap();
        let start = AgentState::new(Position::new(2, 0), Facing::Up);
        assert!(matches!(
            Walker::new(&grid, start),
            Err(WalkError::StartOutOfBounds { width: 2, height: 2, .. })
        ));
    }
}
