//! Drivers: run-to-exit and run-with-cycle-detection.

use crate::error::WalkError;
use crate::trajectory::Trajectory;
use crate::walker::{Transition, Walker};
use indexmap::IndexSet;
use patrol_core::{AgentState, Outcome, Position, TileMap};
use tracing::debug;

/// Walk until the agent leaves the grid, collecting every distinct cell
/// it stands on (start included) in first-visit order.
///
/// No seen-state set is kept. A walk that has not exited after
/// `cells * 4` transitions must have repeated a state, so it is abandoned
/// with [`WalkError::NoExit`]. A stalled agent fails the same way.
pub fn run_to_exit<M: TileMap + ?Sized>(
    map: &M,
    start: AgentState,
) -> Result<IndexSet<Position>, WalkError> {
    let mut walker = Walker::new(map, start)?;
    let budget = map.cell_count().saturating_mul(4);
    let mut visited = IndexSet::new();
    visited.insert(start.position);

    for transitions in 0..budget {
        match walker.step() {
            Transition::Moved(position) => {
                visited.insert(position);
            }
            Transition::Turned(_) => {}
            Transition::Exited => {
                debug!(
                    visited = visited.len(),
                    transitions, "walk left the grid"
                );
                return Ok(visited);
            }
            Transition::Stalled => {
                return Err(WalkError::NoExit {
                    start,
                    transitions: transitions + 1,
                });
            }
        }
    }

    Err(WalkError::NoExit {
        start,
        transitions: budget,
    })
}

/// Walk while recording every state; classify the run as
/// [`Outcome::Exited`] or [`Outcome::Looped`].
pub fn run_with_cycle_detection<M: TileMap + ?Sized>(
    map: &M,
    start: AgentState,
) -> Result<Outcome, WalkError> {
    Ok(Trajectory::new(map, start)?.finish())
}

/// Number of distinct cells the agent visits before leaving the grid.
///
/// # Examples
///
/// ```
/// use patrol_core::Scenario;
/// use patrol_sim::count_distinct_visited_positions;
///
/// let s = Scenario::parse("..#\n...\n.^.\n").unwrap();
/// // Straight up and out through column 1.
/// assert_eq!(count_distinct_visited_positions(&s.grid, s.start).unwrap(), 3);
/// ```
pub fn count_distinct_visited_positions<M: TileMap + ?Sized>(
    map: &M,
    start: AgentState,
) -> Result<usize, WalkError> {
    run_to_exit(map, start).map(|visited| visited.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol_core::{Facing, Grid, PatchedGrid};
    use patrol_test_utils::{
        boxed_in, canonical, clockwise_loop, corridor, CANONICAL_VISITED,
    };

    #[test]
    fn canonical_walk_visits_41_cells() {
        let s = canonical();
        assert_eq!(
            count_distinct_visited_positions(&s.grid, s.start),
            Ok(CANONICAL_VISITED)
        );
        assert_eq!(
            run_with_cycle_detection(&s.grid, s.start),
            Ok(Outcome::Exited)
        );
    }

    #[test]
    fn visited_set_starts_with_start_cell() {
        let s = canonical();
        let visited = run_to_exit(&s.grid, s.start).unwrap();
        assert_eq!(visited.first(), Some(&s.start.position));
    }

    #[test]
    fn turning_in_place_does_not_duplicate_cells() {
        let s = corridor(3, 3, (1, 1), Facing::Up, &[(1, 0)]);
        let visited = run_to_exit(&s.grid, s.start).unwrap();
        let cells: Vec<Position> = visited.into_iter().collect();
        assert_eq!(cells, vec![Position::new(1, 1), Position::new(2, 1)]);
    }

    #[test]
    fn loop_is_no_exit_for_run_to_exit() {
        let s = clockwise_loop();
        assert!(matches!(
            run_to_exit(&s.grid, s.start),
            Err(WalkError::NoExit { transitions: 64, .. })
        ));
        assert_eq!(
            run_with_cycle_detection(&s.grid, s.start),
            Ok(Outcome::Looped)
        );
    }

    #[test]
    fn stall_is_no_exit_and_loop() {
        let s = boxed_in();
        assert!(matches!(
            run_to_exit(&s.grid, s.start),
            Err(WalkError::NoExit { transitions: 4, .. })
        ));
        assert_eq!(
            run_with_cycle_detection(&s.grid, s.start),
            Ok(Outcome::Looped)
        );
    }

    #[test]
    fn single_cell_facing_out_exits() {
        let grid = Grid::open(1, 1).unwrap();
        let start = AgentState::new(Position::new(0, 0), Facing::Up);
        assert_eq!(count_distinct_visited_positions(&grid, start), Ok(1));
        assert_eq!(run_with_cycle_detection(&grid, start), Ok(Outcome::Exited));
    }

    #[test]
    fn runs_against_patched_overlay() {
        let s = canonical();
        // (3, 6) is one of the known loop-inducing cells.
        let patched = PatchedGrid::with_wall(&s.grid, Position::new(3, 6)).unwrap();
        assert_eq!(
            run_with_cycle_detection(&patched, s.start),
            Ok(Outcome::Looped)
        );
        assert!(run_to_exit(&patched, s.start).is_err());
    }
}
