//! Obstruction candidate enumeration.

use crate::config::SearchError;
use patrol_core::{AgentState, Grid, Position};
use patrol_sim::run_to_exit;

/// Cells visited by the unobstructed walk, in first-visit order, minus the
/// start cell (which cannot host a new obstacle).
///
/// Fails with [`SearchError::Walk`] if the baseline walk never exits.
pub fn candidates(grid: &Grid, start: AgentState) -> Result<Vec<Position>, SearchError> {
    let visited = run_to_exit(grid, start)?;
    Ok(visited
        .into_iter()
        .filter(|&p| p != start.position)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol_test_utils::{canonical, clockwise_loop, CANONICAL_VISITED};

    #[test]
    fn canonical_candidates_exclude_start() {
        let s = canonical();
        let c = candidates(&s.grid, s.start).unwrap();
        assert_eq!(c.len(), CANONICAL_VISITED - 1);
        assert!(!c.contains(&s.start.position));
    }

    #[test]
    fn looping_baseline_is_an_error() {
        let s = clockwise_loop();
        assert!(matches!(
            candidates(&s.grid, s.start),
            Err(SearchError::Walk(_))
        ));
    }
}
