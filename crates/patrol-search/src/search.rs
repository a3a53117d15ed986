//! Parallel evaluation of obstruction candidates.
//!
//! The caller's thread queues every candidate on a crossbeam channel,
//! spawns scoped workers that drain it, and then acts as the single
//! collector for their verdicts. The base grid is shared by reference;
//! each worker builds its own obstructed view per candidate, so nothing
//! shared is ever written.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use patrol_core::{AgentState, Grid, Outcome, PatchedGrid, Position};
use patrol_sim::run_with_cycle_detection;
use tracing::{debug, info, trace};

use crate::candidates::candidates;
use crate::config::{GridStrategy, SearchConfig, SearchError};

/// One worker's classification of one candidate.
#[derive(Clone, Copy, Debug)]
struct Verdict {
    position: Position,
    outcome: Outcome,
}

/// Result of an obstruction search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Number of candidates evaluated.
    pub candidates: usize,
    /// Candidates that trap the agent, sorted by `(x, y)`.
    pub looping: Vec<Position>,
    /// Worker threads used.
    pub workers: usize,
}

impl SearchReport {
    /// Number of loop-inducing candidates.
    pub fn count(&self) -> usize {
        self.looping.len()
    }
}

/// Brute-force search for single walls that trap the agent.
#[derive(Clone, Debug, Default)]
pub struct ObstructionSearch {
    config: SearchConfig,
}

impl ObstructionSearch {
    /// Create a search with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Evaluate every candidate of `(grid, start)`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Walk`] if the unobstructed walk never exits,
    /// [`SearchError::ThreadSpawnFailed`] if a worker cannot be started, and
    /// [`SearchError::WorkerPanicked`] if a worker dies mid-search.
    pub fn run(&self, grid: &Grid, start: AgentState) -> Result<SearchReport, SearchError> {
        let candidates = candidates(grid, start)?;
        let total = candidates.len();
        if total == 0 {
            debug!("no obstruction candidates");
            return Ok(SearchReport {
                candidates: 0,
                looping: Vec::new(),
                workers: 0,
            });
        }

        let workers = self.config.resolved_worker_count().min(total);
        let strategy = self.config.strategy;
        info!(
            candidates = total,
            workers,
            %strategy,
            "inserting obstructions"
        );

        // The queue holds every candidate and `task_rx` outlives the loop,
        // so no send can block or fail.
        let (task_tx, task_rx) = crossbeam_channel::bounded::<Position>(total);
        for position in candidates {
            let _ = task_tx.send(position);
        }
        // Workers exit once the queue is drained.
        drop(task_tx);

        let (verdict_tx, verdict_rx) = crossbeam_channel::unbounded::<Verdict>();

        let mut looping = thread::scope(|scope| -> Result<Vec<Position>, SearchError> {
            let mut handles = Vec::with_capacity(workers);
            for i in 0..workers {
                let task_rx = task_rx.clone();
                let verdict_tx = verdict_tx.clone();
                let handle = thread::Builder::new()
                    .name(format!("patrol-search-{i}"))
                    .spawn_scoped(scope, move || {
                        worker_loop(grid, start, strategy, task_rx, verdict_tx)
                    })
                    .map_err(|e| SearchError::ThreadSpawnFailed {
                        reason: e.to_string(),
                    })?;
                handles.push(handle);
            }
            drop(verdict_tx);

            let mut looping = Vec::new();
            for verdict in verdict_rx.iter() {
                if verdict.outcome.is_loop() {
                    trace!(position = %verdict.position, "obstruction traps the agent");
                    looping.push(verdict.position);
                }
            }

            for handle in handles {
                handle.join().map_err(|_| SearchError::WorkerPanicked)??;
            }
            Ok(looping)
        })?;

        looping.sort_unstable();
        info!(
            candidates = total,
            looping = looping.len(),
            "completed obstruction search"
        );
        Ok(SearchReport {
            candidates: total,
            looping,
            workers,
        })
    }
}

/// Drain the candidate queue, sending one verdict per candidate.
fn worker_loop(
    grid: &Grid,
    start: AgentState,
    strategy: GridStrategy,
    tasks: Receiver<Position>,
    verdicts: Sender<Verdict>,
) -> Result<(), SearchError> {
    let mut evaluated = 0usize;
    for position in tasks.iter() {
        let outcome = evaluate(grid, start, position, strategy)?;
        evaluated += 1;
        if verdicts.send(Verdict { position, outcome }).is_err() {
            // Collector is gone; nothing left to report to.
            break;
        }
    }
    debug!(evaluated, "search worker finished");
    Ok(())
}

/// Classify the walk from `start` with a wall added at `position`.
fn evaluate(
    grid: &Grid,
    start: AgentState,
    position: Position,
    strategy: GridStrategy,
) -> Result<Outcome, SearchError> {
    let patched = PatchedGrid::with_wall(grid, position)?;
    let outcome = match strategy {
        GridStrategy::Overlay => run_with_cycle_detection(&patched, start)?,
        GridStrategy::Clone => run_with_cycle_detection(&patched.to_grid()?, start)?,
    };
    Ok(outcome)
}

/// Number of single-wall placements on the baseline walk that trap the
/// agent, using the default [`SearchConfig`].
///
/// # Examples
///
/// ```
/// use patrol_core::Scenario;
/// use patrol_search::count_loop_inducing_obstructions;
///
/// let s = Scenario::parse("...\n.^.\n...\n").unwrap();
/// assert_eq!(count_loop_inducing_obstructions(&s.grid, s.start).unwrap(), 0);
/// ```
pub fn count_loop_inducing_obstructions(
    grid: &Grid,
    start: AgentState,
) -> Result<usize, SearchError> {
    ObstructionSearch::default()
        .run(grid, start)
        .map(|report| report.count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol_core::Facing;
    use patrol_test_utils::{
        canonical, clockwise_loop, corridor, CANONICAL_LOOPING_CANDIDATES, CANONICAL_VISITED,
    };

    fn search(workers: usize, strategy: GridStrategy) -> ObstructionSearch {
        ObstructionSearch::new(SearchConfig {
            worker_count: Some(workers),
            strategy,
        })
    }

    #[test]
    fn canonical_example_has_six_traps() {
        let s = canonical();
        assert_eq!(count_loop_inducing_obstructions(&s.grid, s.start), Ok(6));
    }

    #[test]
    fn canonical_report_lists_known_cells() {
        let s = canonical();
        let report = search(4, GridStrategy::Overlay).run(&s.grid, s.start).unwrap();
        let expected: Vec<Position> = CANONICAL_LOOPING_CANDIDATES
            .iter()
            .map(|&p| p.into())
            .collect();
        assert_eq!(report.looping, expected);
        assert_eq!(report.candidates, CANONICAL_VISITED - 1);
        assert_eq!(report.workers, 4);
    }

    #[test]
    fn strategies_agree() {
        let s = canonical();
        let overlay = search(3, GridStrategy::Overlay).run(&s.grid, s.start).unwrap();
        let clone = search(3, GridStrategy::Clone).run(&s.grid, s.start).unwrap();
        assert_eq!(overlay, clone);
    }

    #[test]
    fn worker_count_does_not_change_result() {
        let s = canonical();
        let single = search(1, GridStrategy::Overlay).run(&s.grid, s.start).unwrap();
        for workers in [2, 7, 64] {
            let many = search(workers, GridStrategy::Overlay)
                .run(&s.grid, s.start)
                .unwrap();
            assert_eq!(many.looping, single.looping);
        }
    }

    #[test]
    fn workers_are_capped_by_candidate_count() {
        let s = corridor(1, 3, (0, 2), Facing::Up, &[]);
        let report = search(16, GridStrategy::Overlay).run(&s.grid, s.start).unwrap();
        assert_eq!(report.candidates, 2);
        assert_eq!(report.workers, 2);
        assert_eq!(report.count(), 0);
    }

    #[test]
    fn no_candidates_spawns_no_workers() {
        let s = corridor(1, 1, (0, 0), Facing::Up, &[]);
        let report = ObstructionSearch::default().run(&s.grid, s.start).unwrap();
        assert_eq!(report.candidates, 0);
        assert_eq!(report.workers, 0);
    }

    #[test]
    fn boxing_in_the_agent_counts_as_a_trap() {
        let s = patrol_core::Scenario::parse("###\n#^.\n###\n").unwrap();
        for strategy in [GridStrategy::Overlay, GridStrategy::Clone] {
            let report = search(1, strategy).run(&s.grid, s.start).unwrap();
            assert_eq!(report.candidates, 1);
            assert_eq!(report.looping, vec![Position::new(2, 1)]);
        }
    }

    #[test]
    fn looping_baseline_fails() {
        let s = clockwise_loop();
        assert!(matches!(
            ObstructionSearch::default().run(&s.grid, s.start),
            Err(SearchError::Walk(_))
        ));
    }

    #[test]
    fn evaluate_rejects_out_of_bounds_candidate() {
        let s = canonical();
        for strategy in [GridStrategy::Overlay, GridStrategy::Clone] {
            assert!(matches!(
                evaluate(&s.grid, s.start, Position::new(10, 0), strategy),
                Err(SearchError::Grid(_))
            ));
        }
    }
}
