//! Search configuration and error types.

use patrol_core::GridError;
use patrol_sim::WalkError;
use std::error::Error;
use std::fmt;

// ── GridStrategy ───────────────────────────────────────────────────

/// How each worker obtains its obstructed grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridStrategy {
    /// Borrow the shared grid through a single-cell
    /// [`PatchedGrid`](patrol_core::PatchedGrid) overlay. No copying.
    #[default]
    Overlay,
    /// Clone the whole grid per candidate and write the wall into the copy.
    Clone,
}

impl fmt::Display for GridStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overlay => f.write_str("overlay"),
            Self::Clone => f.write_str("clone"),
        }
    }
}

// ── SearchConfig ───────────────────────────────────────────────────

/// Configuration for [`ObstructionSearch`](crate::ObstructionSearch).
#[derive(Clone, Debug, Default)]
pub struct SearchConfig {
    /// Number of worker threads. `None` = auto-detect from
    /// `available_parallelism` (fallback 4).
    pub worker_count: Option<usize>,
    /// Per-candidate grid strategy. Default: [`GridStrategy::Overlay`].
    pub strategy: GridStrategy,
}

impl SearchConfig {
    /// Upper bound on explicitly requested workers.
    pub const MAX_WORKERS: usize = 256;

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, MAX_WORKERS]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, Self::MAX_WORKERS),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
        }
    }
}

// ── SearchError ────────────────────────────────────────────────────

/// Errors from running an obstruction search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The baseline walk could not be driven to an exit.
    Walk(WalkError),
    /// A candidate could not be turned into a wall.
    Grid(GridError),
    /// A worker thread panicked.
    WorkerPanicked,
    /// A worker thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the spawn failure.
        reason: String,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Walk(e) => write!(f, "baseline walk: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::WorkerPanicked => write!(f, "search worker panicked"),
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Walk(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WalkError> for SearchError {
    fn from(e: WalkError) -> Self {
        Self::Walk(e)
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
