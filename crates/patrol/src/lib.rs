//! Patrol: a grid agent simulator with cycle detection.
//!
//! This is the top-level facade crate that re-exports the public API of the
//! patrol sub-crates and provides the two headline operations:
//!
//! - [`count_distinct_visited_positions`]: how many cells the agent covers
//!   before walking off the grid.
//! - [`count_loop_inducing_obstructions`]: how many single-wall placements
//!   along that walk trap the agent forever.
//!
//! # Quick start
//!
//! ```rust
//! use patrol::prelude::*;
//!
//! let scenario: Scenario = "\
//! ....#.....
//! .........#
//! ..........
//! ..#.......
//! .......#..
//! ..........
//! .#..^.....
//! ........#.
//! #.........
//! ......#...
//! "
//! .parse()
//! .unwrap();
//!
//! let visited = patrol::count_distinct_visited_positions(&scenario.grid, scenario.start).unwrap();
//! assert_eq!(visited, 41);
//!
//! let traps = patrol::count_loop_inducing_obstructions(&scenario.grid, scenario.start).unwrap();
//! assert_eq!(traps, 6);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `patrol-core` | Tiles, positions, facings, grids, overlay, loader |
//! | [`sim`] | `patrol-sim` | Step rule, trajectories, run modes |
//! | [`search`] | `patrol-search` | Parallel obstruction search |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the text loader (`patrol-core`).
pub use patrol_core as types;

/// Walk simulator (`patrol-sim`).
///
/// [`sim::Walker`] applies the step rule; [`sim::Trajectory`] iterates
/// states with cycle detection.
pub use patrol_sim as sim;

/// Obstruction search (`patrol-search`).
pub use patrol_search as search;

pub use patrol_search::count_loop_inducing_obstructions;
pub use patrol_sim::count_distinct_visited_positions;

/// Common imports for typical patrol usage.
pub mod prelude {
    // Core types
    pub use patrol_core::{
        AgentState, Facing, Grid, GridError, Outcome, PatchedGrid, Position, Scenario, Tile,
        TileMap,
    };

    // Simulation
    pub use patrol_sim::{Trajectory, Transition, WalkError, Walker};

    // Search
    pub use patrol_search::{GridStrategy, ObstructionSearch, SearchConfig, SearchError};
}
