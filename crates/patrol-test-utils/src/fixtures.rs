//! Reference maps with known answers.
//!
//! - [`CANONICAL_EXAMPLE`]: the 10x10 reference layout (41 visited cells,
//!   6 loop-inducing obstruction candidates).
//! - [`CLOCKWISE_LOOP`]: four walls that trap the agent in a 2x2 circuit
//!   returning to its initial state.
//! - [`BOXED_IN`]: the agent is walled in on all four sides.

use patrol_core::{Facing, Grid, Position, Scenario, Tile};

pub const CANONICAL_EXAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

/// Distinct cells visited by the unobstructed walk on [`CANONICAL_EXAMPLE`].
pub const CANONICAL_VISITED: usize = 41;

/// Cells of [`CANONICAL_EXAMPLE`] that trap the agent when walled, in
/// `(x, y)` order.
pub const CANONICAL_LOOPING_CANDIDATES: [(i32, i32); 6] =
    [(1, 8), (3, 6), (3, 8), (6, 7), (7, 7), (7, 9)];

pub const CLOCKWISE_LOOP: &str = "\
.#..
.^.#
#...
..#.
";

pub const BOXED_IN: &str = "\
.#.
#^#
.#.
";

/// Parse map text, panicking on malformed input.
pub fn scenario(text: &str) -> Scenario {
    Scenario::parse(text).unwrap_or_else(|e| panic!("bad fixture map: {e}\n{text}"))
}

pub fn canonical() -> Scenario {
    scenario(CANONICAL_EXAMPLE)
}

pub fn clockwise_loop() -> Scenario {
    scenario(CLOCKWISE_LOOP)
}

pub fn boxed_in() -> Scenario {
    scenario(BOXED_IN)
}

/// An open `width` x `height` grid with the agent at `start` facing
/// `facing`. Walls may be added through `walls`.
pub fn corridor(
    width: usize,
    height: usize,
    start: (i32, i32),
    facing: Facing,
    walls: &[(i32, i32)],
) -> Scenario {
    let mut grid = Grid::open(width, height).expect("corridor dimensions must be non-zero");
    for &(x, y) in walls {
        grid.set(Position::new(x, y), Tile::Wall)
            .expect("corridor wall out of bounds");
    }
    Scenario {
        grid,
        start: patrol_core::AgentState::new(start.into(), facing),
    }
}
