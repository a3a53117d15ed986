//! Benchmark profiles for the patrol simulator.
//!
//! - [`reference_profile`]: 130x130 map at roughly puzzle-input density
//! - [`sparse_profile`]: 64x64 map with few walls
//! - [`generate`]: deterministic map generation from a seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use patrol_core::{AgentState, Facing, Grid, Position, Scenario, Tile};
use patrol_sim::run_to_exit;

/// Generate a `width` x `height` map with about one wall per
/// `wall_one_in` cells, the agent in the centre facing up.
///
/// Uses a fixed 64-bit LCG so maps are identical across runs and
/// platforms.
pub fn generate(width: usize, height: usize, wall_one_in: u64, seed: u64) -> Scenario {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut cells = Vec::with_capacity(width * height);
    for _ in 0..width * height {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let roll = (state >> 33) % wall_one_in.max(1);
        cells.push(if roll == 0 { Tile::Wall } else { Tile::Empty });
    }
    let start = Position::new((width / 2) as i32, (height / 2) as i32);
    cells[(height / 2) * width + width / 2] = Tile::Empty;
    let grid = Grid::from_cells(width, height, cells).expect("benchmark dimensions are non-zero");
    Scenario {
        grid,
        start: AgentState::new(start, Facing::Up),
    }
}

/// First map from `seed` onwards whose unobstructed walk exits.
pub fn exiting(width: usize, height: usize, wall_one_in: u64, seed: u64) -> Scenario {
    (seed..)
        .map(|s| generate(width, height, wall_one_in, s))
        .find(|s| run_to_exit(&s.grid, s.start).is_ok())
        .expect("some seed yields an exiting walk")
}

/// 130x130 map, about 1 wall in 12 cells.
pub fn reference_profile(seed: u64) -> Scenario {
    exiting(130, 130, 12, seed)
}

/// 64x64 map, about 1 wall in 40 cells.
pub fn sparse_profile(seed: u64) -> Scenario {
    exiting(64, 64, 40, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol_core::TileMap;

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate(20, 20, 8, 7), generate(20, 20, 8, 7));
        assert_ne!(generate(20, 20, 8, 7), generate(20, 20, 8, 8));
    }

    #[test]
    fn start_cell_is_open() {
        let s = generate(9, 5, 1, 0);
        assert_eq!(s.grid.tile(s.start.position), Some(Tile::Empty));
    }

    #[test]
    fn profiles_exit() {
        let s = sparse_profile(1);
        assert!(run_to_exit(&s.grid, s.start).is_ok());
    }
}
