//! [`proptest`] strategies for arbitrary scenarios.

use patrol_core::{AgentState, Facing, Grid, Position, Scenario, Tile};
use proptest::prelude::*;

fn arb_facing() -> impl Strategy<Value = Facing> {
    prop_oneof![
        Just(Facing::Up),
        Just(Facing::Right),
        Just(Facing::Down),
        Just(Facing::Left),
    ]
}

/// Scenarios up to `max_dim` cells on each side with roughly one wall in
/// `wall_one_in` cells. The start cell is always open.
pub fn arb_scenario(max_dim: usize, wall_one_in: u32) -> impl Strategy<Value = Scenario> {
    (1..=max_dim, 1..=max_dim)
        .prop_flat_map(move |(w, h)| {
            (
                Just(w),
                Just(h),
                proptest::collection::vec(0..wall_one_in, w * h),
                0..w,
                0..h,
                arb_facing(),
            )
        })
        .prop_map(|(w, h, rolls, sx, sy, facing)| {
            let mut cells: Vec<Tile> = rolls
                .into_iter()
                .map(|r| if r == 0 { Tile::Wall } else { Tile::Empty })
                .collect();
            cells[sy * w + sx] = Tile::Empty;
            Scenario {
                grid: Grid::from_cells(w, h, cells).expect("generated grid is rectangular"),
                start: AgentState::new(Position::new(sx as i32, sy as i32), facing),
            }
        })
}
