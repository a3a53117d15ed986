//! Single-cell copy-on-write overlay over a shared [`Grid`].
//!
//! The obstruction search evaluates thousands of grids that each differ
//! from the base grid in exactly one cell. [`PatchedGrid`] borrows the base
//! and routes reads of the patched cell to the override, so no worker ever
//! copies or mutates the shared grid.

use crate::error::GridError;
use crate::geom::Position;
use crate::grid::{Grid, TileMap};
use crate::tile::Tile;

/// A borrowed [`Grid`] with one cell overridden.
#[derive(Clone, Copy, Debug)]
pub struct PatchedGrid<'a> {
    base: &'a Grid,
    position: Position,
    tile: Tile,
}

impl<'a> PatchedGrid<'a> {
    /// Overlay `tile` at `position` on top of `base`.
    ///
    /// Returns `Err(GridError::OutOfBounds)` if `position` is not a cell
    /// of `base`.
    pub fn new(base: &'a Grid, position: Position, tile: Tile) -> Result<Self, GridError> {
        if !base.contains(position) {
            return Err(GridError::OutOfBounds {
                position,
                width: base.width(),
                height: base.height(),
            });
        }
        Ok(Self {
            base,
            position,
            tile,
        })
    }

    /// Overlay a wall at `position`.
    pub fn with_wall(base: &'a Grid, position: Position) -> Result<Self, GridError> {
        Self::new(base, position, Tile::Wall)
    }

    /// Materialise the overlay into an owned grid.
    pub fn to_grid(&self) -> Result<Grid, GridError> {
        let mut grid = self.base.clone();
        grid.set(self.position, self.tile)?;
        Ok(grid)
    }
}

impl TileMap for PatchedGrid<'_> {
    fn width(&self) -> u32 {
        self.base.width()
    }

    fn height(&self) -> u32 {
        self.base.height()
    }

    fn tile(&self, position: Position) -> Option<Tile> {
        if position == self.position {
            return Some(self.tile);
        }
        self.base.tile(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patched_cell_reads_override() {
        let base = Grid::open(3, 3).unwrap();
        let patched = PatchedGrid::with_wall(&base, Position::new(1, 1)).unwrap();
        assert_eq!(patched.tile(Position::new(1, 1)), Some(Tile::Wall));
        assert_eq!(patched.tile(Position::new(0, 1)), Some(Tile::Empty));
        assert_eq!(patched.tile(Position::new(3, 1)), None);
        // Base is untouched.
        assert_eq!(base.tile(Position::new(1, 1)), Some(Tile::Empty));
    }

    #[test]
    fn out_of_bounds_patch_is_rejected() {
        let base = Grid::open(3, 3).unwrap();
        assert!(matches!(
            PatchedGrid::with_wall(&base, Position::new(-1, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn to_grid_matches_overlay_everywhere() {
        let base = Grid::open(4, 2).unwrap();
        let patched = PatchedGrid::with_wall(&base, Position::new(2, 1)).unwrap();
        let owned = patched.to_grid().unwrap();
        for y in 0..2 {
            for x in 0..4 {
                let pos = Position::new(x, y);
                assert_eq!(owned.tile(pos), patched.tile(pos));
            }
        }
        assert_eq!(owned.wall_count(), 1);
        assert_eq!(base.wall_count(), 0);
    }
}
