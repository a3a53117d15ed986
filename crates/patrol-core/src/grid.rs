//! Rectangular tile storage and the [`TileMap`] read interface.

use crate::error::GridError;
use crate::geom::Position;
use crate::tile::Tile;
use std::fmt;

/// Read-only view of a rectangular grid of tiles.
///
/// The walk simulator is generic over this trait so that it can run
/// against a plain [`Grid`] or a [`PatchedGrid`](crate::PatchedGrid)
/// overlay without copying.
pub trait TileMap {
    /// Number of columns. Always at least 1.
    fn width(&self) -> u32;

    /// Number of rows. Always at least 1.
    fn height(&self) -> u32;

    /// Tile at `position`, or `None` if the position is outside the grid.
    fn tile(&self, position: Position) -> Option<Tile>;

    /// Whether `position` lies inside the grid.
    fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width()
            && (position.y as u32) < self.height()
    }

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        (self.width() as usize) * (self.height() as usize)
    }

    /// Row-major rank of `position`, or `None` if out of bounds.
    fn rank(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some((position.y as usize) * (self.width() as usize) + (position.x as usize))
    }
}

/// A non-empty, rectangular, row-major grid of tiles.
///
/// Construction validates shape; every `Grid` value upholds the
/// invariants, so the simulator never sees a malformed grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Tile>,
}

impl Grid {
    /// Largest accepted size of either axis: positions use `i32`.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Build a grid from rows of tiles.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if there are no rows or the
    /// first row is empty, and `Err(GridError::RaggedRow)` if any row's
    /// length differs from the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use patrol_core::{Grid, Position, Tile, TileMap};
    ///
    /// let grid = Grid::new(vec![
    ///     vec![Tile::Empty, Tile::Wall],
    ///     vec![Tile::Empty, Tile::Empty],
    /// ])
    /// .unwrap();
    /// assert_eq!(grid.width(), 2);
    /// assert_eq!(grid.tile(Position::new(1, 0)), Some(Tile::Wall));
    /// assert_eq!(grid.tile(Position::new(2, 0)), None);
    /// ```
    pub fn new(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, tiles) in rows.iter().enumerate() {
            if tiles.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: tiles.len(),
                });
            }
            cells.extend_from_slice(tiles);
        }
        Self::from_cells(width, rows.len(), cells)
    }

    /// Build a grid from a flat row-major cell vector.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Tile>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        check_dim("width", width)?;
        check_dim("height", height)?;
        if cells.len() != width * height {
            return Err(GridError::RaggedRow {
                row: cells.len() / width,
                expected: width,
                found: cells.len() % width,
            });
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
            cells,
        })
    }

    /// A `width` x `height` grid with no walls.
    pub fn open(width: usize, height: usize) -> Result<Self, GridError> {
        Self::from_cells(width, height, vec![Tile::Empty; width * height])
    }

    /// Overwrite the tile at `position`, returning the previous tile.
    pub fn set(&mut self, position: Position, tile: Tile) -> Result<Tile, GridError> {
        let idx = self.rank(position).ok_or(GridError::OutOfBounds {
            position,
            width: self.width,
            height: self.height,
        })?;
        Ok(std::mem::replace(&mut self.cells[idx], tile))
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.width as usize)
    }

    /// Number of walls in the grid.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|t| **t == Tile::Wall).count()
    }
}

fn check_dim(name: &'static str, value: usize) -> Result<(), GridError> {
    if value > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name,
            value,
            max: Grid::MAX_DIM,
        });
    }
    Ok(())
}

impl TileMap for Grid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn tile(&self, position: Position) -> Option<Tile> {
        self.rank(position).map(|idx| self.cells[idx])
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{tile}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
