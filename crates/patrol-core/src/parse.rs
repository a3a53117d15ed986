//! Text loader: turns a puzzle map into a [`Scenario`].
//!
//! The format is one row per line. `.` is open floor, `#` a wall, and
//! exactly one of `^ > v <` marks the agent's start cell and facing (the
//! cell itself is open floor). Rows must all have the same length.
//! Trailing blank lines and `\r` line endings are tolerated.

use crate::error::GridError;
use crate::geom::{AgentState, Facing, Position};
use crate::grid::Grid;
use crate::tile::Tile;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A loaded grid together with the agent's starting state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    /// The immutable input grid.
    pub grid: Grid,
    /// Where the agent starts and which way it faces.
    pub start: AgentState,
}

impl Scenario {
    /// Parse a scenario from map text.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the text has no rows, contains a character
    /// other than a tile or start marker, has rows of differing length, or
    /// does not contain exactly one start marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use patrol_core::{Facing, Position, Scenario, TileMap};
    ///
    /// let s = Scenario::parse("..#\n.^.\n...\n").unwrap();
    /// assert_eq!(s.grid.width(), 3);
    /// assert_eq!(s.start.position, Position::new(1, 1));
    /// assert_eq!(s.start.facing, Facing::Up);
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        let used = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(0, |i| i + 1);

        let mut rows = Vec::with_capacity(used);
        let mut start: Option<AgentState> = None;

        for (y, line) in lines[..used].iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, glyph) in line.chars().enumerate() {
                if let Some(tile) = Tile::from_glyph(glyph) {
                    row.push(tile);
                    continue;
                }
                let Some(facing) = Facing::from_marker(glyph) else {
                    return Err(GridError::UnrecognisedTile {
                        glyph,
                        row: y,
                        col: x,
                    });
                };
                let position = Position::new(x as i32, y as i32);
                if let Some(first) = start {
                    return Err(GridError::MultipleStarts {
                        first: first.position,
                        second: position,
                    });
                }
                debug!(%position, %facing, "agent starting location");
                start = Some(AgentState::new(position, facing));
                row.push(Tile::Empty);
            }
            rows.push(row);
        }

        let grid = Grid::new(rows)?;
        let start = start.ok_or(GridError::MissingStart)?;
        Ok(Self { grid, start })
    }
}

impl FromStr for Scenario {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Scenario {
    /// Renders the map text, with the start marker in place.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.grid.rows().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                if self.start.position == Position::new(x as i32, y as i32) {
                    write!(f, "{}", self.start.facing.marker())?;
                } else {
                    write!(f, "{tile}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
