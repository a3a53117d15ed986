//! Error types for grid construction and loading.

use crate::geom::Position;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction, patching or text loading.
///
/// Every variant is a structural problem with the input. A grid that
/// constructs successfully is always non-empty and rectangular.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows, or its first row has no cells.
    EmptyGrid,
    /// A row's length differs from the first row's length.
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A character that is neither a tile nor a start marker.
    UnrecognisedTile {
        /// The offending character.
        glyph: char,
        /// Zero-based row of the character.
        row: usize,
        /// Zero-based column of the character.
        col: usize,
    },
    /// The text contains no start marker.
    MissingStart,
    /// The text contains more than one start marker.
    MultipleStarts {
        /// Position of the first marker seen.
        first: Position,
        /// Position of the second marker seen.
        second: Position,
    },
    /// A position lies outside the grid.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// A grid axis does not fit in a signed coordinate.
    DimensionTooLarge {
        /// Which axis ("width" or "height").
        name: &'static str,
        /// The requested size.
        value: usize,
        /// The largest accepted size.
        max: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid is not a rectangle: row {row} has {found} cells, expected {expected}"
            ),
            Self::UnrecognisedTile { glyph, row, col } => {
                write!(f, "unrecognised tile {glyph:?} at row {row}, column {col}")
            }
            Self::MissingStart => write!(f, "no starting location in grid"),
            Self::MultipleStarts { first, second } => {
                write!(f, "multiple starting locations: {first} and {second}")
            }
            Self::OutOfBounds {
                position,
                width,
                height,
            } => write!(f, "position {position} out of bounds: [0, {width}) x [0, {height})"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid {name} {value} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_row_display_names_row_and_lengths() {
        let msg = GridError::RaggedRow {
            row: 3,
            expected: 10,
            found: 9,
        }
        .to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("9 cells"));
        assert!(msg.contains("expected 10"));
    }

    #[test]
    fn unrecognised_tile_display_quotes_glyph() {
        let msg = GridError::UnrecognisedTile {
            glyph: 'x',
            row: 0,
            col: 4,
        }
        .to_string();
        assert!(msg.contains("'x'"));
    }

    #[test]
    fn out_of_bounds_display_shows_range() {
        let msg = GridError::OutOfBounds {
            position: Position::new(5, -1),
            width: 4,
            height: 4,
        }
        .to_string();
        assert_eq!(msg, "position (5, -1) out of bounds: [0, 4) x [0, 4)");
    }
}
