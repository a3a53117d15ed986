//! Grid cell contents.

use std::fmt;

/// Contents of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tile {
    /// Open floor the agent may walk onto.
    #[default]
    Empty = b'.',
    /// An obstacle. Walking into it makes the agent turn.
    Wall = b'#',
}

impl Tile {
    /// Parse a tile from its text glyph. Start markers are not tiles.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Tile::Empty),
            '#' => Some(Tile::Wall),
            _ => None,
        }
    }

    /// The text glyph for this tile.
    pub fn glyph(self) -> char {
        self as u8 as char
    }

    /// Whether the agent can step onto this tile.
    pub fn is_passable(self) -> bool {
        self == Tile::Empty
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_match_text_format() {
        assert_eq!(Tile::from_glyph('.'), Some(Tile::Empty));
        assert_eq!(Tile::from_glyph('#'), Some(Tile::Wall));
        assert_eq!(Tile::from_glyph('^'), None);
        assert_eq!(Tile::Wall.glyph(), '#');
        assert_eq!(Tile::Empty.to_string(), ".");
    }

    #[test]
    fn only_empty_is_passable() {
        assert!(Tile::Empty.is_passable());
        assert!(!Tile::Wall.is_passable());
    }
}
