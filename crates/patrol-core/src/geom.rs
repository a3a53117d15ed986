//! Positions, facings and the composite agent state.

use std::fmt;

/// A grid coordinate: `x` is the column, `y` the row, row 0 at the top.
///
/// Components are signed so that the cell one step past any border is
/// representable; only [`TileMap::contains`](crate::TileMap::contains)
/// decides whether a position is valid for a given grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Position {
    /// Construct a position from column and row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one step in `facing`.
    ///
    /// Saturates instead of overflowing; a saturated coordinate is always
    /// outside any grid since axes are bounded by `i32::MAX` cells.
    pub fn step(self, facing: Facing) -> Self {
        let (dx, dy) = facing.offset();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The direction the agent faces. Cyclically ordered clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Facing {
    /// Towards row 0.
    #[default]
    Up = 0,
    /// Towards higher columns.
    Right = 1,
    /// Towards higher rows.
    Down = 2,
    /// Towards column 0.
    Left = 3,
}

impl Facing {
    /// All facings in rotation order.
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Right, Facing::Down, Facing::Left];

    /// The next facing clockwise: Up → Right → Down → Left → Up.
    pub fn rotate(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Returns the `(dx, dy)` unit offset for this facing.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Facing::Up => (0, -1),
            Facing::Right => (1, 0),
            Facing::Down => (0, 1),
            Facing::Left => (-1, 0),
        }
    }

    /// Position of this facing in [`Facing::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a start-marker glyph (`^`, `>`, `v`, `<`).
    pub fn from_marker(glyph: char) -> Option<Self> {
        match glyph {
            '^' => Some(Facing::Up),
            '>' => Some(Facing::Right),
            'v' => Some(Facing::Down),
            '<' => Some(Facing::Left),
            _ => None,
        }
    }

    /// The start-marker glyph for this facing.
    pub fn marker(self) -> char {
        match self {
            Facing::Up => '^',
            Facing::Right => '>',
            Facing::Down => 'v',
            Facing::Left => '<',
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Facing::Up => "up",
            Facing::Right => "right",
            Facing::Down => "down",
            Facing::Left => "left",
        };
        f.write_str(name)
    }
}

/// The complete simulation state: where the agent is and where it faces.
///
/// Two states are equal iff both fields match. This is the unit of cycle
/// detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentState {
    /// Current cell.
    pub position: Position,
    /// Current facing.
    pub facing: Facing,
}

impl AgentState {
    /// Construct a state.
    pub const fn new(position: Position, facing: Facing) -> Self {
        Self { position, facing }
    }

    /// The cell the agent would enter by moving forward.
    pub fn ahead(&self) -> Position {
        self.position.step(self.facing)
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.position, self.facing)
    }
}
