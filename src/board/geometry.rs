//! Positions, directions, and board geometry.
//!
//! Coordinates are signed so that off-board values stay representable:
//! they arise both from caller input and from stepping a ray past the
//! edge, and are rejected by validity checks rather than clamped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board width and height in cells.
pub const BOARD_SIZE: usize = 8;

/// A board coordinate: `(row, col)`, valid when both lie in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    /// Creates a position. The coordinates are not range-checked here;
    /// use [`Position::in_bounds`] to test validity.
    pub const fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    /// Returns true iff both coordinates lie on the board.
    pub const fn in_bounds(self) -> bool {
        self.row >= 0
            && self.row < BOARD_SIZE as i8
            && self.col >= 0
            && self.col < BOARD_SIZE as i8
    }

    /// Returns the neighboring position one step away in `dir`.
    /// The result may be off-board; coordinates saturate at the i8 range
    /// so stepping is total for any input.
    pub const fn step(self, dir: Direction) -> Position {
        Position {
            row: self.row.saturating_add(dir.dr),
            col: self.col.saturating_add(dir.dc),
        }
    }

    /// All 64 on-board positions in row-major order (row 0..8, column
    /// 0..8 within each row).
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as i8)
            .flat_map(|row| (0..BOARD_SIZE as i8).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A unit step vector used to scan rays from a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

/// The 8 ray directions: every vector with components in {-1, 0, 1}
/// except (0, 0).
pub const DIRECTIONS: [Direction; 8] = [
    Direction { dr: -1, dc: -1 },
    Direction { dr: -1, dc: 0 },
    Direction { dr: -1, dc: 1 },
    Direction { dr: 0, dc: -1 },
    Direction { dr: 0, dc: 1 },
    Direction { dr: 1, dc: -1 },
    Direction { dr: 1, dc: 0 },
    Direction { dr: 1, dc: 1 },
];
