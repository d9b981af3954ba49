//! Board representation and capture rules.
//!
//! Contains the core data structures for pieces, positions, directions,
//! the 8x8 grid, and the capture-scan algorithm.

pub mod geometry;
pub mod piece;
pub mod scan;
pub mod state;

pub use geometry::{Direction, Position, BOARD_SIZE, DIRECTIONS};
pub use piece::{Color, Piece, ALL_COLORS};
pub use scan::capture_run;
pub use state::{Board, BoardError};
