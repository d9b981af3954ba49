//! The board aggregate.
//!
//! Owns the fixed 8x8 grid of optional pieces and is the sole authority
//! on move legality and mutation. The board is turn-agnostic: it answers
//! "is this move legal" and "apply this move" for either color, leaving
//! sequencing to the driver.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::{Position, BOARD_SIZE, DIRECTIONS};
use super::piece::{Color, Piece};
use super::scan::capture_run;

/// Errors raised by board operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),

    #[error("invalid move at {0}")]
    InvalidMove(Position),
}

/// The 8x8 playing surface.
///
/// Each cell is an explicit `Option<Piece>`, so absence is a checked
/// variant. Grid dimensions are fixed for the lifetime of the board, and
/// the public surface mutates it exclusively through [`Board::place_piece`]:
/// pieces are added one at a time and recolored by capture, never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board in the fixed starting configuration: black at
    /// (4,3) and (3,4), white at (3,3) and (4,4), 60 empty cells.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.put(Position::new(4, 3), Color::Black);
        board.put(Position::new(3, 4), Color::Black);
        board.put(Position::new(3, 3), Color::White);
        board.put(Position::new(4, 4), Color::White);
        board
    }

    /// Creates a board with every cell empty. Fixture entry point for the
    /// notation parser and tests; not part of the public surface.
    pub(crate) fn empty() -> Self {
        Board {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Writes a piece directly into a cell, bypassing the capture rules.
    pub(crate) fn put(&mut self, pos: Position, color: Color) {
        debug_assert!(pos.in_bounds());
        self.grid[pos.row as usize][pos.col as usize] = Some(Piece::new(color));
    }

    /// Reads a cell known to be on the board.
    pub(crate) fn cell(&self, pos: Position) -> Option<Piece> {
        debug_assert!(pos.in_bounds());
        self.grid[pos.row as usize][pos.col as usize]
    }

    /// Returns the piece at `pos`, which may be absent.
    /// Fails with `OutOfBounds` if either coordinate falls outside `0..8`.
    pub fn piece_at(&self, pos: Position) -> Result<Option<Piece>, BoardError> {
        if !pos.in_bounds() {
            return Err(BoardError::OutOfBounds(pos));
        }
        Ok(self.cell(pos))
    }

    /// Returns true iff both coordinates of `pos` lie on the board.
    pub fn is_valid_pos(&self, pos: Position) -> bool {
        pos.in_bounds()
    }

    /// Returns true iff the cell at `pos` holds a piece.
    pub fn is_occupied(&self, pos: Position) -> Result<bool, BoardError> {
        Ok(self.piece_at(pos)?.is_some())
    }

    /// Returns true iff the cell at `pos` holds a piece of `color`.
    pub fn is_mine(&self, pos: Position, color: Color) -> Result<bool, BoardError> {
        Ok(self
            .piece_at(pos)?
            .map_or(false, |piece| piece.color() == color))
    }

    /// Checks whether placing `color` at `pos` is legal: the position is
    /// on the board, unoccupied, and at least one of the 8 rays yields a
    /// capture. The grid is not mutated; the scan never examines the
    /// origin cell.
    pub fn valid_move(&self, pos: Position, color: Color) -> bool {
        if !pos.in_bounds() {
            return false;
        }
        if self.cell(pos).is_some() {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&dir| capture_run(self, pos, color, dir).is_some())
    }

    /// Enumerates every legal move for `color` in row-major order.
    /// Deterministic and stable for a fixed board state.
    pub fn valid_moves(&self, color: Color) -> Vec<Position> {
        Position::all()
            .filter(|&pos| self.valid_move(pos, color))
            .collect()
    }

    /// Returns true iff `color` has at least one legal move.
    pub fn has_move(&self, color: Color) -> bool {
        Position::all().any(|pos| self.valid_move(pos, color))
    }

    /// Returns true iff neither color has a legal move. Turn-agnostic:
    /// this is total gridlock, not merely the current player being stuck.
    pub fn is_over(&self) -> bool {
        !self.has_move(Color::Black) && !self.has_move(Color::White)
    }

    /// Places a new piece of `color` at `pos` and flips every captured
    /// piece.
    ///
    /// Fails with `InvalidMove` when the target is occupied, out of
    /// bounds, or captures in no direction; the board is left unchanged
    /// on failure. Runs along distinct rays are pairwise disjoint, so
    /// each captured piece flips exactly once and the result does not
    /// depend on direction order.
    pub fn place_piece(&mut self, pos: Position, color: Color) -> Result<(), BoardError> {
        if !self.valid_move(pos, color) {
            return Err(BoardError::InvalidMove(pos));
        }

        self.grid[pos.row as usize][pos.col as usize] = Some(Piece::new(color));

        let mut captured = Vec::new();
        for dir in DIRECTIONS {
            if let Some(run) = capture_run(self, pos, color, dir) {
                captured.extend(run);
            }
        }
        for p in captured {
            // Every accumulated position holds an opponent piece.
            if let Some(piece) = self.grid[p.row as usize][p.col as usize].as_mut() {
                piece.flip();
            }
        }
        Ok(())
    }

    /// Counts the pieces of one color.
    pub fn count(&self, color: Color) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter_map(|cell| *cell)
            .filter(|piece| piece.color() == color)
            .count()
    }

    /// Counts the occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Bulk snapshot accessor for renderers and serializers.
    pub fn grid(&self) -> &[[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
