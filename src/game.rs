//! Turn sequencing for a two-player session.
//!
//! The board itself is turn-agnostic, so this driver owns the
//! {Black-to-move, White-to-move, Over} state machine around it. The pass
//! rule: after a move, the opponent plays next if able; otherwise the
//! mover plays again (the opponent passes without forfeiting a piece);
//! when neither color can move, the session is over regardless of whose
//! turn it nominally was.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, BoardError, Color, Position};

/// Errors raised by session operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A game session: a board plus the color to move, if any.
///
/// `to_move` of `None` encodes the Over state. Every reachable session
/// satisfies the invariant that a color holding the turn has at least one
/// legal move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Option<Color>,
}

impl Game {
    /// Starts a fresh session: standard opening board, Black to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Some(Color::Black),
        }
    }

    /// Resumes a session from a board snapshot with `to_move` nominally
    /// holding the turn.
    ///
    /// The status is normalized on entry: if `to_move` has no legal move
    /// the turn passes to the opponent, and if neither color can move the
    /// session is Over.
    pub fn from_position(board: Board, to_move: Color) -> Self {
        let to_move = next_mover(&board, to_move);
        Game { board, to_move }
    }

    /// The board being played on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color holding the turn, or `None` once the session is over.
    pub fn to_move(&self) -> Option<Color> {
        self.to_move
    }

    /// Returns true once neither color can move.
    pub fn is_over(&self) -> bool {
        self.to_move.is_none()
    }

    /// Applies the current player's move at `pos`, then advances the
    /// turn by the pass rule.
    ///
    /// Fails with `GameOver` on a finished session and passes board
    /// errors through unchanged; the session state is intact after any
    /// failure.
    pub fn play(&mut self, pos: Position) -> Result<(), GameError> {
        let color = self.to_move.ok_or(GameError::GameOver)?;
        self.board.place_piece(pos, color)?;
        self.to_move = next_mover(&self.board, color.opposite());
        Ok(())
    }

    /// The piece tally as `(black, white)`.
    pub fn score(&self) -> (usize, usize) {
        (
            self.board.count(Color::Black),
            self.board.count(Color::White),
        )
    }

    /// The color currently ahead on pieces, or `None` on a tie.
    pub fn winner(&self) -> Option<Color> {
        let (black, white) = self.score();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

/// Picks the next color to hold the turn, preferring `preferred`, falling
/// back to its opponent, and reporting Over (`None`) when neither can
/// move.
fn next_mover(board: &Board, preferred: Color) -> Option<Color> {
    if board.has_move(preferred) {
        Some(preferred)
    } else if board.has_move(preferred.opposite()) {
        Some(preferred.opposite())
    } else {
        None
    }
}
