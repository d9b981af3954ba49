//! Compact board text notation.
//!
//! A board is eight newline-separated rows of eight characters: `B` for
//! a black piece, `W` for white, `.` for an empty cell. This is the
//! fixture format for the test suites and the snapshot seam for external
//! persistence collaborators.

use thiserror::Error;

use crate::board::{Board, Color, Position, BOARD_SIZE};

/// Errors that can occur when parsing board notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected 8 rows, got {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {width} cells, expected 8")]
    WrongRowWidth { row: usize, width: usize },

    #[error("invalid cell character '{ch}' at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },
}

/// Formats a board as eight rows of glyphs, without a trailing newline.
pub fn format_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .grid()
        .iter()
        .map(|cells| {
            cells
                .iter()
                .map(|cell| match cell {
                    Some(piece) => piece.color().glyph(),
                    None => '.',
                })
                .collect()
        })
        .collect();
    rows.join("\n")
}

/// Parses a board from its notation form. A trailing newline is accepted.
pub fn parse_board(s: &str) -> Result<Board, NotationError> {
    let rows: Vec<&str> = s.lines().collect();
    if rows.len() != BOARD_SIZE {
        return Err(NotationError::WrongRowCount(rows.len()));
    }

    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        let width = line.chars().count();
        if width != BOARD_SIZE {
            return Err(NotationError::WrongRowWidth { row, width });
        }
        for (col, ch) in line.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            match Color::from_glyph(ch) {
                Some(color) => board.put(Position::new(row as i8, col as i8), color),
                None => return Err(NotationError::InvalidCell { row, col, ch }),
            }
        }
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPENING: &str = "........\n\
                           ........\n\
                           ........\n\
                           ...WB...\n\
                           ...BW...\n\
                           ........\n\
                           ........\n\
                           ........";

    #[test]
    fn opening_board_formats_as_expected() {
        assert_eq!(format_board(&Board::new()), OPENING);
    }

    #[test]
    fn roundtrip_preserves_the_board() {
        let mut board = Board::new();
        board.place_piece(Position::new(2, 3), Color::Black).unwrap();
        let reparsed = parse_board(&format_board(&board)).unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn trailing_newline_is_accepted() {
        let text = format!("{}\n", OPENING);
        assert_eq!(parse_board(&text).unwrap(), Board::new());
    }

    #[test]
    fn wrong_row_count_is_rejected() {
        assert_eq!(
            parse_board("........\n........"),
            Err(NotationError::WrongRowCount(2))
        );
    }

    #[test]
    fn wrong_row_width_is_rejected() {
        let text = OPENING.replace("...WB...", "...WB..");
        assert_eq!(
            parse_board(&text),
            Err(NotationError::WrongRowWidth { row: 3, width: 7 })
        );
    }

    #[test]
    fn unknown_glyph_is_rejected() {
        let text = OPENING.replace("...WB...", "...Wx...");
        assert_eq!(
            parse_board(&text),
            Err(NotationError::InvalidCell {
                row: 3,
                col: 4,
                ch: 'x'
            })
        );
    }
}
