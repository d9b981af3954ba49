//! Directional capture scanning.
//!
//! The capture scan is the only non-trivial rule of the game: walking a
//! single ray away from a placement, it decides whether that ray captures
//! anything and, if so, exactly which cells. The walk is iterative; a run
//! can never exceed 7 cells on an 8x8 grid.

use super::geometry::{Direction, Position};
use super::piece::Color;
use super::state::Board;

/// Scans one ray from `origin` for pieces captured by a placement of
/// `color` there.
///
/// Steps cell by cell in `dir`, accumulating opponent-colored positions,
/// and terminates as follows:
/// - an off-board or empty cell fails the scan: `None`, the accumulated
///   run is discarded;
/// - a cell of the scanning color closes the scan, but succeeds only if
///   at least one opponent cell was accumulated first: a same-colored
///   immediate neighbor is `None`, never an empty success.
///
/// On success the run holds the opponent positions strictly between
/// `origin` and the terminator, in ray order. The origin cell itself is
/// never examined, so a prospective placement can be scanned without
/// mutating the grid.
pub fn capture_run(
    board: &Board,
    origin: Position,
    color: Color,
    dir: Direction,
) -> Option<Vec<Position>> {
    let mut run = Vec::new();
    let mut cur = origin.step(dir);

    while cur.in_bounds() {
        match board.cell(cur) {
            // A hole in the ray: nothing is bracketed.
            None => return None,
            Some(piece) if piece.color() == color => {
                return if run.is_empty() { None } else { Some(run) };
            }
            Some(_) => {
                run.push(cur);
                cur = cur.step(dir);
            }
        }
    }

    // Ran off the board without reaching a terminator.
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::Color::{Black, White};

    fn dir(dr: i8, dc: i8) -> Direction {
        Direction { dr, dc }
    }

    #[test]
    fn opening_capture_of_length_one() {
        let board = Board::new();
        // From (2,3) stepping down: white at (3,3), black terminator at (4,3).
        let run = capture_run(&board, Position::new(2, 3), Black, dir(1, 0));
        assert_eq!(run, Some(vec![Position::new(3, 3)]));
    }

    #[test]
    fn empty_neighbor_fails() {
        let board = Board::new();
        let run = capture_run(&board, Position::new(2, 3), Black, dir(0, 1));
        assert_eq!(run, None);
    }

    #[test]
    fn same_colored_neighbor_is_not_an_empty_success() {
        let mut board = Board::empty();
        board.put(Position::new(0, 1), Black);
        board.put(Position::new(0, 2), Black);
        let run = capture_run(&board, Position::new(0, 0), Black, dir(0, 1));
        assert_eq!(run, None);
    }

    #[test]
    fn running_off_the_board_discards_the_run() {
        let mut board = Board::empty();
        // Opponent pieces all the way to the edge, no terminator.
        board.put(Position::new(0, 1), White);
        board.put(Position::new(0, 2), White);
        let run = capture_run(&board, Position::new(0, 0), Black, dir(0, 1));
        assert_eq!(run, None);
    }

    #[test]
    fn unterminated_interior_run_fails() {
        let mut board = Board::empty();
        board.put(Position::new(0, 1), White);
        board.put(Position::new(0, 2), White);
        // (0,3) is empty, so the two whites are not bracketed.
        board.put(Position::new(0, 4), Black);
        let run = capture_run(&board, Position::new(0, 0), Black, dir(0, 1));
        assert_eq!(run, None);
    }

    #[test]
    fn long_run_is_reported_in_ray_order() {
        let mut board = Board::empty();
        for col in 1..7 {
            board.put(Position::new(3, col), White);
        }
        board.put(Position::new(3, 7), Black);
        let run = capture_run(&board, Position::new(3, 0), Black, dir(0, 1));
        let expected: Vec<Position> = (1..7).map(|col| Position::new(3, col)).collect();
        assert_eq!(run, Some(expected));
    }
}
