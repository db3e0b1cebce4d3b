//! Win detection for tic-tac-toe.
//!
//! Only the lines through the cell that was just marked can have been
//! completed by that move, so nothing here scans the whole board.

use super::super::{Board, Cell, Player, Position};
use tracing::instrument;

/// Fewest free cells at which a line can exist: X needs 3 marks, O has 2.
const MAX_FREE_FOR_WIN: u8 = 4;

/// Decides whether the move just made at `pos` won the game.
///
/// Must be called right after `pos` was marked and `free_count`
/// decremented. While more than four cells are free fewer than five marks
/// exist, so no line can be complete and this returns `false` without
/// looking at the board.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, pos: Position, free_count: u8) -> bool {
    if free_count > MAX_FREE_FOR_WIN {
        return false;
    }
    line_through(board, pos).is_some()
}

/// Returns the player owning a complete line through `pos`, if any.
///
/// Checks the row, the column, the main diagonal when `row == col` and the
/// anti-diagonal when `row + col == 2`.
pub fn line_through(board: &Board, pos: Position) -> Option<Player> {
    let (row, col) = (pos.row(), pos.col());

    let row_line = [(row, 0), (row, 1), (row, 2)];
    let col_line = [(0, col), (1, col), (2, col)];
    let main_diag = [(0, 0), (1, 1), (2, 2)];
    let anti_diag = [(0, 2), (1, 1), (2, 0)];

    let mut lines = vec![row_line, col_line];
    if row == col {
        lines.push(main_diag);
    }
    if row + col == 2 {
        lines.push(anti_diag);
    }

    lines.into_iter().find_map(|line| uniform_mark(board, line))
}

fn uniform_mark(board: &Board, [a, b, c]: [(usize, usize); 3]) -> Option<Player> {
    let first = board.at(a.0, a.1)?;
    if first != Cell::Empty && Some(first) == board.at(b.0, b.1) && Some(first) == board.at(c.0, c.1)
    {
        first.mark()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_line_on_empty_board() {
        let board = Board::new();
        assert_eq!(line_through(&board, Position::Center), None);
    }

    #[test]
    fn test_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(line_through(&board, Position::TopCenter), Some(Player::X));
    }

    #[test]
    fn test_column() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::MiddleRight, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(line_through(&board, Position::BottomRight), Some(Player::O));
    }

    #[test]
    fn test_anti_diagonal_from_corner() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert_eq!(line_through(&board, Position::BottomLeft), Some(Player::O));
        assert_eq!(line_through(&board, Position::TopRight), Some(Player::O));
    }

    #[test]
    fn test_edge_cell_ignores_diagonals() {
        // Main diagonal complete, but TopCenter is on neither diagonal.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::Center, Player::X),
            (Position::BottomRight, Player::X),
            (Position::TopCenter, Player::O),
        ]);
        assert_eq!(line_through(&board, Position::TopCenter), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::MiddleLeft, Player::X),
            (Position::Center, Player::O),
            (Position::MiddleRight, Player::X),
        ]);
        assert_eq!(line_through(&board, Position::MiddleRight), None);
    }

    #[test]
    fn test_short_circuit_while_more_than_four_free() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert!(!completes_line(&board, Position::TopRight, 6));
        assert!(!completes_line(&board, Position::TopRight, 5));
        assert!(completes_line(&board, Position::TopRight, 4));
    }
}
