//! Tie detection for tic-tac-toe.

use super::super::{Board, Cell};

/// Checks if every cell holds a mark.
///
/// A full board with no completed line is a tie.
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::super::win::line_through;
    use super::*;

    fn fill(marks: [Player; 9]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Cell::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_line() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = fill([X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&board));
        for pos in Position::ALL {
            assert!(line_through(&board, pos).is_none());
        }
    }
}
