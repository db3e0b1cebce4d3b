//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use super::position::Position;

/// Side of a cell is marked by, and whose turn it is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (opens a fresh game).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Fixed 3x3 grid addressed by (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `pos`.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Gets the cell at (row, col), or `None` when out of bounds.
    pub fn at(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Number of cells holding a mark.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c != Cell::Empty)
            .count()
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    pub(super) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => ' ',
                    Cell::Occupied(Player::X) => 'X',
                    Cell::Occupied(Player::O) => 'O',
                };
                result.push(symbol);
                if c < 2 {
                    result.push('|');
                }
            }
            if r < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Terminal or non-terminal classification of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still being accepted.
    InProgress,
    /// A player completed a line.
    WonBy(Player),
    /// Every cell is marked and nobody completed a line.
    Tie,
}

impl Outcome {
    /// Returns true once the game has been decided.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::WonBy(player) => Some(player),
            _ => None,
        }
    }
}

/// Per-game state. Rebuilt on every new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Whose turn is next. Meaningless once the outcome is terminal.
    current_player: Player,
    /// Cells still empty, in `0..=9`.
    free_count: u8,
    /// Whether the game is still running.
    outcome: Outcome,
    /// Seconds counted while the game was in progress.
    elapsed_seconds: u64,
}

impl GameState {
    /// Creates a fresh game with `first` to move.
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first,
            free_count: 9,
            outcome: Outcome::InProgress,
            elapsed_seconds: 0,
        }
    }

    /// Marks `pos` for the current player and consumes a free cell.
    ///
    /// Callers check the cell is empty first.
    pub(super) fn mark(&mut self, pos: Position) {
        self.board.set(pos, Cell::Occupied(self.current_player));
        self.free_count -= 1;
    }

    pub(super) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub(super) fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    pub(super) fn count_second(&mut self) {
        self.elapsed_seconds += 1;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

/// Win and tie counters that live as long as the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct SessionTally {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Games that ended in a tie.
    ties: u32,
}

impl SessionTally {
    /// Total completed games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    pub(super) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::WonBy(Player::X) => self.x_wins += 1,
            Outcome::WonBy(Player::O) => self.o_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => {}
        }
    }
}

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current game.
    state: GameState,
    /// Session counters.
    tally: SessionTally,
}

impl Snapshot {
    pub(super) fn new(state: GameState, tally: SessionTally) -> Self {
        Self { state, tally }
    }
}
