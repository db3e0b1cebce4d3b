//! Game engine: the only owner of game state and session tallies.
//!
//! The engine knows nothing about rendering, audio or clocks. Callers feed
//! it clicks through [`GameEngine::place`], seconds through
//! [`GameEngine::tick`], and render from [`GameEngine::snapshot`].

use super::rules;
use super::types::{GameState, Outcome, Player, SessionTally, Snapshot};
use super::Position;
use tracing::{debug, info, instrument};

/// What a call to [`GameEngine::place`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceResult {
    /// Nothing changed: the cell was taken, out of bounds, or the game is over.
    Ignored,
    /// A mark was placed and play continues.
    Placed {
        /// Mark that was just placed.
        mark: Player,
        /// Player to move next.
        next: Player,
    },
    /// The move completed a line.
    Won {
        /// The winner, who also made the move.
        player: Player,
    },
    /// The move filled the last free cell without completing a line.
    Tied,
}

impl PlaceResult {
    /// The mark that was placed, if the call changed the board.
    ///
    /// `Tied` carries no player, so it needs the mover passed in.
    pub fn placed_mark(self, mover: Player) -> Option<Player> {
        match self {
            PlaceResult::Ignored => None,
            PlaceResult::Placed { mark, .. } => Some(mark),
            PlaceResult::Won { player } => Some(player),
            PlaceResult::Tied => Some(mover),
        }
    }

    /// Returns true when this move ended the game.
    pub fn is_game_over(self) -> bool {
        matches!(self, PlaceResult::Won { .. } | PlaceResult::Tied)
    }
}

/// Tic-tac-toe engine for one window, one process.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
    tally: SessionTally,
}

impl GameEngine {
    /// Creates an engine with a fresh game, X to move, and zeroed tallies.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new game with X to move. Tallies are kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.state = GameState::new(Player::X);
        info!("New game, X starts");
    }

    /// Starts a new game opened by whoever was not due to move.
    #[instrument(skip(self))]
    pub fn switch_starting_side(&mut self) {
        let first = self.state.current_player().opponent();
        self.state = GameState::new(first);
        info!(%first, "Switched sides, new game");
    }

    /// Places the current player's mark at (row, col).
    ///
    /// Returns [`PlaceResult::Ignored`] without touching any state when the
    /// game is over, the cell is occupied, or the address is off the board.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn place(&mut self, row: usize, col: usize) -> PlaceResult {
        if self.state.outcome().is_terminal() {
            debug!("Game is over, click ignored");
            return PlaceResult::Ignored;
        }
        let Some(pos) = Position::new(row, col) else {
            debug!("Off the board, click ignored");
            return PlaceResult::Ignored;
        };
        if !self.state.board().is_empty(pos) {
            debug!("Cell occupied, click ignored");
            return PlaceResult::Ignored;
        }

        let mover = *self.state.current_player();
        self.state.mark(pos);

        if rules::completes_line(self.state.board(), pos, *self.state.free_count()) {
            self.end(Outcome::WonBy(mover));
            return PlaceResult::Won { player: mover };
        }

        if *self.state.free_count() == 0 {
            debug_assert!(rules::is_full(self.state.board()));
            self.end(Outcome::Tie);
            return PlaceResult::Tied;
        }

        self.state.pass_turn();
        let next = *self.state.current_player();
        debug!(%mover, %next, free = *self.state.free_count(), "Mark placed");
        PlaceResult::Placed { mark: mover, next }
    }

    /// Places at a named cell. Same rules as [`GameEngine::place`].
    pub fn place_at(&mut self, pos: Position) -> PlaceResult {
        self.place(pos.row(), pos.col())
    }

    /// Counts one elapsed second. Ignored once the game is decided.
    pub fn tick(&mut self) {
        if self.state.outcome().is_terminal() {
            return;
        }
        self.state.count_second();
    }

    /// Copy of the current game and tallies.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.state, self.tally)
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Session tallies.
    pub fn tally(&self) -> &SessionTally {
        &self.tally
    }

    /// Returns true once the current game has been decided.
    pub fn is_over(&self) -> bool {
        self.state.outcome().is_terminal()
    }

    fn end(&mut self, outcome: Outcome) {
        self.state.finish(outcome);
        self.tally.record(outcome);
        info!(
            ?outcome,
            seconds = *self.state.elapsed_seconds(),
            x_wins = *self.tally.x_wins(),
            o_wins = *self.tally.o_wins(),
            ties = *self.tally.ties(),
            "Game over"
        );
        debug!(board = %self.state.board().display(), "Final board");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;

    fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) -> Vec<PlaceResult> {
        moves.iter().map(|&(r, c)| engine.place(r, c)).collect()
    }

    #[test]
    fn test_first_move_passes_turn() {
        let mut engine = GameEngine::new();
        let result = engine.place(1, 1);
        assert_eq!(
            result,
            PlaceResult::Placed {
                mark: Player::X,
                next: Player::O
            }
        );
        assert_eq!(*engine.state().free_count(), 8);
        assert_eq!(engine.state().board().at(1, 1), Some(Cell::Occupied(Player::X)));
    }

    #[test]
    fn test_occupied_cell_ignored() {
        let mut engine = GameEngine::new();
        engine.place(0, 0);
        let before = engine.snapshot();
        assert_eq!(engine.place(0, 0), PlaceResult::Ignored);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.place(3, 1), PlaceResult::Ignored);
        assert_eq!(engine.place(0, 7), PlaceResult::Ignored);
        assert_eq!(*engine.state().free_count(), 9);
    }

    #[test]
    fn test_win_records_tally_and_freezes_clock() {
        let mut engine = GameEngine::new();
        engine.tick();
        let results = play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(results[4], PlaceResult::Won { player: Player::X });
        assert_eq!(*engine.tally().x_wins(), 1);
        assert_eq!(*engine.state().outcome(), Outcome::WonBy(Player::X));

        engine.tick();
        engine.tick();
        assert_eq!(*engine.state().elapsed_seconds(), 1);
    }

    #[test]
    fn test_winner_stays_current_after_game() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(*engine.state().current_player(), Player::X);

        // Switching after X won hands the opening move to O.
        engine.switch_starting_side();
        assert_eq!(*engine.state().current_player(), Player::O);
    }

    #[test]
    fn test_new_game_keeps_tally() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        engine.new_game();
        assert_eq!(*engine.tally().x_wins(), 1);
        assert_eq!(*engine.state().free_count(), 9);
        assert_eq!(*engine.state().elapsed_seconds(), 0);
        assert_eq!(*engine.state().outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_placed_mark_for_each_result() {
        assert_eq!(PlaceResult::Ignored.placed_mark(Player::X), None);
        assert_eq!(PlaceResult::Tied.placed_mark(Player::X), Some(Player::X));
        assert_eq!(
            PlaceResult::Won { player: Player::O }.placed_mark(Player::X),
            Some(Player::O)
        );
        assert!(PlaceResult::Tied.is_game_over());
        assert!(!PlaceResult::Ignored.is_game_over());
    }
}
