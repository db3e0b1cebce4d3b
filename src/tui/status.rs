//! Text for the status, tally and timer lines.

use crate::games::tictactoe::{GameState, Outcome, SessionTally};

/// Bottom line: whose turn it is, or how the game ended.
pub fn status_line(state: &GameState) -> String {
    let seconds = state.elapsed_seconds();
    match state.outcome() {
        Outcome::InProgress => format!("Player {}'s turn", state.current_player()),
        Outcome::WonBy(player) => {
            format!("Player {} wins with a time of: {} seconds!", player, seconds)
        }
        Outcome::Tie => format!("It's a tie! The game took: {} seconds.", seconds),
    }
}

/// Running win and tie totals.
pub fn tally_line(tally: &SessionTally) -> String {
    format!(
        "X-Wins: {} O-Wins: {} Ties: {}",
        tally.x_wins(),
        tally.o_wins(),
        tally.ties()
    )
}

/// Elapsed time of the current game.
pub fn time_line(state: &GameState) -> String {
    format!("Time: {} seconds", state.elapsed_seconds())
}
