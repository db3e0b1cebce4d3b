//! Tic-tac-toe game logic.

mod engine;
mod position;
pub mod rules;
mod types;

pub use engine::{GameEngine, PlaceResult};
pub use position::Position;
pub use types::{Board, Cell, GameState, Outcome, Player, SessionTally, Snapshot};

/// Alias for the symbol a player leaves in a cell.
pub type Mark = Player;
