//! Two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Games**: [`GameEngine`] owns the board, turn, outcome, game clock and
//!   session tallies. It is pure and synchronous, so it can be driven
//!   headless in tests.
//! - **Audio**: [`AudioNotifier`] plays the four [`SoundCue`]s, fire-and-forget.
//! - **Config**: [`AppConfig`] from an optional TOML file plus [`Cli`] flags.
//! - **TUI**: [`run_tui`] draws the board and feeds clicks, menu commands and
//!   timer ticks into the engine.
//!
//! # Example
//!
//! ```
//! use tictactoe_tui::{GameEngine, PlaceResult, Player};
//!
//! let mut engine = GameEngine::new();
//! assert_eq!(
//!     engine.place(1, 1),
//!     PlaceResult::Placed { mark: Player::X, next: Player::O }
//! );
//! assert_eq!(engine.place(1, 1), PlaceResult::Ignored);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod audio;
mod cli;
mod config;
mod games;
mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, GameEngine, GameState, Mark, Outcome, PlaceResult, Player, Position,
    SessionTally, Snapshot, rules,
};

// Crate-level exports - Audio
pub use audio::{AudioError, AudioNotifier, SilentAudio, SoundCue, open_notifier};
#[cfg(feature = "audio")]
pub use audio::RodioAudio;

// Crate-level exports - Configuration
pub use cli::Cli;
pub use config::{AppConfig, ConfigError, Overrides};

// Crate-level exports - Terminal UI
pub use tui::{
    App, Command, GameTimer, ScreenLayout, TimerControl, command_for_key, run as run_tui,
    status_line, tally_line, time_line,
};
