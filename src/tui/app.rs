//! Application state: the engine plus what only the window cares about.

use crate::audio::{AudioNotifier, SoundCue};
use crate::games::tictactoe::{GameEngine, Position, Snapshot};
use tracing::{debug, info, instrument};

use super::input::{Command, move_cursor};

/// What the event loop should do with the game timer after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerControl {
    /// Leave it as it is.
    Keep,
    /// Count again from zero.
    Restart,
    /// The game ended; stop ticking.
    Stop,
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    audio: Box<dyn AudioNotifier>,
    should_quit: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("engine", &self.engine)
            .field("cursor", &self.cursor)
            .field("should_quit", &self.should_quit)
            .finish()
    }
}

impl App {
    /// Creates the application with a fresh engine.
    pub fn new(audio: Box<dyn AudioNotifier>) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            audio,
            should_quit: false,
        }
    }

    /// Copy of the engine state for drawing.
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Set once Quit was chosen.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a command from the menu, the board or the keyboard.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> TimerControl {
        match command {
            Command::NewGame => {
                self.engine.new_game();
                TimerControl::Restart
            }
            Command::SwitchSides => {
                self.engine.switch_starting_side();
                TimerControl::Restart
            }
            Command::Quit => {
                info!("Quit requested");
                self.should_quit = true;
                TimerControl::Keep
            }
            Command::Place(pos) => {
                self.cursor = pos;
                self.place(pos)
            }
            Command::PlaceAtCursor => self.place(self.cursor),
            Command::MoveCursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
                TimerControl::Keep
            }
        }
    }

    /// Forwards one timer tick to the engine.
    pub fn tick(&mut self) {
        self.engine.tick();
    }

    fn place(&mut self, pos: Position) -> TimerControl {
        let mover = *self.engine.state().current_player();
        let result = self.engine.place_at(pos);
        debug!(?result, %pos, "Placement");

        for cue in SoundCue::for_result(result, mover) {
            self.audio.play(cue);
        }

        if result.is_game_over() {
            TimerControl::Stop
        } else {
            TimerControl::Keep
        }
    }
}
