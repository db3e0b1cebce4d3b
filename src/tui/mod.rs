//! Terminal window for the game.
//!
//! One task owns the [`App`]. Terminal events arrive over a channel from a
//! reader thread, timer ticks from a [`GameTimer`]; both are handled in the
//! same `select!` loop so the engine only ever sees one caller at a time.

mod app;
mod input;
mod status;
mod timer;
mod ui;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

pub use app::{App, TimerControl};
pub use input::{Command, command_for_key};
pub use status::{status_line, tally_line, time_line};
pub use timer::GameTimer;
pub use ui::ScreenLayout;

use input::command_for;
use ui::draw;

use crate::audio::open_notifier;
use crate::config::AppConfig;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the player quits.
///
/// The terminal is restored before returning, also on error.
#[instrument(skip_all)]
pub async fn run(config: &AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe");

    let audio = open_notifier(config.assets_dir(), *config.mute());
    let mut app = App::new(audio);
    let mut timer = GameTimer::new(config.tick_interval());

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    spawn_event_reader(event_tx);

    let res = event_loop(&mut terminal, &mut app, &mut timer, &mut event_rx).await;

    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(tally = ?app.snapshot().tally(), "Exiting");
    res
}

async fn event_loop(
    terminal: &mut Term,
    app: &mut App,
    timer: &mut GameTimer,
    events: &mut mpsc::UnboundedReceiver<io::Result<Event>>,
) -> Result<()> {
    let mut layout = ScreenLayout::new(Rect::default());

    loop {
        terminal.draw(|f| {
            layout = ScreenLayout::new(f.area());
            draw(f, &layout, &app.snapshot(), app.cursor());
        })?;

        tokio::select! {
            maybe_event = events.recv() => {
                let Some(event) = maybe_event else {
                    warn!("Input reader stopped");
                    return Ok(());
                };
                let event = event.context("Failed to read terminal event")?;
                let Some(command) = command_for(&event, &layout) else {
                    continue;
                };
                match app.handle(command) {
                    TimerControl::Keep => {}
                    TimerControl::Restart => timer.restart(),
                    TimerControl::Stop => timer.stop(),
                }
                if app.should_quit() {
                    return Ok(());
                }
            }
            _ = timer.tick(), if timer.is_armed() => {
                app.tick();
            }
        }
    }
}

/// Forwards terminal events until the receiver goes away.
fn spawn_event_reader(tx: mpsc::UnboundedSender<io::Result<Event>>) {
    std::thread::spawn(move || {
        debug!("Input reader started");
        while !tx.is_closed() {
            match event::poll(Duration::from_millis(100)) {
                Ok(false) => continue,
                Ok(true) => {
                    if tx.send(event::read()).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.send(Err(e));
                    break;
                }
            }
        }
        debug!("Input reader finished");
    });
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
