//! Command-line interface for tictactoe_tui.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;

/// Tic-tac-toe for two players sharing one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Two-player tic-tac-toe with a game timer and session tallies", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing xSound.wav, oSound.wav, winSound.wav and tieSound.wav
    #[arg(long)]
    pub assets_dir: Option<PathBuf>,

    /// Do not open the audio device
    #[arg(long)]
    pub mute: bool,

    /// Where to write logs (the terminal is taken by the board)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Game timer period in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,
}

impl Cli {
    /// Settings given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            assets_dir: self.assets_dir.clone(),
            mute: self.mute,
            log_file: self.log_file.clone(),
            tick_ms: self.tick_ms,
        }
    }
}
