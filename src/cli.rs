//! Command-line interface for gridlock.

use clap::{Parser, Subcommand};
use gridlock::{GameMode, Mark};

/// Gridlock - tic-tac-toe on 3x3, 5x5 and 7x7 boards
#[derive(Parser, Debug)]
#[command(name = "gridlock")]
#[command(about = "Tic-tac-toe with a depth-bounded alpha-beta opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "gridlock.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui {
        /// Board side length: 3, 5 or 7
        #[arg(short, long)]
        size: Option<usize>,

        /// Game mode: two-player or versus-computer
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Your mark when playing the computer: X or O
        #[arg(long)]
        mark: Option<Mark>,
    },

    /// Let the engine play both sides
    SelfPlay {
        /// Board side length: 3, 5 or 7
        #[arg(short, long)]
        size: Option<usize>,

        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,
    },

    /// Ask the engine for a move on a given board
    Suggest {
        /// Board text, rows separated by '/', e.g. "XX./OO./..."
        #[arg(short, long)]
        board: String,

        /// Mark to move: X or O
        #[arg(short, long)]
        mark: Mark,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },
}
