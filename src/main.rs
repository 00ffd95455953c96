//! Gridlock - Unified CLI
//!
//! Terminal play, engine self-play and one-shot move suggestions.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use gridlock::{
    Board, BoardSize, GameMode, GameOutcome, GameSettings, Mark, choose_move, decide, evaluate,
};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { size, mode, mark } => {
            let settings = resolve_settings(&cli.config, size, mode, mark)?;
            tui::run_tui(settings)
        }
        Command::SelfPlay { size, games } => {
            initialize_tracing();
            let settings = resolve_settings(&cli.config, size, None, None)?;
            run_self_play(*settings.board_size(), games)
        }
        Command::Suggest { board, mark, json } => {
            initialize_tracing();
            run_suggest(&board, mark, json)
        }
    }
}

/// Loads the settings file and applies command-line overrides.
#[instrument]
fn resolve_settings(
    path: &Path,
    size: Option<usize>,
    mode: Option<GameMode>,
    mark: Option<Mark>,
) -> Result<GameSettings> {
    let mut settings = GameSettings::load_or_default(path)?;
    if let Some(size) = size {
        settings = settings.with_board_size(BoardSize::try_from(size)?);
    }
    if let Some(mode) = mode {
        settings = settings.with_mode(mode);
    }
    if let Some(mark) = mark {
        settings = settings.with_player_mark(mark);
    }
    Ok(settings)
}

/// Plays `games` engine-versus-engine games and prints each result.
#[instrument]
fn run_self_play(size: BoardSize, games: u32) -> Result<()> {
    info!("Starting self-play");

    let mut tally = Tally::default();
    for game in 1..=games {
        let mut board = Board::new(size);
        let mut to_move = Mark::X;
        let outcome = loop {
            let outcome = evaluate(&board);
            if outcome.is_terminal() {
                break outcome;
            }
            choose_move(&mut board, to_move)
                .context("Engine found no move on an unfinished board")?;
            to_move = to_move.opponent();
        };

        tally.record(outcome)?;
        info!(game, %outcome, "Game finished");
        println!("Game {} ({}): {}\n{}\n", game, size, outcome, board);
    }

    println!("{}", tally);
    Ok(())
}

/// Results of a self-play run.
#[derive(Debug, Default, PartialEq, Eq, derive_more::Display)]
#[display("X wins: {x_wins}  O wins: {o_wins}  Ties: {ties}")]
struct Tally {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl Tally {
    /// Counts one finished game.
    fn record(&mut self, outcome: GameOutcome) -> Result<()> {
        match outcome {
            GameOutcome::Won(Mark::X) => self.x_wins += 1,
            GameOutcome::Won(Mark::O) => self.o_wins += 1,
            GameOutcome::Tie => self.ties += 1,
            GameOutcome::InProgress => anyhow::bail!("Cannot tally an unfinished game"),
        }
        Ok(())
    }
}

/// Parses a board, lets the engine move for `mark` and prints the decision.
#[instrument]
fn run_suggest(text: &str, mark: Mark, json: bool) -> Result<()> {
    let mut board: Board = text.parse().context("Failed to parse board")?;
    let Some(decision) = decide(&mut board, mark) else {
        anyhow::bail!("No move available: {}", evaluate(&board));
    };
    info!(coord = %decision.coord, reason = %decision.reason, "Engine decided");

    if json {
        let report = serde_json::json!({
            "mark": mark,
            "decision": decision,
            "outcome": evaluate(&board),
            "board": board.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} plays {} ({})", mark, decision.coord, decision.reason);
        println!(
            "nodes: {}  cutoffs: {}",
            decision.stats.nodes, decision.stats.cutoffs
        );
        println!("{}", board);
        println!("{}", evaluate(&board));
    }
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_finished_games() {
        let mut tally = Tally::default();
        tally.record(GameOutcome::Won(Mark::X)).unwrap();
        tally.record(GameOutcome::Tie).unwrap();
        tally.record(GameOutcome::Tie).unwrap();
        assert_eq!(tally.to_string(), "X wins: 1  O wins: 0  Ties: 2");
    }

    #[test]
    fn test_tally_rejects_unfinished_game() {
        let mut tally = Tally::default();
        assert!(tally.record(GameOutcome::InProgress).is_err());
        assert_eq!(tally, Tally::default());
    }
}
