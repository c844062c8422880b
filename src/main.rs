use std::{
    fs::File,
    io::{self, BufReader},
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use rand::{rngs::StdRng, SeedableRng};
use tile_puzzle::{
    config::{AppConfig, Cli, PuzzleSource},
    input::read_board,
    report::{write_report, ReportOptions},
    Board, Solver,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let config = AppConfig::from_cli(Cli::parse());

    tracing_subscriber::registry()
        .with(EnvFilter::new(config.log_level.clone()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let board = load_board(&config.source)?;
    tracing::info!(
        dimension = board.dimension(),
        manhattan = board.manhattan(),
        hamming = board.hamming(),
        "Puzzle loaded"
    );

    let solver = Solver::new(board).context("search aborted")?;

    let stdout = io::stdout();
    let options = ReportOptions {
        colored: stdout.is_tty(),
        directions: config.show_directions,
    };
    write_report(&mut stdout.lock(), &solver, options).context("could not write solution")?;
    Ok(())
}

fn load_board(source: &PuzzleSource) -> Result<Board> {
    match source {
        PuzzleSource::File(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open {}", path.display()))?;
            read_board(BufReader::new(file))
                .with_context(|| format!("could not load puzzle from {}", path.display()))
        }
        PuzzleSource::Stdin => {
            read_board(io::stdin().lock()).context("could not load puzzle from stdin")
        }
        PuzzleSource::Random {
            dimension,
            scramble,
            seed,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            let board = match scramble {
                Some(steps) => Board::scrambled(*dimension, *steps, &mut rng),
                None => Board::shuffled(*dimension, &mut rng),
            };
            tracing::debug!(dimension, ?scramble, ?seed, "Generated random puzzle");
            Ok(board)
        }
    }
}
