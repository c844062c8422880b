use clap::Parser;
use std::{env, path::PathBuf};

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Finds a shortest solution for an N×N sliding-tile puzzle.
#[derive(Parser, Debug)]
#[command(name = "tile-puzzle", version)]
pub struct Cli {
    /// Puzzle file: the dimension N followed by N*N tiles, 0 for the blank.
    /// Read from stdin when omitted.
    pub input: Option<PathBuf>,

    /// Solve a random board of this dimension instead of reading one.
    #[arg(long, value_name = "N", conflicts_with = "input",
          value_parser = clap::value_parser!(u8).range(1..))]
    pub random: Option<u8>,

    /// Build the random board by walking the blank STEPS moves away from
    /// the goal, so it is always solvable.
    #[arg(long, value_name = "STEPS", requires = "random")]
    pub scramble: Option<usize>,

    /// Seed for the random board generator.
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Also print the blank moves of the solution.
    #[arg(long)]
    pub directions: bool,

    /// Tracing filter directive. Falls back to RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PuzzleSource {
    File(PathBuf),
    Stdin,
    Random {
        dimension: usize,
        scramble: Option<usize>,
        seed: Option<u64>,
    },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub source: PuzzleSource,
    pub show_directions: bool,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Self {
        let source = match (cli.random, cli.input) {
            (Some(dimension), _) => PuzzleSource::Random {
                dimension: usize::from(dimension),
                scramble: cli.scramble,
                seed: cli.seed,
            },
            (None, Some(path)) => PuzzleSource::File(path),
            (None, None) => PuzzleSource::Stdin,
        };

        let log_level = cli
            .log_level
            .or_else(|| env::var("RUST_LOG").ok())
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            source,
            show_directions: cli.directions,
            log_level,
        }
    }
}
