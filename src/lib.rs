mod board;
mod solver;

pub use board::{Board, BoardError, Direction};
pub use solver::{SearchStats, SolveError, Solver};
pub mod config;
pub mod input;
pub mod min_pq;
pub mod report;
