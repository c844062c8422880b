use crate::solver::Solver;
use crossterm::style::{style, Attribute, Color, Stylize};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Color the heading; only sensible when writing to a terminal.
    pub colored: bool,
    /// List the blank moves after the heading.
    pub directions: bool,
}

/// Writes the move count and every board on the solution path, each board
/// followed by a blank line, or a single line saying there is no solution.
pub fn write_report<W: Write>(out: &mut W, solver: &Solver, options: ReportOptions) -> io::Result<()> {
    let (heading, color) = match solver.moves() {
        Some(moves) => (format!("Minimum number of moves = {}", moves), Color::Green),
        None => ("No solution possible".to_string(), Color::Red),
    };

    if options.colored {
        writeln!(out, "{}", style(heading).with(color).attribute(Attribute::Bold))?;
    } else {
        writeln!(out, "{}", heading)?;
    }

    if options.directions {
        if let Some(directions) = solver.directions() {
            let moves: Vec<String> = directions.iter().map(|d| d.to_string()).collect();
            writeln!(out, "Moves: {}", moves.join(" "))?;
        }
    }

    for board in solver.solution().unwrap_or_default() {
        writeln!(out, "{}", board)?;
    }
    Ok(())
}
