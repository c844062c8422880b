//! Reads puzzles written as a dimension `N` followed by `N * N` tiles in
//! row-major order, all separated by whitespace. `0` is the blank.

use crate::board::{Board, BoardError};
use std::io::{self, Read};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("`{token}` is not a non-negative integer")]
    InvalidNumber { token: String },
    #[error("dimension {0} is not supported")]
    InvalidDimension(usize),
    #[error("expected {expected} tiles after the dimension, found {found}")]
    TileCount { expected: usize, found: usize },
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
    #[error("could not read puzzle")]
    Io(#[from] io::Error),
}

pub fn parse_board(text: &str) -> Result<Board, ParseError> {
    let mut tokens = text.split_whitespace();

    let size: usize = match tokens.next() {
        Some(token) => parse_number(token)?,
        None => return Err(ParseError::Empty),
    };
    let cells = match size.checked_mul(size) {
        Some(cells) if size > 0 => cells,
        _ => return Err(ParseError::InvalidDimension(size)),
    };

    let tiles = tokens
        .map(parse_number::<u32>)
        .collect::<Result<Vec<_>, _>>()?;
    if tiles.len() != cells {
        return Err(ParseError::TileCount {
            expected: cells,
            found: tiles.len(),
        });
    }

    Ok(Board::from_tiles(size, tiles)?)
}

pub fn read_board<R: Read>(mut reader: R) -> Result<Board, ParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_board(&text)
}

fn parse_number<T: std::str::FromStr>(token: &str) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        token: token.to_string(),
    })
}
