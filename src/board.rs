use rand::{seq::SliceRandom, Rng};
use std::fmt;
use thiserror::Error;

/// Direction the blank travels when it swaps places with an adjacent tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Enumeration order used by [`Board::neighbors`].
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// `(row, col)` offset of the cell the blank moves into.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns the move that turns `from` into `to`, if they are one slide apart.
    pub fn between(from: &Board, to: &Board) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|&dir| from.slide(dir).as_ref() == Some(to))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Up => "Up",
            Direction::Down => "Down",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board has no cells")]
    Empty,
    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("expected {expected} tiles, found {found}")]
    WrongTileCount { expected: usize, found: usize },
    #[error("tile {tile} is out of range, largest allowed value is {max}")]
    TileOutOfRange { tile: u32, max: u32 },
    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u32 },
}

/// An immutable N×N sliding-tile configuration. `0` marks the blank.
///
/// Tiles are stored row-major; the blank position is cached since every
/// successor operation needs it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    blank_row: usize,
    blank_col: usize,
}

impl Board {
    /// Builds a board from its rows, checking that the grid is square and
    /// holds each of `0..N²` exactly once.
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self, BoardError> {
        let size = rows.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(BoardError::NotSquare {
                row,
                len: cells.len(),
                expected: size,
            });
        }
        Self::from_tiles(size, rows.into_iter().flatten().collect())
    }

    /// Builds a board from `size * size` row-major tiles.
    pub fn from_tiles(size: usize, tiles: Vec<u32>) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::Empty);
        }
        let cells = size * size;
        if tiles.len() != cells {
            return Err(BoardError::WrongTileCount {
                expected: cells,
                found: tiles.len(),
            });
        }

        let mut seen = vec![false; cells];
        for &tile in &tiles {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(BoardError::TileOutOfRange {
                    tile,
                    max: (cells - 1) as u32,
                })?;
            if *slot {
                return Err(BoardError::DuplicateTile { tile });
            }
            *slot = true;
        }

        // a full permutation of 0..cells always contains the blank
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or_default();
        Ok(Self {
            size,
            tiles,
            blank_row: blank / size,
            blank_col: blank % size,
        })
    }

    /// The solved configuration: tiles in order, blank in the last cell.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn goal(size: usize) -> Self {
        assert!(size > 0, "board dimension must be positive");
        let cells = size * size;
        let tiles = (1..cells as u32).chain(std::iter::once(0)).collect();

        Self {
            size,
            tiles,
            blank_row: size - 1,
            blank_col: size - 1,
        }
    }

    /// A uniformly random arrangement. Half of these have no solution.
    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut board = Self::goal(size);
        board.tiles.shuffle(rng);

        let blank = board.tiles.iter().position(|&t| t == 0).unwrap_or_default();
        board.blank_row = blank / size;
        board.blank_col = blank % size;
        board
    }

    /// Walks the blank `steps` random moves away from the goal, never
    /// immediately undoing the previous move. Always solvable in at most
    /// `steps` moves.
    pub fn scrambled<R: Rng + ?Sized>(size: usize, steps: usize, rng: &mut R) -> Self {
        let mut board = Self::goal(size);
        let mut last: Option<Direction> = None;

        for _ in 0..steps {
            let options: Vec<(Direction, Board)> = Direction::ALL
                .into_iter()
                .filter(|&dir| last.map_or(true, |l| dir != l.opposite()))
                .filter_map(|dir| board.slide(dir).map(|next| (dir, next)))
                .collect();

            match options.choose(rng) {
                Some((dir, next)) => {
                    last = Some(*dir);
                    board = next.clone();
                }
                None => break,
            }
        }

        board
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.size + col]
    }

    /// `(row, col)` of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank_row, self.blank_col)
    }

    /// Number of tiles out of place, blank excluded.
    pub fn hamming(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(i, &tile)| tile != 0 && tile as usize != i + 1)
            .count()
    }

    /// Sum of row and column offsets of every tile from its goal cell.
    pub fn manhattan(&self) -> usize {
        let mut distance = 0;
        for i in 0..self.size {
            for j in 0..self.size {
                let value = self.tile(i, j) as usize;
                if value != 0 {
                    let target_row = (value - 1) / self.size;
                    let target_col = (value - 1) % self.size;
                    distance += i.abs_diff(target_row);
                    distance += j.abs_diff(target_col);
                }
            }
        }
        distance
    }

    pub fn is_goal(&self) -> bool {
        self.manhattan() == 0
    }

    /// Swaps two adjacent non-blank tiles in row 0, or in row 1 when the
    /// blank sits in the first two cells of row 0. The result is solvable
    /// exactly when `self` is not.
    ///
    /// Boards smaller than 2×2 have no such pair and are returned as is.
    pub fn twin(&self) -> Self {
        if self.size < 2 {
            return self.clone();
        }

        let row = if self.blank_row == 0 && self.blank_col < 2 {
            1
        } else {
            0
        };
        let first = row * self.size;
        self.swapped(first, first + 1)
    }

    /// The board reached by moving the blank one cell in `dir`, or `None`
    /// when that cell lies outside the grid.
    pub fn slide(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.as_offset();

        let new_row = self.blank_row as isize + dr;
        let new_col = self.blank_col as isize + dc;
        let bound = self.size as isize;

        if new_row >= 0 && new_row < bound && new_col >= 0 && new_col < bound {
            let target = new_row as usize * self.size + new_col as usize;
            Some(self.swapped(self.blank_row * self.size + self.blank_col, target))
        } else {
            None
        }
    }

    /// All boards one blank move away, in left, right, up, down order.
    pub fn neighbors(&self) -> Vec<Self> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.slide(dir))
            .collect()
    }

    fn swapped(&self, a: usize, b: usize) -> Self {
        let mut board = self.clone();
        board.tiles.swap(a, b);

        for cell in [a, b] {
            if board.tiles[cell] == 0 {
                board.blank_row = cell / self.size;
                board.blank_col = cell % self.size;
            }
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.size) {
            for &val in row {
                write!(f, "{:3}", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn board(rows: &[&[u32]]) -> Board {
        Board::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_metrics_of_scrambled_board() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        assert_eq!(b.dimension(), 3);
        assert_eq!(b.hamming(), 5);
        assert_eq!(b.manhattan(), 10);
        assert!(!b.is_goal());
        assert_eq!(b.blank(), (1, 1));
    }

    #[test]
    fn test_goal_has_zero_distance() {
        for size in 1..=5 {
            let goal = Board::goal(size);
            assert_eq!(goal.hamming(), 0);
            assert_eq!(goal.manhattan(), 0);
            assert!(goal.is_goal());
            assert_eq!(goal.blank(), (size - 1, size - 1));
        }
        assert_eq!(Board::goal(3), board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]));
    }

    #[test]
    fn test_non_goal_boards_have_positive_distances() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let b = Board::shuffled(3, &mut rng);
            assert_eq!(b.hamming() == 0, b == Board::goal(3));
            assert_eq!(b.manhattan() == 0, b == Board::goal(3));
        }
    }

    #[test]
    fn test_new_rejects_malformed_grids() {
        assert_eq!(Board::new(vec![]), Err(BoardError::Empty));
        assert_eq!(
            Board::new(vec![vec![1, 2], vec![0]]),
            Err(BoardError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            Board::new(vec![vec![1, 2], vec![4, 0]]),
            Err(BoardError::TileOutOfRange { tile: 4, max: 3 })
        );
        assert_eq!(
            Board::new(vec![vec![1, 1], vec![2, 0]]),
            Err(BoardError::DuplicateTile { tile: 1 })
        );
        assert_eq!(
            Board::from_tiles(2, vec![1, 2, 0]),
            Err(BoardError::WrongTileCount {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_neighbor_counts_by_blank_position() {
        let corner = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        let edge = board(&[&[1, 0, 3], &[4, 2, 5], &[7, 8, 6]]);
        let center = board(&[&[1, 2, 3], &[4, 0, 5], &[7, 8, 6]]);

        assert_eq!(corner.neighbors().len(), 2);
        assert_eq!(edge.neighbors().len(), 3);
        assert_eq!(center.neighbors().len(), 4);
    }

    #[test]
    fn test_neighbors_are_left_right_up_down() {
        let center = board(&[&[1, 2, 3], &[4, 0, 5], &[7, 8, 6]]);
        let expected = vec![
            board(&[&[1, 2, 3], &[0, 4, 5], &[7, 8, 6]]),
            board(&[&[1, 2, 3], &[4, 5, 0], &[7, 8, 6]]),
            board(&[&[1, 0, 3], &[4, 2, 5], &[7, 8, 6]]),
            board(&[&[1, 2, 3], &[4, 8, 5], &[7, 0, 6]]),
        ];
        assert_eq!(center.neighbors(), expected);

        for (dir, next) in Direction::ALL.into_iter().zip(&expected) {
            assert_eq!(Direction::between(&center, next), Some(dir));
            assert_eq!(Direction::between(next, &center), Some(dir.opposite()));
        }
        assert_eq!(Direction::between(&center, &center), None);
    }

    #[test]
    fn test_neighbors_leave_receiver_untouched() {
        let b = board(&[&[1, 2, 3], &[4, 0, 5], &[7, 8, 6]]);
        let copy = b.clone();
        let _ = b.neighbors();
        let _ = b.twin();
        assert_eq!(b, copy);
    }

    #[test]
    fn test_neighbor_manhattan_changes_by_one() {
        let mut rng = StdRng::seed_from_u64(11);
        for size in 2..=5 {
            for _ in 0..50 {
                let b = Board::shuffled(size, &mut rng);
                for n in b.neighbors() {
                    assert_eq!(b.manhattan().abs_diff(n.manhattan()), 1, "{b}\n{n}");
                }
            }
        }
    }

    #[test]
    fn test_twin_swaps_first_row_when_blank_elsewhere() {
        let b = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]);
        assert_eq!(b.twin(), board(&[&[2, 1, 3], &[4, 5, 6], &[7, 8, 0]]));
        assert_eq!(b.twin().twin(), b);

        let b = board(&[&[1, 3], &[2, 0]]);
        assert_eq!(b.twin(), board(&[&[3, 1], &[2, 0]]));
        assert_eq!(b.twin().twin(), b);
    }

    #[test]
    fn test_twin_uses_second_row_when_blank_in_first_two_cells() {
        let b = board(&[&[1, 0, 3], &[4, 2, 5], &[7, 8, 6]]);
        assert_eq!(b.twin(), board(&[&[1, 0, 3], &[2, 4, 5], &[7, 8, 6]]));
        assert_eq!(b.twin().twin(), b);

        let b = board(&[&[0, 1], &[3, 2]]);
        assert_eq!(b.twin(), board(&[&[0, 1], &[2, 3]]));
        assert_eq!(b.twin().twin(), b);
        assert_eq!(b.twin().blank(), (0, 0));
    }

    #[test]
    fn test_twin_of_single_cell_is_itself() {
        let b = Board::goal(1);
        assert_eq!(b.twin(), b);
        assert!(b.neighbors().is_empty());
    }

    #[test]
    fn test_scrambled_stays_within_step_budget() {
        let mut rng = StdRng::seed_from_u64(3);
        let b = Board::scrambled(4, 0, &mut rng);
        assert!(b.is_goal());

        for steps in 1..20 {
            let b = Board::scrambled(4, steps, &mut rng);
            assert!(b.manhattan() <= steps);
        }
    }

    #[test]
    fn test_display_right_justifies_three_wide() {
        let b = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]);
        assert_eq!(b.to_string(), "  1  2  3\n  4  5  6\n  7  8  0\n");
        assert_eq!(Board::goal(4).to_string().lines().nth(3), Some(" 13 14 15  0"));
    }
}
