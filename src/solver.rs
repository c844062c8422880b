//! Best-first search over board configurations.
//!
//! Two searches run side by side: one from the initial board and one from
//! its twin. Swapping two tiles flips the permutation parity, so exactly one
//! of the pair can reach the goal. Whichever side gets there first decides
//! whether the puzzle is solvable, with no inversion counting needed.

use crate::board::{Board, Direction};
use crate::min_pq::{MinPq, PqError};
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("search frontier ran dry")]
    Frontier(#[from] PqError),
}

/// Counters collected while searching, for both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize,
    pub enqueued: usize,
    pub twin_expanded: usize,
    pub twin_enqueued: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

#[derive(Debug)]
struct SearchNode {
    board: Board,
    moves: usize,
    previous: Option<NodeId>,
}

/// Frontier entry. The priority is computed once on insertion; entries
/// compare by priority alone.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    priority: usize,
    node: NodeId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// One side of the search: every node ever created, addressed by index, and
/// the frontier of nodes not yet expanded.
#[derive(Debug)]
struct Search {
    nodes: Vec<SearchNode>,
    frontier: MinPq<Candidate>,
    expanded: usize,
}

impl Search {
    fn new(root: Board) -> Self {
        let mut search = Self {
            nodes: Vec::new(),
            frontier: MinPq::new(),
            expanded: 0,
        };
        search.push(root, 0, None);
        search
    }

    fn push(&mut self, board: Board, moves: usize, previous: Option<NodeId>) {
        let id = NodeId(self.nodes.len());
        let priority = moves + board.manhattan();

        self.nodes.push(SearchNode {
            board,
            moves,
            previous,
        });
        self.frontier.insert(Candidate { priority, node: id });
    }

    fn pop(&mut self) -> Result<NodeId, PqError> {
        self.frontier.delete_min().map(|candidate| candidate.node)
    }

    fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// Queues every neighbor of `id` except the board it was reached from.
    /// Longer cycles back to earlier ancestors are not filtered.
    fn expand(&mut self, id: NodeId) {
        let node = self.node(id);
        let moves = node.moves + 1;
        let previous = node.previous.map(|p| &self.node(p).board);

        let next: Vec<Board> = node
            .board
            .neighbors()
            .into_iter()
            .filter(|board| Some(board) != previous)
            .collect();

        trace!(moves, queued = next.len(), "expanding node");
        for board in next {
            self.push(board, moves, Some(id));
        }
        self.expanded += 1;
    }

    /// Boards from the root to `id`, inclusive.
    fn path(&self, id: NodeId) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.node(id).moves + 1);
        let mut current = Some(id);
        while let Some(id) = current {
            let node = self.node(id);
            path.push(node.board.clone());
            current = node.previous;
        }
        path.reverse();
        path
    }
}

/// Finds a shortest solution for a board, or proves there is none.
///
/// The search runs to completion inside [`Solver::new`]; the accessors only
/// report the outcome.
#[derive(Debug, Clone)]
pub struct Solver {
    solution: Option<Vec<Board>>,
    stats: SearchStats,
}

impl Solver {
    pub fn new(initial: Board) -> Result<Self, SolveError> {
        debug!(
            dimension = initial.dimension(),
            manhattan = initial.manhattan(),
            hamming = initial.hamming(),
            "starting search"
        );

        let twin = initial.twin();
        let mut main = Search::new(initial);
        let mut shadow = Search::new(twin);
        let mut solution = None;

        while !main.frontier.is_empty() {
            let m = main.pop()?;
            let t = shadow.pop()?;

            if main.node(m).board.is_goal() {
                solution = Some(main.path(m));
                break;
            }
            if shadow.node(t).board.is_goal() {
                break;
            }

            main.expand(m);
            shadow.expand(t);
        }

        let stats = SearchStats {
            expanded: main.expanded,
            enqueued: main.nodes.len(),
            twin_expanded: shadow.expanded,
            twin_enqueued: shadow.nodes.len(),
        };
        info!(
            solvable = solution.is_some(),
            moves = ?solution.as_ref().map(|path: &Vec<Board>| path.len() - 1),
            expanded = stats.expanded,
            enqueued = stats.enqueued,
            "search finished"
        );

        Ok(Self { solution, stats })
    }

    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Length of a shortest solution, `None` when the board is unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len() - 1)
    }

    /// Boards from the initial configuration to the goal, inclusive.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    /// The blank moves that walk the solution path.
    pub fn directions(&self) -> Option<Vec<Direction>> {
        self.solution.as_ref().map(|path| {
            path.windows(2)
                .filter_map(|pair| Direction::between(&pair[0], &pair[1]))
                .collect()
        })
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
