//! Partial queen placements.

use serde::{Deserialize, Serialize};

/// A square on the board, zero-indexed from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub row: usize,
    pub column: usize,
}

impl Coordinates {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Index shared by squares on the same top-left to bottom-right diagonal
    pub fn diagonal(&self) -> isize {
        self.row as isize - self.column as isize
    }

    /// Index shared by squares on the same top-right to bottom-left diagonal
    pub fn anti_diagonal(&self) -> usize {
        self.row + self.column
    }

    /// Whether a queen here would attack `other` (or stand on it)
    pub fn conflicts_with(&self, other: &Coordinates) -> bool {
        self.row == other.row
            || self.column == other.column
            || self.diagonal() == other.diagonal()
            || self.anti_diagonal() == other.anti_diagonal()
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Queens placed so far, one per row from the top, plus every square a
/// further queen could still occupy.
///
/// Nodes are immutable; placing a queen derives a fresh node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphNode {
    board_size: usize,
    placed: Vec<Coordinates>,
    available: Vec<Coordinates>,
}

impl GraphNode {
    /// The root: no queens and every square of a `board_size` board open
    pub fn empty(board_size: usize) -> Self {
        let available = (0..board_size)
            .flat_map(|row| (0..board_size).map(move |column| Coordinates::new(row, column)))
            .collect();
        Self { board_size, placed: Vec::new(), available }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Queens in placement order, which is also row order
    pub fn placed_queens(&self) -> &[Coordinates] {
        &self.placed
    }

    /// Open squares in row-major order
    pub fn available_squares(&self) -> &[Coordinates] {
        &self.available
    }

    pub fn queen_count(&self) -> usize {
        self.placed.len()
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// Row the next queen goes on
    pub fn next_row(&self) -> usize {
        self.placed.last().map_or(0, |last| last.row + 1)
    }

    /// Derive the node with a queen added at `square`.
    ///
    /// `square` must be one of the available squares.
    pub fn place(&self, square: Coordinates) -> Self {
        debug_assert!(self.available.contains(&square));
        let mut placed = Vec::with_capacity(self.placed.len() + 1);
        placed.extend_from_slice(&self.placed);
        placed.push(square);

        let available = self
            .available
            .iter()
            .filter(|candidate| !square.conflicts_with(candidate))
            .copied()
            .collect();

        Self { board_size: self.board_size, placed, available }
    }

    /// One child per open square on the next row, left to right
    pub fn successors(&self) -> Vec<GraphNode> {
        let row = self.next_row();
        self.available
            .iter()
            .filter(|square| square.row == row)
            .map(|square| self.place(*square))
            .collect()
    }

    /// Every row holds a queen
    pub fn is_complete(&self) -> bool {
        self.queen_count() == self.board_size
    }
}

/// True when no two queens share a row, column, or diagonal
pub fn is_conflict_free(queens: &[Coordinates]) -> bool {
    queens
        .iter()
        .enumerate()
        .all(|(i, a)| queens[i + 1..].iter().all(|b| !a.conflicts_with(b)))
}
