//! Board snapshots for renderers.
//!
//! Translates queen coordinates into per-square descriptors (identifier,
//! color, content) and tracks a manually edited board.

use crate::queens::Coordinates;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable identity of a square on a board of a given size
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SquareId {
    pub row: usize,
    pub column: usize,
    /// `"row/column"`
    pub key: String,
    /// `(row - column, row + column + board_size)`; the ranges never overlap,
    /// so one comparison covers both diagonals
    pub diagonals: (isize, isize),
}

impl SquareId {
    pub fn new(row: usize, column: usize, board_size: usize) -> Self {
        let (r, c, n) = (row as isize, column as isize, board_size as isize);
        Self {
            row,
            column,
            key: format!("{}/{}", row, column),
            diagonals: (r - c, r + c + n),
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.row, self.column)
    }

    fn shares_diagonal(&self, other: &SquareId) -> bool {
        let (a, b) = self.diagonals;
        let (c, d) = other.diagonals;
        a == c || a == d || b == c || b == d
    }
}

/// Interns square ids for one board size; owned by a single session
#[derive(Debug, Clone, Default)]
pub struct SquareIdCache {
    board_size: usize,
    ids: HashMap<Coordinates, SquareId>,
}

impl SquareIdCache {
    pub fn new(board_size: usize) -> Self {
        Self { board_size, ids: HashMap::new() }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn get(&mut self, row: usize, column: usize) -> &SquareId {
        let board_size = self.board_size;
        self.ids
            .entry(Coordinates::new(row, column))
            .or_insert_with(|| SquareId::new(row, column, board_size))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SquareColor {
    Black,
    White,
}

impl SquareColor {
    pub fn of(row: usize, column: usize) -> Self {
        if (column + row % 2) % 2 == 1 {
            SquareColor::Black
        } else {
            SquareColor::White
        }
    }
}

/// What a square shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareContent {
    /// Free to take a queen
    Empty,
    Queen,
    /// Attacked by a queen
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareDescriptor {
    pub square_id: SquareId,
    pub color: SquareColor,
    pub content: SquareContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowDescriptor {
    pub index: usize,
    pub squares: Vec<SquareDescriptor>,
}

/// Full snapshot of a board, row by row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDescriptor {
    pub rows: Vec<RowDescriptor>,
}

impl BoardDescriptor {
    /// Render as text: `Q` queen, `x` free square, `.` attacked square
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let line: Vec<&str> = row
                .squares
                .iter()
                .map(|square| match square.content {
                    SquareContent::Queen => "Q",
                    SquareContent::Empty => "x",
                    SquareContent::Blocked => ".",
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

/// Queens on a board being edited by hand
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardState {
    queens: Vec<SquareId>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lift engine output onto a board of `board_size`
    pub fn from_solution(queens: &[Coordinates], board_size: usize) -> Self {
        Self {
            queens: queens
                .iter()
                .map(|q| SquareId::new(q.row, q.column, board_size))
                .collect(),
        }
    }

    pub fn queen_coordinates(&self) -> Vec<Coordinates> {
        self.queens.iter().map(SquareId::coordinates).collect()
    }

    pub fn queen_count(&self) -> usize {
        self.queens.len()
    }

    pub fn clear(&mut self) {
        self.queens.clear();
    }

    pub fn content(&self, square: &SquareId) -> SquareContent {
        if self.queens.iter().any(|q| q == square) {
            SquareContent::Queen
        } else if self.is_blocked(square) {
            SquareContent::Blocked
        } else {
            SquareContent::Empty
        }
    }

    fn is_blocked(&self, square: &SquareId) -> bool {
        self.queens.iter().any(|q| {
            q.column == square.column || q.row == square.row || q.shares_diagonal(square)
        })
    }

    /// Place a queen on an empty square or lift one off; blocked squares are ignored.
    ///
    /// Returns the content the square had before the toggle.
    pub fn toggle(&mut self, square: &SquareId) -> SquareContent {
        let content = self.content(square);
        match content {
            SquareContent::Empty => self.queens.push(square.clone()),
            SquareContent::Queen => self.queens.retain(|q| q != square),
            SquareContent::Blocked => {}
        }
        content
    }

    /// Snapshot for rendering, interning ids through `cache`
    pub fn describe(&self, cache: &mut SquareIdCache) -> BoardDescriptor {
        let size = cache.board_size();
        let rows = (0..size)
            .map(|index| RowDescriptor {
                index,
                squares: (0..size)
                    .map(|column| {
                        let square_id = cache.get(index, column).clone();
                        SquareDescriptor {
                            color: SquareColor::of(index, column),
                            content: self.content(&square_id),
                            square_id,
                        }
                    })
                    .collect(),
            })
            .collect();
        BoardDescriptor { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_id() {
        let id = SquareId::new(2, 5, 8);
        assert_eq!(id.key, "2/5");
        assert_eq!(id.diagonals, (-3, 15));
        assert_eq!(id.coordinates(), Coordinates::new(2, 5));
    }

    #[test]
    fn test_cache_interns() {
        let mut cache = SquareIdCache::new(4);
        let first = cache.get(1, 2).clone();
        let again = cache.get(1, 2).clone();
        assert_eq!(first, again);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_square_colors_alternate() {
        assert_eq!(SquareColor::of(0, 0), SquareColor::White);
        assert_eq!(SquareColor::of(0, 1), SquareColor::Black);
        assert_eq!(SquareColor::of(1, 0), SquareColor::Black);
        assert_eq!(SquareColor::of(1, 1), SquareColor::White);
    }

    #[test]
    fn test_toggle_place_and_remove() {
        let mut cache = SquareIdCache::new(4);
        let mut board = BoardState::new();
        let square = cache.get(0, 1).clone();

        assert_eq!(board.toggle(&square), SquareContent::Empty);
        assert_eq!(board.queen_count(), 1);
        assert_eq!(board.toggle(&square), SquareContent::Queen);
        assert_eq!(board.queen_count(), 0);
    }

    #[test]
    fn test_toggle_ignores_blocked() {
        let mut cache = SquareIdCache::new(4);
        let mut board = BoardState::new();
        board.toggle(&cache.get(0, 0).clone());

        for (row, column) in [(0, 3), (3, 0), (2, 2)] {
            let square = cache.get(row, column).clone();
            assert_eq!(board.toggle(&square), SquareContent::Blocked);
        }
        assert_eq!(board.queen_count(), 1);
    }

    #[test]
    fn test_anti_diagonal_blocks() {
        let mut cache = SquareIdCache::new(4);
        let mut board = BoardState::new();
        board.toggle(&cache.get(0, 3).clone());
        assert_eq!(board.content(&cache.get(3, 0).clone()), SquareContent::Blocked);
        assert_eq!(board.content(&cache.get(1, 0).clone()), SquareContent::Empty);
    }

    #[test]
    fn test_describe_solution() {
        let queens = crate::queens::solve(4).unwrap();
        let board = BoardState::from_solution(&queens, 4);
        let descriptor = board.describe(&mut SquareIdCache::new(4));

        assert_eq!(descriptor.rows.len(), 4);
        let queen_count = descriptor
            .rows
            .iter()
            .flat_map(|r| &r.squares)
            .filter(|s| s.content == SquareContent::Queen)
            .count();
        assert_eq!(queen_count, 4);
        // a full solution leaves nothing empty
        assert!(descriptor
            .rows
            .iter()
            .flat_map(|r| &r.squares)
            .all(|s| s.content != SquareContent::Empty));
    }

    #[test]
    fn test_descriptor_text() {
        let mut cache = SquareIdCache::new(3);
        let mut board = BoardState::new();
        board.toggle(&cache.get(0, 0).clone());
        let text = board.describe(&mut cache).to_text();
        assert_eq!(text, "Q . .\n. . x\n. x .\n");
    }

    #[test]
    fn test_descriptor_serializes() {
        let descriptor = BoardState::new().describe(&mut SquareIdCache::new(2));
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["rows"][0]["squares"][1]["color"], "black");
        assert_eq!(json["rows"][0]["squares"][1]["content"], "Empty");
        assert_eq!(json["rows"][1]["squares"][0]["square_id"]["key"], "1/0");
    }
}
