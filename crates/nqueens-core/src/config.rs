//! Solver configuration.

use crate::error::{SearchError, SearchResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Search engine used for one-shot solving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Best-first search over placements
    #[default]
    AStar,
    /// Depth-first search, most-available-squares first
    Backtracking,
}

impl Engine {
    /// Get all engines
    pub fn all() -> &'static [Engine] {
        &[Engine::AStar, Engine::Backtracking]
    }

    /// The engine after this one, wrapping around
    pub fn next(&self) -> Engine {
        match self {
            Engine::AStar => Engine::Backtracking,
            Engine::Backtracking => Engine::AStar,
        }
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Engine::AStar => write!(f, "astar"),
            Engine::Backtracking => write!(f, "backtracking"),
        }
    }
}

impl FromStr for Engine {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Engine::AStar),
            "backtracking" | "backtrack" | "dfs" => Ok(Engine::Backtracking),
            _ => Err(SearchError::UnknownEngine(s.to_string())),
        }
    }
}

/// Side length of a square board, always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Largest board the front-ends offer.
    ///
    /// One-shot solves run on the UI thread; both engines finish boards up to
    /// this size well within a second.
    pub const MAX: usize = 24;

    pub fn new(size: usize) -> SearchResult<Self> {
        if size == 0 || size > Self::MAX {
            return Err(SearchError::InvalidBoardSize(size));
        }
        Ok(Self(size))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// One size larger, saturating at the maximum
    pub fn grow(&self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }

    /// One size smaller, saturating at 1
    pub fn shrink(&self) -> Self {
        Self(self.0.saturating_sub(1).max(1))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(8)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = SearchError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Settings consumed by [`crate::Solver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    pub engine: Engine,
    pub board_size: BoardSize,
}
