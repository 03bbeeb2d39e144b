//! N-Queens solving on top of two reusable search kernels.
//!
//! - [`search::astar`]: best-first search over any [`GraphTools`] graph
//! - [`search::backtrack`]: depth-first search over any [`Problem`], either run
//!   to completion or advanced one [`Step`] at a time
//! - [`queens`]: the N-Queens model wired into both engines
//! - [`board`]: square identifiers and board snapshots for front-ends

pub mod board;
pub mod config;
pub mod error;
pub mod queens;
pub mod search;

pub use board::{
    BoardDescriptor, BoardState, RowDescriptor, SquareColor, SquareContent, SquareDescriptor,
    SquareId, SquareIdCache,
};
pub use config::{BoardSize, Engine, SolverConfig};
pub use error::{SearchError, SearchResult};
pub use queens::{
    is_conflict_free, solve, solve_incrementally, Coordinates, GraphNode, QueensStep, Solver,
};
pub use search::{GraphTools, Problem, Step};
