//! N-Queens bound to both search engines.

mod node;

pub use node::{is_conflict_free, Coordinates, GraphNode};

use crate::config::{Engine, SolverConfig};
use crate::error::SearchResult;
use crate::search::{self, GraphTools, Problem, Step};

/// Backtracking view of the puzzle: least constrained children first
#[derive(Debug, Clone, Copy, Default)]
pub struct QueensProblem;

impl Problem for QueensProblem {
    type Node = GraphNode;

    fn is_solution(&self, node: &GraphNode) -> bool {
        node.is_complete()
    }

    fn sorted_successors(&self, node: &GraphNode) -> Vec<GraphNode> {
        let mut successors = node.successors();
        // stable, so equally open children keep their column order
        successors.sort_by(|a, b| b.available_count().cmp(&a.available_count()));
        successors
    }
}

/// A* view of the puzzle.
///
/// Costs are negated open-square counts, steering toward placements that keep
/// the most freedom. This is a best-first heuristic, not an admissible one.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueensGraph;

impl GraphTools for QueensGraph {
    type Node = GraphNode;
    type Key = Vec<Coordinates>;
    type Cost = i64;

    fn key(&self, node: &GraphNode) -> Vec<Coordinates> {
        node.placed_queens().to_vec()
    }

    fn is_goal(&self, node: &GraphNode) -> bool {
        node.is_complete()
    }

    fn distance(&self, _from: &GraphNode, to: &GraphNode) -> i64 {
        -(to.available_count() as i64)
    }

    fn estimate_goal_distance(&self, node: &GraphNode) -> i64 {
        -(node.available_count() as i64)
    }

    fn neighbors(&self, node: &GraphNode) -> Vec<GraphNode> {
        node.successors()
    }
}

/// Resumable N-Queens search exposing queen placements
#[derive(Debug)]
pub struct QueensStep {
    inner: Step<QueensProblem>,
}

impl QueensStep {
    pub fn is_final(&self) -> bool {
        self.inner.is_final()
    }

    /// Queens of the current candidate; `None` only when final without a solution
    pub fn candidate(&self) -> Option<&[Coordinates]> {
        self.inner.candidate().map(GraphNode::placed_queens)
    }

    /// The solution, once final and found
    pub fn solution(&self) -> Option<&[Coordinates]> {
        if self.is_final() {
            self.candidate()
        } else {
            None
        }
    }

    /// Advances taken since the search started
    pub fn steps(&self) -> usize {
        self.inner.advances()
    }

    pub fn board_size(&self) -> Option<usize> {
        self.inner.candidate().map(GraphNode::board_size)
    }

    /// Produce the next step; fails if this one is final
    pub fn advance(self) -> SearchResult<Self> {
        Ok(Self { inner: self.inner.advance()? })
    }

    /// Advance until final
    pub fn run_to_end(self) -> Self {
        Self { inner: self.inner.run_to_end() }
    }
}

/// Stateless N-Queens solver over the configured engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    engine: Engine,
}

impl Solver {
    /// Create a solver using the default engine
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(engine: Engine) -> Self {
        Self { engine }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self::with_engine(config.engine)
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// Place `board_size` non-attacking queens, or `None` if impossible
    pub fn solve(&self, board_size: usize) -> Option<Vec<Coordinates>> {
        let root = GraphNode::empty(board_size);
        let solution = match self.engine {
            Engine::AStar => search::search(root, &QueensGraph).pop(),
            Engine::Backtracking => search::resolve(root, &QueensProblem),
        };
        log::debug!(
            "solve: size={} engine={} found={}",
            board_size,
            self.engine,
            solution.is_some()
        );
        solution.map(|node| node.placed_queens().to_vec())
    }

    /// Start a step-by-step backtracking solve
    pub fn solve_incrementally(&self, board_size: usize) -> QueensStep {
        QueensStep {
            inner: search::resolve_incrementally(GraphNode::empty(board_size), QueensProblem),
        }
    }
}

/// Solve with the default engine
pub fn solve(board_size: usize) -> Option<Vec<Coordinates>> {
    Solver::new().solve(board_size)
}

/// Start an incremental solve
pub fn solve_incrementally(board_size: usize) -> QueensStep {
    Solver::new().solve_incrementally(board_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn assert_valid_solution(queens: &[Coordinates], board_size: usize) {
        assert_eq!(queens.len(), board_size);
        assert!(is_conflict_free(queens), "conflicting queens: {:?}", queens);
        assert!(queens.iter().all(|q| q.row < board_size && q.column < board_size));
    }

    #[test]
    fn test_solve_astar() {
        let solver = Solver::with_engine(Engine::AStar);
        for size in [1, 4, 5, 6, 8] {
            let queens = solver.solve(size).expect("solvable board");
            assert_valid_solution(&queens, size);
        }
    }

    #[test]
    fn test_solve_backtracking() {
        let solver = Solver::with_engine(Engine::Backtracking);
        for size in [1, 4, 5, 6, 8, 10] {
            let queens = solver.solve(size).expect("solvable board");
            assert_valid_solution(&queens, size);
        }
    }

    #[test]
    fn test_unsolvable_sizes() {
        for engine in Engine::all() {
            let solver = Solver::with_engine(*engine);
            assert_eq!(solver.solve(2), None);
            assert_eq!(solver.solve(3), None);
        }
    }

    #[test]
    fn test_solve_is_deterministic() {
        for engine in Engine::all() {
            let solver = Solver::with_engine(*engine);
            assert_eq!(solver.solve(8), solver.solve(8));
        }
    }

    #[test]
    fn test_zero_board_is_trivially_solved() {
        assert_eq!(solve(0), Some(Vec::new()));
    }

    #[test]
    fn test_queens_in_row_order() {
        let queens = solve(6).unwrap();
        let rows: Vec<usize> = queens.iter().map(|q| q.row).collect();
        assert_eq!(rows, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sorted_successors_most_open_first() {
        let children = QueensProblem.sorted_successors(&GraphNode::empty(6));
        let counts: Vec<usize> = children.iter().map(GraphNode::available_count).collect();
        let mut sorted = counts.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(counts, sorted);
        // every first-row square attacks as many squares, so column order holds
        let columns: Vec<usize> = children.iter().map(|c| c.placed_queens()[0].column).collect();
        assert_eq!(columns, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_incremental_reaches_valid_solution() {
        for size in [1, 4, 5, 6, 8] {
            let step = solve_incrementally(size).run_to_end();
            assert!(step.is_final());
            assert_valid_solution(step.candidate().expect("solution"), size);
        }
    }

    #[test]
    fn test_incremental_matches_eager_backtracking() {
        let eager = Solver::with_engine(Engine::Backtracking).solve(8);
        let step = Solver::new().solve_incrementally(8).run_to_end();
        assert_eq!(step.solution().map(<[Coordinates]>::to_vec), eager);
    }

    #[test]
    fn test_incremental_unsolvable_has_no_candidate() {
        let step = solve_incrementally(3).run_to_end();
        assert!(step.is_final());
        assert!(step.candidate().is_none());
        assert!(step.advance().is_err());
    }

    #[test]
    fn test_incremental_candidate_grows_by_one_row() {
        let mut step = solve_incrementally(4);
        assert_eq!(step.candidate(), Some(&[][..]));
        step = step.advance().unwrap();
        assert_eq!(step.candidate().map(<[Coordinates]>::len), Some(1));
        assert_eq!(step.steps(), 1);
        assert_eq!(step.board_size(), Some(4));
    }

    /// Counts successor expansions of the wrapped problem
    struct Counting<'a> {
        expansions: &'a Cell<usize>,
    }

    impl Problem for Counting<'_> {
        type Node = GraphNode;

        fn is_solution(&self, node: &GraphNode) -> bool {
            QueensProblem.is_solution(node)
        }

        fn sorted_successors(&self, node: &GraphNode) -> Vec<GraphNode> {
            self.expansions.set(self.expansions.get() + 1);
            QueensProblem.sorted_successors(node)
        }
    }

    #[test]
    fn test_advances_equal_eager_expansions_for_four() {
        let expansions = Cell::new(0);
        let eager = search::resolve(GraphNode::empty(4), &Counting { expansions: &expansions });

        let lazy_expansions = Cell::new(0);
        let mut step =
            search::resolve_incrementally(GraphNode::empty(4), Counting { expansions: &lazy_expansions });
        let mut advances = 0;
        while !step.is_final() {
            step = step.advance().unwrap();
            advances += 1;
        }

        assert_eq!(advances, expansions.get());
        assert_eq!(lazy_expansions.get(), expansions.get());
        assert_eq!(step.into_solution(), eager);
    }

    #[test]
    fn test_queens_step_debug() {
        let step = solve_incrementally(4).advance().unwrap();
        let text = format!("{:?}", step);
        assert!(text.starts_with("QueensStep"));
        assert!(text.contains("advances: 1"));
    }
}
