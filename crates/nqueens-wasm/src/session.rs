//! Front-end sessions, independent of the JS bindings

use nqueens_core::{
    BoardDescriptor, BoardState, Coordinates, QueensStep, SearchError, SearchResult, Solver,
    SquareContent, SquareIdCache,
};

/// An incremental search plus the square ids used to render it
pub struct SearchSession {
    board_size: usize,
    step: Option<QueensStep>,
    squares: SquareIdCache,
}

impl SearchSession {
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            step: Some(Solver::new().solve_incrementally(board_size)),
            squares: SquareIdCache::new(board_size),
        }
    }

    pub fn is_final(&self) -> bool {
        self.step.as_ref().map_or(true, QueensStep::is_final)
    }

    pub fn steps(&self) -> usize {
        self.step.as_ref().map_or(0, QueensStep::steps)
    }

    pub fn candidate(&self) -> Option<&[Coordinates]> {
        self.step.as_ref().and_then(QueensStep::candidate)
    }

    pub fn advance(&mut self) -> SearchResult<()> {
        let step = self.step.take().ok_or(SearchError::AlreadyFinal)?;
        if step.is_final() {
            self.step = Some(step);
            return Err(SearchError::AlreadyFinal);
        }
        self.step = Some(step.advance()?);
        Ok(())
    }

    /// Advance until final or until `now()` passes `budget_ms` past the first
    /// reading; always takes at least one step when not final.
    ///
    /// Returns the number of steps taken.
    pub fn run_for(&mut self, budget_ms: f64, mut now: impl FnMut() -> f64) -> usize {
        let deadline = now() + budget_ms;
        let mut taken = 0;
        while !self.is_final() {
            if self.advance().is_err() {
                break;
            }
            taken += 1;
            if now() >= deadline {
                break;
            }
        }
        taken
    }

    /// Snapshot of the current candidate
    pub fn board(&mut self) -> BoardDescriptor {
        let state = self
            .candidate()
            .map(|queens| BoardState::from_solution(queens, self.board_size))
            .unwrap_or_default();
        state.describe(&mut self.squares)
    }
}

/// A board edited square by square
pub struct PlaySession {
    board: BoardState,
    squares: SquareIdCache,
}

impl PlaySession {
    pub fn new(board_size: usize) -> Self {
        Self { board: BoardState::new(), squares: SquareIdCache::new(board_size) }
    }

    pub fn board_size(&self) -> usize {
        self.squares.board_size()
    }

    /// Toggle a queen, returning the square's previous content.
    ///
    /// Squares off the board are reported as blocked.
    pub fn toggle(&mut self, row: usize, column: usize) -> SquareContent {
        if row >= self.board_size() || column >= self.board_size() {
            return SquareContent::Blocked;
        }
        let square = self.squares.get(row, column).clone();
        self.board.toggle(&square)
    }

    pub fn queen_count(&self) -> usize {
        self.board.queen_count()
    }

    pub fn is_solved(&self) -> bool {
        self.board.queen_count() == self.board_size()
    }

    pub fn clear(&mut self) {
        self.board.clear();
    }

    pub fn board(&mut self) -> BoardDescriptor {
        self.board.describe(&mut self.squares)
    }
}
