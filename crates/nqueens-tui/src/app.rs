use crate::theme::{Theme, ThemeName};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nqueens_core::{
    BoardSize, BoardState, Coordinates, Engine, QueensStep, Solver, SolverConfig, SquareContent,
    SquareIdCache,
};
use std::time::Duration;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// What the status line reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Manual editing
    Editing,
    /// Incremental search running on the timer
    Searching,
    /// Incremental search paused mid-way
    Paused,
    Solved,
    NoSolution,
}

/// The main application state
pub struct App {
    /// Engine and board size
    pub config: SolverConfig,
    /// Queens currently on the board
    pub board: BoardState,
    /// Square ids for the current board size
    pub squares: SquareIdCache,
    /// Currently selected square
    pub cursor: Coordinates,
    /// Color theme
    pub theme: Theme,
    pub status: Status,
    /// Message to display
    pub message: Option<String>,
    /// Paused or running incremental search
    step: Option<QueensStep>,
    /// Steps taken by the last incremental search
    pub steps: usize,
    tick_rate: Duration,
}

impl Default for App {
    fn default() -> Self {
        Self::new(SolverConfig::default(), ThemeName::default(), Duration::from_millis(120))
    }
}

impl App {
    pub fn new(config: SolverConfig, theme: ThemeName, tick_rate: Duration) -> Self {
        let size = config.board_size.get();
        Self {
            config,
            board: BoardState::new(),
            squares: SquareIdCache::new(size),
            cursor: Coordinates::new(0, 0),
            theme: Theme::from_name(theme),
            status: Status::Editing,
            message: None,
            step: None,
            steps: 0,
            tick_rate,
        }
    }

    pub fn board_size(&self) -> usize {
        self.config.board_size.get()
    }

    pub fn get_tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub fn is_playing(&self) -> bool {
        self.status == Status::Searching
    }

    /// Content of the square at `pos`
    pub fn content_at(&mut self, pos: Coordinates) -> SquareContent {
        let square = self.squares.get(pos.row, pos.column).clone();
        self.board.content(&square)
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_queen(),
            KeyCode::Char('s') => self.solve(),
            KeyCode::Char('p') => self.toggle_playback(),
            KeyCode::Char('n') => {
                self.status = Status::Paused;
                self.step_once();
            }
            KeyCode::Char('e') => {
                self.config.engine = self.config.engine.next();
                self.show_message(&format!("Engine: {}", self.config.engine));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.resize(self.config.board_size.grow()),
            KeyCode::Char('-') => self.resize(self.config.board_size.shrink()),
            KeyCode::Char('c') => self.reset(),
            KeyCode::Char('t') => self.theme = Theme::from_name(self.theme.name.next()),
            _ => {}
        }
        AppAction::Continue
    }

    /// Advance the running search by one step
    pub fn tick(&mut self) {
        if self.is_playing() {
            self.step_once();
        }
    }

    fn move_cursor(&mut self, row_delta: isize, col_delta: isize) {
        let max = self.board_size() as isize - 1;
        let row = (self.cursor.row as isize + row_delta).clamp(0, max);
        let column = (self.cursor.column as isize + col_delta).clamp(0, max);
        self.cursor = Coordinates::new(row as usize, column as usize);
    }

    fn toggle_queen(&mut self) {
        self.step = None;
        self.status = Status::Editing;
        let square = self.squares.get(self.cursor.row, self.cursor.column).clone();
        if self.board.toggle(&square) == SquareContent::Blocked {
            self.show_message("Square is attacked");
        } else if self.board.queen_count() == self.board_size() {
            self.status = Status::Solved;
            self.show_message("Solved by hand!");
        }
    }

    /// One-shot solve with the configured engine
    fn solve(&mut self) {
        self.step = None;
        let size = self.board_size();
        let solver = Solver::from_config(&self.config);
        match solver.solve(size) {
            Some(queens) => {
                self.board = BoardState::from_solution(&queens, size);
                self.status = Status::Solved;
                self.show_message(&format!("Solved with {}", solver.engine()));
            }
            None => {
                self.board.clear();
                self.status = Status::NoSolution;
                self.show_message("No solution");
            }
        }
    }

    fn toggle_playback(&mut self) {
        match self.status {
            Status::Searching => self.status = Status::Paused,
            Status::Paused if self.step.is_some() => self.status = Status::Searching,
            _ => {
                self.start_search();
                self.status = Status::Searching;
            }
        }
    }

    fn start_search(&mut self) {
        let step = Solver::from_config(&self.config).solve_incrementally(self.board_size());
        self.steps = 0;
        self.message = None;
        self.sync_board(&step);
        self.step = Some(step);
    }

    fn step_once(&mut self) {
        if self.step.is_none() {
            self.start_search();
        }
        let Some(step) = self.step.take() else {
            return;
        };
        if step.is_final() {
            self.finish(&step);
            return;
        }
        match step.advance() {
            Ok(next) => {
                self.steps = next.steps();
                self.sync_board(&next);
                if next.is_final() {
                    self.finish(&next);
                } else {
                    self.step = Some(next);
                }
            }
            Err(e) => {
                log::warn!("advance failed: {}", e);
                self.status = Status::Editing;
                self.show_message(&format!("Error: {}", e));
            }
        }
    }

    fn finish(&mut self, step: &QueensStep) {
        if step.solution().is_some() {
            self.status = Status::Solved;
            self.show_message(&format!("Solved in {} steps", step.steps()));
        } else {
            self.board.clear();
            self.status = Status::NoSolution;
            self.show_message(&format!("No solution after {} steps", step.steps()));
        }
        log::debug!("incremental search finished: {:?} after {} steps", self.status, step.steps());
    }

    fn sync_board(&mut self, step: &QueensStep) {
        if let Some(queens) = step.candidate() {
            self.board = BoardState::from_solution(queens, self.board_size());
        }
    }

    fn resize(&mut self, size: BoardSize) {
        self.config.board_size = size;
        self.squares = SquareIdCache::new(size.get());
        self.cursor = Coordinates::new(0, 0);
        self.reset();
        self.show_message(&format!("Board: {}x{}", size, size));
    }

    fn reset(&mut self) {
        self.board.clear();
        self.step = None;
        self.steps = 0;
        self.status = Status::Editing;
        self.message = None;
    }

    fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
    }

    /// Engine label for the info panel
    pub fn engine(&self) -> Engine {
        self.config.engine
    }
}
