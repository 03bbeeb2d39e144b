use crate::theme::ThemeName;
use clap::{Parser, Subcommand};
use nqueens_core::{BoardSize, Engine, SolverConfig};

/// Place N queens on an NxN board so that none attack each other
#[derive(Debug, Parser)]
#[command(name = "nqueens", version, about)]
pub struct Cli {
    /// Board size (number of queens)
    #[arg(short, long, default_value_t = BoardSize::default(), value_parser = parse_board_size)]
    pub size: BoardSize,

    /// Engine for one-shot solving (astar or backtracking)
    #[arg(short, long, default_value_t = Engine::default())]
    pub engine: Engine,

    /// Milliseconds between animation steps
    #[arg(long, default_value_t = 120)]
    pub delay_ms: u64,

    #[arg(long, value_enum, default_value_t = ThemeName::Dark)]
    pub theme: ThemeName,

    /// Log solver diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interactive board (default)
    Play,
    /// Print one solution and exit
    Solve {
        /// Emit JSON instead of a board
        #[arg(long)]
        json: bool,
    },
    /// Print every step of the incremental search
    Trace {
        /// Stop printing after this many steps
        #[arg(long)]
        limit: Option<usize>,
    },
}

impl Cli {
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig { engine: self.engine, board_size: self.size }
    }
}

fn parse_board_size(s: &str) -> Result<BoardSize, String> {
    let size: usize = s.parse().map_err(|e| format!("{}", e))?;
    BoardSize::new(size).map_err(|e| format!("{} (expected 1..={})", e, BoardSize::MAX))
}
