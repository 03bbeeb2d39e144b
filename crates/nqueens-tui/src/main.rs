mod app;
mod cli;
mod render;
mod theme;

use app::App;
use clap::Parser;
use cli::{Cli, Command};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use nqueens_core::{BoardState, Coordinates, Engine, Solver, SquareIdCache};
use serde::Serialize;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// JSON shape printed by `nqueens solve --json`
#[derive(Serialize)]
struct SolveReport {
    board_size: usize,
    engine: Engine,
    solution: Option<Vec<Coordinates>>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.clone().unwrap_or(Command::Play) {
        Command::Play => run_interactive(&cli),
        Command::Solve { json } => run_solve(&cli, json),
        Command::Trace { limit } => run_trace(&cli, limit),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run_interactive(cli: &Cli) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let mut app = App::new(cli.solver_config(), cli.theme, Duration::from_millis(cli.delay_ms));
    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.get_tick_rate();

        render::render(stdout, app)?;

        // Handle input with timeout for animation updates
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            if let Event::Key(key) = event::read()? {
                match app.handle_key(key) {
                    app::AppAction::Continue => {}
                    app::AppAction::Quit => break,
                }
            }
        }

        // Advance the search on each tick
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn run_solve(cli: &Cli, json: bool) -> io::Result<()> {
    let size = cli.size.get();
    let solver = Solver::from_config(&cli.solver_config());
    let solution = solver.solve(size);
    let solved = solution.is_some();

    let mut stdout = io::stdout().lock();
    if json {
        let report = SolveReport { board_size: size, engine: solver.engine(), solution };
        let text = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
        writeln!(stdout, "{}", text)?;
    } else if let Some(queens) = solution {
        let board = BoardState::from_solution(&queens, size);
        write!(stdout, "{}", board.describe(&mut SquareIdCache::new(size)).to_text())?;
    } else {
        writeln!(stdout, "No solution for a {}x{} board", size, size)?;
    }
    stdout.flush()?;

    if !solved {
        std::process::exit(1);
    }
    Ok(())
}

fn run_trace(cli: &Cli, limit: Option<usize>) -> io::Result<()> {
    let size = cli.size.get();
    let mut stdout = io::stdout().lock();
    let mut step = Solver::from_config(&cli.solver_config()).solve_incrementally(size);

    loop {
        if limit.map_or(false, |limit| step.steps() >= limit) {
            writeln!(stdout, "stopped after {} steps", step.steps())?;
            break;
        }
        match step.candidate() {
            Some(queens) => {
                let columns: Vec<String> = queens.iter().map(|q| q.column.to_string()).collect();
                writeln!(stdout, "{:>6}  [{}]", step.steps(), columns.join(" "))?;
            }
            None => writeln!(stdout, "{:>6}  exhausted", step.steps())?,
        }
        if step.is_final() {
            let outcome = if step.solution().is_some() { "solved" } else { "no solution" };
            writeln!(stdout, "{} after {} steps", outcome, step.steps())?;
            break;
        }
        step = step.advance().map_err(io::Error::other)?;
    }

    stdout.flush()
}
