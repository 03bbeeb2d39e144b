//! Basic example of using the N-Queens engines

use nqueens_core::{BoardState, Engine, Solver, SquareIdCache};

fn main() {
    let board_size = 8;

    // Solve with each engine
    for engine in Engine::all() {
        let solver = Solver::with_engine(*engine);
        println!("Solving {}x{} with {}...\n", board_size, board_size, engine);

        match solver.solve(board_size) {
            Some(queens) => {
                let board = BoardState::from_solution(&queens, board_size);
                println!("{}", board.describe(&mut SquareIdCache::new(board_size)).to_text());
            }
            None => println!("No solution found\n"),
        }
    }

    // Step through a backtracking search
    println!("--- Stepping through a 6x6 search ---\n");
    let mut step = Solver::new().solve_incrementally(6);
    while !step.is_final() {
        if let Some(candidate) = step.candidate() {
            let columns: Vec<String> = candidate.iter().map(|q| q.column.to_string()).collect();
            println!("step {:>3}: [{}]", step.steps(), columns.join(" "));
        }
        step = match step.advance() {
            Ok(next) => next,
            Err(e) => {
                println!("Error: {}", e);
                return;
            }
        };
    }

    match step.solution() {
        Some(queens) => println!("\nSolved after {} steps: {:?}", step.steps(), queens),
        None => println!("\nNo solution after {} steps", step.steps()),
    }

    // 3x3 has no solution
    println!("\n3x3 solvable: {}", Solver::new().solve(3).is_some());
}
