//! Tests for the WASM sessions

use crate::session::{PlaySession, SearchSession};
use crate::content_name;
use nqueens_core::{is_conflict_free, SquareContent};

#[test]
fn test_search_session_runs_to_solution() {
    let mut session = SearchSession::new(6);
    assert!(!session.is_final());
    assert_eq!(session.candidate(), Some(&[][..]));

    while !session.is_final() {
        session.advance().unwrap();
    }
    let queens = session.candidate().unwrap();
    assert_eq!(queens.len(), 6);
    assert!(is_conflict_free(queens));
    assert!(session.advance().is_err());
}

#[test]
fn test_search_session_unsolvable() {
    let mut session = SearchSession::new(2);
    while session.advance().is_ok() {}
    assert!(session.is_final());
    assert!(session.candidate().is_none());
    assert!(session.board().rows.iter().flat_map(|r| &r.squares).all(|s| s.content == SquareContent::Empty));
}

#[test]
fn test_run_for_respects_budget() {
    let mut session = SearchSession::new(8);
    let mut clock = 0.0;
    // every reading costs 1ms, so a 3ms budget allows three steps
    let taken = session.run_for(3.0, || {
        clock += 1.0;
        clock
    });
    assert_eq!(taken, 3);
    assert_eq!(session.steps(), 3);
}

#[test]
fn test_run_for_stops_when_final() {
    let mut session = SearchSession::new(4);
    let taken = session.run_for(f64::INFINITY, || 0.0);
    assert!(session.is_final());
    assert_eq!(taken, session.steps());
    assert_eq!(session.run_for(f64::INFINITY, || 0.0), 0);
}

#[test]
fn test_search_board_tracks_candidate() {
    let mut session = SearchSession::new(5);
    session.advance().unwrap();
    session.advance().unwrap();
    let board = session.board();
    let queens = board
        .rows
        .iter()
        .flat_map(|r| &r.squares)
        .filter(|s| s.content == SquareContent::Queen)
        .count();
    assert_eq!(queens, 2);
}

#[test]
fn test_play_session() {
    let mut game = PlaySession::new(4);
    assert_eq!(game.toggle(0, 1), SquareContent::Empty);
    assert_eq!(game.toggle(1, 1), SquareContent::Blocked);
    assert_eq!(game.toggle(9, 0), SquareContent::Blocked);
    assert_eq!(game.queen_count(), 1);

    for (row, column) in [(1, 3), (2, 0), (3, 2)] {
        assert_eq!(game.toggle(row, column), SquareContent::Empty);
    }
    assert!(game.is_solved());

    game.clear();
    assert_eq!(game.queen_count(), 0);
    assert_eq!(game.board().rows.len(), 4);
}

#[test]
fn test_content_names() {
    assert_eq!(content_name(SquareContent::Queen), "queen");
    assert_eq!(content_name(SquareContent::Blocked), "blocked");
}

// Bindings need a JS host; run with `wasm-pack test --node`
#[cfg(target_arch = "wasm32")]
mod bindings {
    use crate::{solve, BoardGame, IncrementalSolver};
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_solve_binding() {
        assert!(!solve(8, "astar").unwrap().is_null());
        assert!(solve(3, "backtracking").unwrap().is_null());
        assert!(solve(0, "astar").is_err());
        assert!(solve(8, "greedy").is_err());
    }

    #[wasm_bindgen_test]
    fn test_incremental_binding() {
        let mut solver = IncrementalSolver::new(5).unwrap();
        while !solver.is_final() {
            solver.run_for(5.0);
        }
        assert!(solver.advance().is_err());
        assert!(solver.board().contains("\"Queen\""));
    }

    #[wasm_bindgen_test]
    fn test_board_game_binding() {
        let mut game = BoardGame::new(4).unwrap();
        assert_eq!(game.toggle(0, 0), "empty");
        assert_eq!(game.toggle(0, 0), "queen");
        assert_eq!(game.queen_count(), 0);
    }
}
