//! WebAssembly bindings for the N-Queens solver
//!
//! Exposes one-shot solving, a step-by-step solver a page can drive from
//! `requestAnimationFrame`, and a board for placing queens by hand. Boards are
//! handed to JavaScript as JSON board descriptors; drawing them is left to the
//! page.

use nqueens_core::{BoardSize, Engine, SearchError, Solver, SquareContent};
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod logger;
mod session;

#[cfg(test)]
mod tests;

pub use session::{PlaySession, SearchSession};

// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}

fn to_js_error(e: SearchError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn validated_size(size: usize) -> Result<usize, JsValue> {
    BoardSize::new(size).map(|s| s.get()).map_err(to_js_error)
}

fn content_name(content: SquareContent) -> String {
    let name = match content {
        SquareContent::Empty => "empty",
        SquareContent::Queen => "queen",
        SquareContent::Blocked => "blocked",
    };
    name.to_string()
}

/// Solve a board, returning `[{row, column}, ...]` or `null`
#[wasm_bindgen]
pub fn solve(board_size: usize, engine: &str) -> Result<JsValue, JsValue> {
    let size = validated_size(board_size)?;
    let engine: Engine = engine.parse().map_err(to_js_error)?;
    let solution = Solver::with_engine(engine).solve(size);
    to_js_value(&solution)
}

/// Backtracking search advanced from JavaScript
#[wasm_bindgen]
pub struct IncrementalSolver {
    session: SearchSession,
}

#[wasm_bindgen]
impl IncrementalSolver {
    #[wasm_bindgen(constructor)]
    pub fn new(board_size: usize) -> Result<IncrementalSolver, JsValue> {
        Ok(Self { session: SearchSession::new(validated_size(board_size)?) })
    }

    /// Take one step; throws once the search is final
    #[wasm_bindgen]
    pub fn advance(&mut self) -> Result<(), JsValue> {
        self.session.advance().map_err(to_js_error)
    }

    /// Step until final or `budget_ms` has elapsed; returns steps taken
    #[wasm_bindgen]
    pub fn run_for(&mut self, budget_ms: f64) -> usize {
        self.session.run_for(budget_ms, js_sys::Date::now)
    }

    #[wasm_bindgen]
    pub fn is_final(&self) -> bool {
        self.session.is_final()
    }

    #[wasm_bindgen]
    pub fn steps(&self) -> usize {
        self.session.steps()
    }

    /// Queens of the current candidate, or `null` when no solution exists
    #[wasm_bindgen]
    pub fn candidate(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.session.candidate())
    }

    /// Board descriptor of the current candidate as JSON
    #[wasm_bindgen]
    pub fn board(&mut self) -> String {
        serde_json::to_string(&self.session.board()).unwrap_or_default()
    }
}

/// Board for placing queens by hand
#[wasm_bindgen]
pub struct BoardGame {
    session: PlaySession,
}

#[wasm_bindgen]
impl BoardGame {
    #[wasm_bindgen(constructor)]
    pub fn new(board_size: usize) -> Result<BoardGame, JsValue> {
        Ok(Self { session: PlaySession::new(validated_size(board_size)?) })
    }

    /// Toggle a queen; returns what the square held before
    #[wasm_bindgen]
    pub fn toggle(&mut self, row: usize, column: usize) -> String {
        content_name(self.session.toggle(row, column))
    }

    #[wasm_bindgen]
    pub fn queen_count(&self) -> usize {
        self.session.queen_count()
    }

    #[wasm_bindgen]
    pub fn is_solved(&self) -> bool {
        self.session.is_solved()
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.session.clear();
    }

    /// Board descriptor as JSON
    #[wasm_bindgen]
    pub fn board(&mut self) -> String {
        serde_json::to_string(&self.session.board()).unwrap_or_default()
    }
}
