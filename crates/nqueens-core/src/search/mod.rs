//! Problem-agnostic search engines.
//!
//! Both engines see states only through the traits they declare; neither
//! knows anything about boards or queens.

pub mod astar;
pub mod backtrack;

pub use astar::{search, GraphTools};
pub use backtrack::{resolve, resolve_incrementally, Problem, Step};
