//! Depth-first backtracking, eager and resumable.
//!
//! [`resolve`] recurses to completion. [`resolve_incrementally`] walks the
//! same tree in the same order but keeps its position in an explicit frame
//! stack, so a driver can advance it one node at a time and look at the
//! current candidate between advances.

use crate::error::{SearchError, SearchResult};
use std::collections::VecDeque;
use std::fmt;

/// A search space described by a goal test and ordered successors.
pub trait Problem {
    type Node;

    fn is_solution(&self, node: &Self::Node) -> bool;
    /// Successors in the order they should be tried
    fn sorted_successors(&self, node: &Self::Node) -> Vec<Self::Node>;
}

impl<P: Problem + ?Sized> Problem for &P {
    type Node = P::Node;

    fn is_solution(&self, node: &Self::Node) -> bool {
        (**self).is_solution(node)
    }
    fn sorted_successors(&self, node: &Self::Node) -> Vec<Self::Node> {
        (**self).sorted_successors(node)
    }
}

/// Depth-first search from `node`, returning the first solution found.
///
/// Recursion depth equals the depth of the search tree.
pub fn resolve<P: Problem>(node: P::Node, problem: &P) -> Option<P::Node> {
    if problem.is_solution(&node) {
        return Some(node);
    }
    problem
        .sorted_successors(&node)
        .into_iter()
        .find_map(|successor| resolve(successor, problem))
}

/// One level of the paused depth-first walk
struct Frame<N> {
    node: N,
    untried: VecDeque<N>,
}

enum State<N> {
    Searching(Vec<Frame<N>>),
    Finished(Option<N>),
}

/// A paused point of a backtracking search.
///
/// Each step owns the frontier needed to compute its successor; advancing
/// consumes it. The frame stack's bottom is the root, its top the most
/// recently entered node.
pub struct Step<P: Problem> {
    problem: P,
    state: State<P::Node>,
    advances: usize,
}

/// Start a resumable search rooted at `root`.
///
/// The returned step is already final when `root` is a solution.
pub fn resolve_incrementally<P: Problem>(root: P::Node, problem: P) -> Step<P> {
    let state = if problem.is_solution(&root) {
        State::Finished(Some(root))
    } else {
        let untried = problem.sorted_successors(&root).into();
        State::Searching(vec![Frame { node: root, untried }])
    };
    Step { problem, state, advances: 0 }
}

impl<P: Problem> Step<P> {
    /// True once a solution was found or the space was exhausted
    pub fn is_final(&self) -> bool {
        matches!(self.state, State::Finished(_))
    }

    /// The node most recently entered, or the solution once final.
    ///
    /// `None` only for a final step whose search space held no solution.
    pub fn candidate(&self) -> Option<&P::Node> {
        match &self.state {
            State::Searching(frames) => frames.last().map(|frame| &frame.node),
            State::Finished(solution) => solution.as_ref(),
        }
    }

    /// Number of advances that led to this step
    pub fn advances(&self) -> usize {
        self.advances
    }

    /// Current depth of the walk; 0 once final
    pub fn depth(&self) -> usize {
        match &self.state {
            State::Searching(frames) => frames.len(),
            State::Finished(_) => 0,
        }
    }

    /// Move to the next untried node, backtracking out of exhausted frames.
    ///
    /// Each call enters exactly one new node, unless every frame is exhausted,
    /// in which case the result is final with no candidate.
    pub fn advance(self) -> SearchResult<Self> {
        let Step { problem, state, advances } = self;
        let mut frames = match state {
            State::Searching(frames) => frames,
            State::Finished(_) => return Err(SearchError::AlreadyFinal),
        };

        let state = loop {
            let Some(frame) = frames.last_mut() else {
                log::debug!("backtracking: exhausted after {} advances", advances + 1);
                break State::Finished(None);
            };
            let Some(next) = frame.untried.pop_front() else {
                frames.pop();
                continue;
            };

            if problem.is_solution(&next) {
                log::debug!("backtracking: solution after {} advances", advances + 1);
                break State::Finished(Some(next));
            }
            let untried = problem.sorted_successors(&next).into();
            frames.push(Frame { node: next, untried });
            log::trace!("backtracking: entered depth {}", frames.len());
            break State::Searching(frames);
        };

        Ok(Step { problem, state, advances: advances + 1 })
    }

    /// Advance until final, returning the terminal step
    pub fn run_to_end(self) -> Self {
        let mut step = self;
        while !step.is_final() {
            step = match step.advance() {
                Ok(next) => next,
                Err(_) => unreachable!("advance only fails on final steps"),
            };
        }
        step
    }

    /// Consume the step, yielding the solution if it is final and found one
    pub fn into_solution(self) -> Option<P::Node> {
        match self.state {
            State::Finished(solution) => solution,
            State::Searching(_) => None,
        }
    }
}

impl<P: Problem> fmt::Debug for Step<P>
where
    P::Node: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("final", &self.is_final())
            .field("candidate", &self.candidate())
            .field("advances", &self.advances)
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Binary tree over strings of 'L'/'R' up to a fixed depth
    struct Paths {
        depth: usize,
        target: Option<&'static str>,
        expansions: Cell<usize>,
    }

    impl Paths {
        fn new(depth: usize, target: Option<&'static str>) -> Self {
            Self { depth, target, expansions: Cell::new(0) }
        }
    }

    impl Problem for Paths {
        type Node = String;

        fn is_solution(&self, node: &String) -> bool {
            self.target == Some(node.as_str())
        }

        fn sorted_successors(&self, node: &String) -> Vec<String> {
            self.expansions.set(self.expansions.get() + 1);
            if node.len() == self.depth {
                return Vec::new();
            }
            vec![format!("{}L", node), format!("{}R", node)]
        }
    }

    #[test]
    fn test_resolve_finds_target() {
        let problem = Paths::new(3, Some("RL"));
        assert_eq!(resolve(String::new(), &problem), Some("RL".to_string()));
    }

    #[test]
    fn test_resolve_root_is_solution() {
        let problem = Paths::new(3, Some(""));
        assert_eq!(resolve(String::new(), &problem), Some(String::new()));
        assert_eq!(problem.expansions.get(), 0);
    }

    #[test]
    fn test_resolve_exhausted() {
        let problem = Paths::new(2, Some("LLL"));
        assert_eq!(resolve(String::new(), &problem), None);
        // 1 + 2 + 4 nodes
        assert_eq!(problem.expansions.get(), 7);
    }

    #[test]
    fn test_incremental_visits_depth_first() {
        let problem = Paths::new(2, Some("RR"));
        let mut step = resolve_incrementally(String::new(), &problem);
        let mut visited = vec![step.candidate().cloned().unwrap()];
        while !step.is_final() {
            step = step.advance().unwrap();
            visited.push(step.candidate().cloned().unwrap());
        }
        assert_eq!(visited, vec!["", "L", "LL", "LR", "R", "RL", "RR"]);
    }

    #[test]
    fn test_incremental_backtracks_to_grandparent() {
        let problem = Paths::new(2, Some("R"));
        let mut step = resolve_incrementally(String::new(), &problem);
        for _ in 0..3 {
            step = step.advance().unwrap();
        }
        assert_eq!(step.candidate().map(String::as_str), Some("LR"));
        assert_eq!(step.depth(), 3);

        // "LR" and "L" are exhausted; the next advance pops both frames.
        let step = step.advance().unwrap();
        assert!(step.is_final());
        assert_eq!(step.candidate().map(String::as_str), Some("R"));
    }

    #[test]
    fn test_incremental_exhausted_has_no_candidate() {
        let problem = Paths::new(2, None);
        let step = resolve_incrementally(String::new(), &problem).run_to_end();
        assert!(step.is_final());
        assert!(step.candidate().is_none());
        // six non-root nodes entered plus the advance that found nothing left
        assert_eq!(step.advances(), 7);
    }

    #[test]
    fn test_advance_after_final_fails() {
        let problem = Paths::new(1, Some(""));
        let step = resolve_incrementally(String::new(), &problem);
        assert!(step.is_final());
        assert_eq!(step.advance().err(), Some(SearchError::AlreadyFinal));
    }

    #[test]
    fn test_step_debug_shows_position() {
        let problem = Paths::new(2, Some("LR"));
        let step = resolve_incrementally(String::new(), &problem).advance().unwrap();
        let text = format!("{:?}", step);
        assert!(text.contains("candidate: Some(\"L\")"));
        assert!(text.contains("advances: 1"));
        assert!(text.contains("depth: 2"));
    }

    #[test]
    fn test_advances_match_eager_expansions() {
        let eager = Paths::new(4, Some("RLRL"));
        let found = resolve(String::new(), &eager);

        let lazy = Paths::new(4, Some("RLRL"));
        let step = resolve_incrementally(String::new(), &lazy).run_to_end();

        assert_eq!(step.candidate(), found.as_ref());
        assert_eq!(step.advances(), eager.expansions.get());
        assert_eq!(lazy.expansions.get(), eager.expansions.get());
    }
}
