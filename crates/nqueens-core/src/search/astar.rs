//! A* best-first search.
//!
//! Records live in an arena indexed by discovery order and are found through a
//! map from each node's canonical key. The open set is a binary heap with lazy
//! deletion: replaced or closed records leave stale heap entries that are
//! skipped on pop.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;
use std::ops::Add;

/// Everything A* needs to know about a graph.
///
/// `estimate_goal_distance` must not overestimate the true remaining cost for
/// the returned path to be optimal.
pub trait GraphTools {
    type Node: Clone;
    /// Canonical identity of a node; structurally equal nodes share a key
    type Key: Eq + Hash;
    type Cost: Copy + Ord + Default + Add<Output = Self::Cost>;

    fn key(&self, node: &Self::Node) -> Self::Key;
    fn is_goal(&self, node: &Self::Node) -> bool;
    fn distance(&self, from: &Self::Node, to: &Self::Node) -> Self::Cost;
    fn estimate_goal_distance(&self, node: &Self::Node) -> Self::Cost;
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;
}

impl<G: GraphTools + ?Sized> GraphTools for &G {
    type Node = G::Node;
    type Key = G::Key;
    type Cost = G::Cost;

    fn key(&self, node: &Self::Node) -> Self::Key {
        (**self).key(node)
    }
    fn is_goal(&self, node: &Self::Node) -> bool {
        (**self).is_goal(node)
    }
    fn distance(&self, from: &Self::Node, to: &Self::Node) -> Self::Cost {
        (**self).distance(from, to)
    }
    fn estimate_goal_distance(&self, node: &Self::Node) -> Self::Cost {
        (**self).estimate_goal_distance(node)
    }
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node> {
        (**self).neighbors(node)
    }
}

/// Per-node search bookkeeping
struct Record<N, C> {
    node: N,
    closed: bool,
    g_score: C,
    f_score: C,
    /// Arena index of the record this one was reached from
    previous: Option<usize>,
    /// Bumped whenever the record is (re)discovered
    generation: u64,
}

/// Heap entry: lowest f first, then the most recent discovery
type OpenEntry<C> = Reverse<(C, Reverse<u64>, usize)>;

/// Find a path from `start` to a goal node.
///
/// Returns the nodes oldest-first, `[start]` when `start` is already a goal,
/// or an empty vector when the reachable graph holds no goal.
pub fn search<G: GraphTools>(start: G::Node, tools: &G) -> Vec<G::Node> {
    let mut records: Vec<Record<G::Node, G::Cost>> = Vec::new();
    let mut index: HashMap<G::Key, usize> = HashMap::new();
    let mut open: BinaryHeap<OpenEntry<G::Cost>> = BinaryHeap::new();
    let mut generation = 0u64;

    let f_score = tools.estimate_goal_distance(&start);
    index.insert(tools.key(&start), 0);
    records.push(Record {
        node: start,
        closed: false,
        g_score: Default::default(),
        f_score,
        previous: None,
        generation,
    });
    open.push(Reverse((f_score, Reverse(generation), 0)));

    let mut expanded = 0usize;
    while let Some(Reverse((f_score, Reverse(entry_generation), current))) = open.pop() {
        let record = &mut records[current];
        if record.closed || record.generation != entry_generation || record.f_score != f_score {
            continue;
        }
        record.closed = true;

        if tools.is_goal(&record.node) {
            log::debug!("a*: goal reached after {} expansions", expanded);
            return reconstruct_path(&records, current);
        }

        let node = record.node.clone();
        let g_score = record.g_score;
        expanded += 1;

        for neighbor in tools.neighbors(&node) {
            let neighbor_g = g_score + tools.distance(&node, &neighbor);
            let neighbor_f = neighbor_g + tools.estimate_goal_distance(&neighbor);

            let slot = match index.entry(tools.key(&neighbor)) {
                Entry::Vacant(vacant) => {
                    let slot = records.len();
                    vacant.insert(slot);
                    generation += 1;
                    records.push(Record {
                        node: neighbor,
                        closed: false,
                        g_score: neighbor_g,
                        f_score: neighbor_f,
                        previous: Some(current),
                        generation,
                    });
                    slot
                }
                Entry::Occupied(occupied) => {
                    let slot = *occupied.get();
                    let existing = &mut records[slot];
                    if existing.closed || existing.f_score <= neighbor_f {
                        continue;
                    }
                    generation += 1;
                    existing.node = neighbor;
                    existing.g_score = neighbor_g;
                    existing.f_score = neighbor_f;
                    existing.previous = Some(current);
                    existing.generation = generation;
                    slot
                }
            };
            open.push(Reverse((neighbor_f, Reverse(generation), slot)));
        }
        log::trace!("a*: expanded record {} ({} discovered)", current, records.len());
    }

    log::debug!("a*: open set exhausted after {} expansions", expanded);
    Vec::new()
}

fn reconstruct_path<N: Clone, C>(records: &[Record<N, C>], target: usize) -> Vec<N> {
    let mut path = Vec::new();
    let mut cursor = Some(target);
    while let Some(slot) = cursor {
        let record = &records[slot];
        path.push(record.node.clone());
        cursor = record.previous;
    }
    path.reverse();
    path
}
