//! Rectangle count - the number of 4-cycles in an undirected graph.
//!
//! Every pair of nodes `{i, j}` with common neighbours `{a, b}` spans the cycle
//! `i - a - j - b - i`, with `{i, j}` as one of its diagonals. The other diagonal
//! `{a, b}` finds the same cycle again, so candidates are keyed by their sorted
//! vertex ids and each key is counted once. Four nodes that carry more than one
//! 4-cycle (as in `K4`) therefore count as a single rectangle.
//!
//! The scan visits all `n * (n - 1) / 2` node pairs and is meant for small to
//! medium graphs.
//!
//! # Examples
//!
//! ```rust
//! use netmetrics::{algorithms::motifs::rectangle_count::rectangle_count, prelude::*};
//!
//! // K(2,2): both diagonals {0,1} and {2,3} find the same rectangle
//! let graph = Graph::from_edges(4, [(0, 2, 1), (0, 3, 1), (1, 2, 1), (1, 3, 1)]).unwrap();
//! assert_eq!(rectangle_count(&graph), 1);
//! ```

use crate::{core::VID, db::graph::Graph};
use itertools::{EitherOrBoth, Itertools};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Nodes adjacent to both `i` and `j`, other than `i` and `j` themselves, in ascending order.
pub fn common_neighbours(graph: &Graph, i: VID, j: VID) -> Vec<VID> {
    graph
        .neighbour_ids(i)
        .iter()
        .merge_join_by(graph.neighbour_ids(j), |a, b| a.cmp(b))
        .filter_map(|pair| match pair {
            EitherOrBoth::Both(v, _) if *v != i && *v != j => Some(*v),
            _ => None,
        })
        .collect()
}

/// Counts the distinct rectangles (4-cycles) of `graph`.
pub fn rectangle_count(graph: &Graph) -> usize {
    let mut seen: FxHashSet<[VID; 4]> = FxHashSet::default();
    let mut candidates = 0usize;

    for (i, j) in graph.nodes().tuple_combinations() {
        if graph.degree(i) < 2 || graph.degree(j) < 2 {
            continue;
        }
        let common = common_neighbours(graph, i, j);
        for (a, b) in common.iter().tuple_combinations() {
            let mut key = [i, j, *a, *b];
            key.sort_unstable();
            seen.insert(key);
            candidates += 1;
        }
    }

    debug!(
        "Found {} rectangles from {} candidates",
        seen.len(),
        candidates
    );
    seen.len()
}
