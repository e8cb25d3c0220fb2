//! Closeness centrality - how few hops a node needs to reach the rest of the graph.
//!
//! For a node `s` that reaches `r` other nodes with hop distances summing to `d`,
//! the score is
//!
//! ```text
//! C(s) = (r / d) * (r / (n - 1))
//! ```
//!
//! The first factor is the classic closeness within the component of `s`; the
//! second scales it by the fraction of the graph `s` can reach, so that a node
//! sitting in a small component does not look as central as a hub of the giant
//! component. Nodes that reach nothing score `0`. Edge weights are ignored.
//!
//! # Examples
//!
//! ```rust
//! use netmetrics::{algorithms::centrality::closeness_centrality::closeness_centrality, prelude::*};
//!
//! let graph = Graph::from_edges(3, [(0, 1, 1)]).unwrap();
//! let scores = closeness_centrality(&graph);
//! assert_eq!(scores.values(), &[0.5, 0.5, 0.0]);
//! ```

use crate::{
    core::VID,
    db::{graph::Graph, node_state::NodeState},
};
use std::collections::VecDeque;
use tracing::debug;

/// Reusable breadth-first search buffers sized to one graph.
struct Bfs {
    visited: Vec<bool>,
    queue: VecDeque<(VID, usize)>,
}

impl Bfs {
    fn new(num_nodes: usize) -> Self {
        Self {
            visited: vec![false; num_nodes],
            queue: VecDeque::new(),
        }
    }

    /// Returns the number of nodes reachable from `source` (excluding itself) and
    /// the sum of their hop distances.
    fn reach(&mut self, graph: &Graph, source: VID) -> (usize, usize) {
        self.visited.fill(false);
        self.queue.clear();
        self.visited[source.index()] = true;
        self.queue.push_back((source, 0));

        let mut reached = 0;
        let mut total_dist = 0;
        while let Some((node, dist)) = self.queue.pop_front() {
            for nbr in graph.neighbour_ids(node) {
                if !self.visited[nbr.index()] {
                    self.visited[nbr.index()] = true;
                    reached += 1;
                    total_dist += dist + 1;
                    self.queue.push_back((*nbr, dist + 1));
                }
            }
        }
        (reached, total_dist)
    }
}

/// Computes the closeness centrality of every node, index-aligned with node ids.
pub fn closeness_centrality(graph: &Graph) -> NodeState<f64> {
    let num_nodes = graph.count_nodes();
    if num_nodes == 0 {
        return NodeState::new_empty();
    }
    let mut bfs = Bfs::new(num_nodes);
    let scores: NodeState<f64> = graph
        .nodes()
        .map(|source| {
            let (reached, total_dist) = bfs.reach(graph, source);
            closeness_score(reached, total_dist, num_nodes)
        })
        .collect();
    debug!("Computed closeness centrality for {} nodes", num_nodes);
    scores
}

fn closeness_score(reached: usize, total_dist: usize, num_nodes: usize) -> f64 {
    if total_dist == 0 || num_nodes <= 1 {
        return 0.0;
    }
    let reached = reached as f64;
    (reached / total_dist as f64) * (reached / (num_nodes - 1) as f64)
}
