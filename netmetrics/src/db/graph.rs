//! The undirected, weighted graph every metric runs on.
//!
//! Nodes are dense ids `0..n` and the adjacency is stored arena-style: one
//! vector of `(neighbour, weight)` pairs per node, indexed by [VID]. A graph is
//! built once, either from an edge iterator or by one of the loaders in
//! [crate::graph_loader], and is immutable afterwards.
//!
//! # Examples
//!
//! ```rust
//! use netmetrics::prelude::*;
//!
//! let graph = Graph::from_edges(3, [(0, 1, 1), (1, 2, 4)]).unwrap();
//! assert_eq!(graph.count_nodes(), 3);
//! assert_eq!(graph.count_edges(), 2);
//! assert_eq!(graph.degree(VID(1)), 2);
//! ```

use crate::{
    core::{utils::errors::GraphError, VID},
    db::node_subgraph::NodeSubgraph,
};
use itertools::Itertools;
use std::collections::TryReserveError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    adj: Vec<Vec<(VID, u64)>>,
    nbrs: Vec<Vec<VID>>,
    edges: Vec<(VID, VID, u64)>,
}

impl Graph {
    /// A graph with `num_nodes` nodes and no edges.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            adj: vec![vec![]; num_nodes],
            nbrs: vec![vec![]; num_nodes],
            edges: vec![],
        }
    }

    /// Builds a graph with `num_nodes` nodes from `(src, dst, weight)` triples.
    ///
    /// Every edge is inserted in both directions. An endpoint outside of
    /// `0..num_nodes` fails with [GraphError::NodeOutOfRange], where `line` is
    /// the 1-based position of the offending edge in `edges`.
    pub fn from_edges<I>(num_nodes: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, u64)>,
    {
        let mut builder = GraphBuilder::new(num_nodes);
        for (i, (src, dst, weight)) in edges.into_iter().enumerate() {
            for node in [src, dst] {
                if node >= num_nodes {
                    return Err(GraphError::NodeOutOfRange {
                        line: i + 1,
                        node: i64::try_from(node).unwrap_or(i64::MAX),
                        num_nodes,
                    });
                }
            }
            builder.add_edge(VID(src), VID(dst), weight);
        }
        Ok(builder.build())
    }

    pub fn count_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges the graph was built from (each undirected edge counted once).
    pub fn count_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    pub fn has_node(&self, v: VID) -> bool {
        v.index() < self.adj.len()
    }

    /// All node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = VID> + Clone {
        (0..self.count_nodes()).map(VID)
    }

    /// The edges in the order they were added, as `(src, dst, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (VID, VID, u64)> + '_ {
        self.edges.iter().copied()
    }

    /// The raw adjacency entries of `v` in insertion order, weights included.
    ///
    /// # Panics
    ///
    /// If `v` is not a node of the graph.
    pub fn neighbours(&self, v: VID) -> &[(VID, u64)] {
        &self.adj[v.index()]
    }

    /// The distinct neighbours of `v` in ascending order, without `v` itself.
    ///
    /// # Panics
    ///
    /// If `v` is not a node of the graph.
    pub fn neighbour_ids(&self, v: VID) -> &[VID] {
        &self.nbrs[v.index()]
    }

    /// Number of distinct neighbours of `v` (parallel edges and self loops do not count).
    pub fn degree(&self, v: VID) -> usize {
        self.nbrs[v.index()].len()
    }

    /// The subgraph induced by `nodes`, renumbered densely in ascending order of the
    /// original ids. Ids that are not nodes of this graph are ignored.
    pub fn subgraph<I: IntoIterator<Item = VID>>(&self, nodes: I) -> NodeSubgraph {
        let original: Vec<VID> = nodes
            .into_iter()
            .filter(|v| self.has_node(*v))
            .sorted()
            .dedup()
            .collect();
        let mut new_ids = vec![None; self.count_nodes()];
        for (new, old) in original.iter().enumerate() {
            new_ids[old.index()] = Some(VID(new));
        }
        let mut builder = GraphBuilder::new(original.len());
        for (src, dst, weight) in self.edges() {
            if let (Some(src), Some(dst)) = (new_ids[src.index()], new_ids[dst.index()]) {
                builder.add_edge(src, dst, weight);
            }
        }
        NodeSubgraph::new(builder.build(), original)
    }

    /// The subgraph induced by the nodes for which `filter` returns `true`.
    pub fn filter_nodes<F: Fn(VID) -> bool>(&self, filter: F) -> NodeSubgraph {
        self.subgraph(self.nodes().filter(|v| filter(*v)))
    }
}

/// Accumulates edges for a graph with a fixed node count. Endpoints are trusted
/// to be in range; callers validate them first.
#[derive(Debug)]
pub(crate) struct GraphBuilder {
    adj: Vec<Vec<(VID, u64)>>,
    edges: Vec<(VID, VID, u64)>,
}

impl GraphBuilder {
    pub(crate) fn new(num_nodes: usize) -> Self {
        Self {
            adj: vec![vec![]; num_nodes],
            edges: vec![],
        }
    }

    /// Like [GraphBuilder::new], but reports an allocation failure for an
    /// absurd node count instead of aborting.
    pub(crate) fn try_new(num_nodes: usize) -> Result<Self, TryReserveError> {
        let mut adj = Vec::new();
        adj.try_reserve_exact(num_nodes)?;
        adj.resize_with(num_nodes, Vec::new);
        Ok(Self { adj, edges: vec![] })
    }

    pub(crate) fn add_edge(&mut self, src: VID, dst: VID, weight: u64) {
        self.adj[src.index()].push((dst, weight));
        self.adj[dst.index()].push((src, weight));
        self.edges.push((src, dst, weight));
    }

    pub(crate) fn build(self) -> Graph {
        let nbrs = self
            .adj
            .iter()
            .enumerate()
            .map(|(v, entries)| {
                entries
                    .iter()
                    .map(|(n, _)| *n)
                    .filter(|n| n.index() != v)
                    .sorted()
                    .dedup()
                    .collect::<Vec<_>>()
            })
            .collect();
        Graph {
            adj: self.adj,
            nbrs,
            edges: self.edges,
        }
    }
}
