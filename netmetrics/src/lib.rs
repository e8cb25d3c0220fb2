//! # netmetrics
//!
//! Social network metrics over static, undirected graphs whose nodes are dense
//! integer ids.
//!
//! A run loads a dataset once with one of the [graph_loader]s, computes a metric
//! from [algorithms] over the immutable [db::graph::Graph], and hands the result
//! to a writer from [io]:
//!
//! ```rust
//! use netmetrics::{
//!     algorithms::{
//!         centrality::closeness_centrality::closeness_centrality,
//!         motifs::rectangle_count::rectangle_count,
//!     },
//!     graph_loader::source::adj_loader::load_adj_from_str,
//!     io::report::write_closeness,
//! };
//!
//! let graph = load_adj_from_str("4,4\n0,2,1\n0,3,1\n1,2,1\n1,3,1\n").unwrap();
//!
//! let mut out = Vec::new();
//! write_closeness(&mut out, &closeness_centrality(&graph)).unwrap();
//! assert_eq!(rectangle_count(&graph), 1);
//! ```
//!
//! Everything runs on the calling thread; each call owns its scratch space.

pub mod algorithms;
pub mod core;
pub mod db;
pub mod graph_loader;
pub mod io;

pub mod prelude {
    pub use crate::{
        core::{utils::errors::GraphError, VID},
        db::{graph::Graph, node_state::NodeState, node_subgraph::NodeSubgraph},
    };
}

#[cfg(test)]
pub(crate) mod test_utils;
