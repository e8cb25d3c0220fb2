//! Readers that turn dataset files into a [crate::db::graph::Graph].
//!
//! * [source::adj_loader] reads the `<V>,<E>` / `<u>,<v>,<w>` adjacency format.
//! * [source::edge_list_loader] reads SNAP style whitespace separated edge lists.

pub mod source;
