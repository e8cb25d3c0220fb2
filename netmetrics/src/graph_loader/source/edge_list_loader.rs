//! Loader for whitespace separated edge lists as published by SNAP, e.g.
//! `facebook_combined.txt` or `Email-EuAll.txt`.
//!
//! ```text
//! # Directed graph (each unordered pair of nodes is saved once)
//! # FromNodeId	ToNodeId
//! 0	1
//! 0	2
//! ```
//!
//! Lines starting with `#` and blank lines are skipped. SNAP ids are sparse, so
//! only ids that occur in some edge become nodes: they are renumbered densely
//! in ascending order and the returned [NodeSubgraph] maps every node back to
//! its id in the file. Every edge has weight `1`, and an edge listed more than
//! once (in either orientation) is kept only once.

use crate::{
    core::{
        utils::errors::{GraphError, ParseErrorKind},
        VID,
    },
    db::{graph::GraphBuilder, node_subgraph::NodeSubgraph},
    graph_loader::source::adj_loader::parse_field,
};
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct EdgeListLoader {
    path: PathBuf,
}

impl EdgeListLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<NodeSubgraph, GraphError> {
        let io_err = |source| GraphError::Io {
            path: self.path.clone(),
            source,
        };
        let file = File::open(&self.path).map_err(io_err)?;
        let dataset =
            load_edge_list_lines(BufReader::new(file).lines().map(|l| l.map_err(io_err)))?;
        info!(
            "Loaded {} with {} nodes and {} edges",
            self.path.display(),
            dataset.graph().count_nodes(),
            dataset.graph().count_edges()
        );
        Ok(dataset)
    }
}

pub fn load_edge_list_from_str(data: &str) -> Result<NodeSubgraph, GraphError> {
    load_edge_list_lines(data.lines().map(Ok))
}

fn load_edge_list_lines<I, S>(lines: I) -> Result<NodeSubgraph, GraphError>
where
    I: IntoIterator<Item = Result<S, GraphError>>,
    S: AsRef<str>,
{
    let mut seen = FxHashSet::default();
    let mut edges = vec![];
    let mut duplicates = 0usize;

    for (i, line) in lines.into_iter().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let line = line.as_ref().trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<_> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(GraphError::parse(
                line_no,
                ParseErrorKind::WrongFieldCount {
                    expected: 2,
                    found: fields.len(),
                },
            ));
        }
        let src: usize = parse_field(fields[0], line_no, 1)?;
        let dst: usize = parse_field(fields[1], line_no, 2)?;
        if seen.insert((src.min(dst), src.max(dst))) {
            edges.push((src, dst));
        } else {
            duplicates += 1;
        }
    }

    if duplicates > 0 {
        debug!("Skipped {} repeated edges", duplicates);
    }
    let original: Vec<VID> = edges
        .iter()
        .flat_map(|(src, dst)| [*src, *dst])
        .sorted_unstable()
        .dedup()
        .map(VID)
        .collect();
    let local: FxHashMap<usize, VID> = original
        .iter()
        .enumerate()
        .map(|(i, v)| (v.index(), VID(i)))
        .collect();
    let mut builder = GraphBuilder::new(original.len());
    for (src, dst) in edges {
        builder.add_edge(local[&src], local[&dst], 1);
    }
    Ok(NodeSubgraph::new(builder.build(), original))
}
