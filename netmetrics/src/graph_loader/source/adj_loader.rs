//! Loader for comma separated adjacency datasets.
//!
//! The first line declares the graph size as `<V>,<E>`, every following line is
//! one undirected edge `<u>,<v>,<w>`:
//!
//! ```text
//! 3,2
//! 0,1,5
//! 1,2,1
//! ```
//!
//! The header must be the very first line; blank lines are only tolerated after
//! it. Node ids must lie in `0..V`; nodes without any edge still exist in the
//! resulting graph. The weight must be a non-negative integer even though none of
//! the metrics in this crate look at it.
//!
//! # Example
//! ```no_run
//! use netmetrics::graph_loader::source::adj_loader::AdjLoader;
//!
//! let graph = AdjLoader::new("datasets/imdb_prodco.adj")
//!     .load()
//!     .expect("Dataset did not parse.");
//! println!("{} nodes, {} edges", graph.count_nodes(), graph.count_edges());
//! ```

use crate::{
    core::{
        utils::errors::{GraphError, ParseErrorKind},
        VID,
    },
    db::graph::{Graph, GraphBuilder},
};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::{info, warn};

/// Loads an adjacency dataset from a file.
#[derive(Debug, Clone)]
pub struct AdjLoader {
    path: PathBuf,
}

impl AdjLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file into a [Graph]. Fails on the first malformed line;
    /// nothing is returned for the lines before it.
    pub fn load(&self) -> Result<Graph, GraphError> {
        let io_err = |source| GraphError::Io {
            path: self.path.clone(),
            source,
        };
        let file = File::open(&self.path).map_err(io_err)?;
        let graph = load_adj_lines(BufReader::new(file).lines().map(|l| l.map_err(io_err)))?;
        info!(
            "Loaded {} with {} nodes and {} edges",
            self.path.display(),
            graph.count_nodes(),
            graph.count_edges()
        );
        Ok(graph)
    }
}

/// Parses an adjacency dataset held in memory.
pub fn load_adj_from_str(data: &str) -> Result<Graph, GraphError> {
    load_adj_lines(data.lines().map(Ok))
}

pub(crate) fn split_fields<'a>(
    line: &'a str,
    line_no: usize,
    expected: usize,
) -> Result<Vec<&'a str>, GraphError> {
    let fields: Vec<_> = line.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(GraphError::parse(
            line_no,
            ParseErrorKind::WrongFieldCount {
                expected,
                found: fields.len(),
            },
        ));
    }
    Ok(fields)
}

pub(crate) fn parse_field<T: FromStr>(
    value: &str,
    line_no: usize,
    field: usize,
) -> Result<T, GraphError> {
    value.parse().map_err(|_| {
        GraphError::parse(
            line_no,
            ParseErrorKind::InvalidInteger {
                field,
                value: value.to_owned(),
            },
        )
    })
}

fn check_node(node: i64, line_no: usize, num_nodes: usize) -> Result<VID, GraphError> {
    match usize::try_from(node) {
        Ok(id) if id < num_nodes => Ok(VID(id)),
        _ => Err(GraphError::NodeOutOfRange {
            line: line_no,
            node,
            num_nodes,
        }),
    }
}

fn load_adj_lines<I, S>(lines: I) -> Result<Graph, GraphError>
where
    I: IntoIterator<Item = Result<S, GraphError>>,
    S: AsRef<str>,
{
    let mut builder: Option<(GraphBuilder, usize, usize)> = None;
    let mut data_lines = 0;

    for (i, line) in lines.into_iter().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let line = line.as_ref().trim();
        match builder.as_mut() {
            None if line.is_empty() => {
                return Err(GraphError::parse(line_no, ParseErrorKind::MissingHeader));
            }
            None => {
                let fields = split_fields(line, line_no, 2)?;
                let num_nodes: usize = parse_field(fields[0], line_no, 1)?;
                let num_edges: usize = parse_field(fields[1], line_no, 2)?;
                let graph = GraphBuilder::try_new(num_nodes).map_err(|_| {
                    GraphError::parse(line_no, ParseErrorKind::TooManyNodes { num_nodes })
                })?;
                builder = Some((graph, num_nodes, num_edges));
            }
            Some(_) if line.is_empty() => continue,
            Some((builder, num_nodes, _)) => {
                let fields = split_fields(line, line_no, 3)?;
                let src: i64 = parse_field(fields[0], line_no, 1)?;
                let dst: i64 = parse_field(fields[1], line_no, 2)?;
                let weight: u64 = parse_field(fields[2], line_no, 3)?;
                let src = check_node(src, line_no, *num_nodes)?;
                let dst = check_node(dst, line_no, *num_nodes)?;
                builder.add_edge(src, dst, weight);
                data_lines += 1;
            }
        }
    }

    let (builder, _, num_edges) =
        builder.ok_or_else(|| GraphError::parse(1, ParseErrorKind::MissingHeader))?;
    if data_lines != num_edges {
        warn!(
            "Header declares {} edges but {} edge lines were found",
            num_edges, data_lines
        );
    }
    Ok(builder.build())
}

#[cfg(test)]
mod adj_loader_test {
    use super::load_adj_from_str;
    use crate::{
        core::utils::errors::{GraphError, ParseErrorKind},
        prelude::*,
    };
    use crate::test_utils::build_edge_list;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn render_adj(num_nodes: usize, edges: &[(usize, usize, u64)]) -> String {
        let mut text = format!("{},{}\n", num_nodes, edges.len());
        for (src, dst, weight) in edges {
            text.push_str(&format!("{},{},{}\n", src, dst, weight));
        }
        text
    }

    proptest! {
        #[test]
        fn reloading_gives_the_same_graph((num_nodes, edges) in build_edge_list(12, 30)) {
            let text = render_adj(num_nodes, &edges);
            let graph = load_adj_from_str(&text).unwrap();
            prop_assert_eq!(&graph, &load_adj_from_str(&text).unwrap());
            prop_assert_eq!(graph, Graph::from_edges(num_nodes, edges).unwrap());
        }
    }

    #[test]
    fn loads_header_and_edges() {
        let graph = load_adj_from_str("4,3\n0,1,2\n1,2,1\n2,0,7\n").unwrap();
        assert_eq!(graph.count_nodes(), 4);
        assert_eq!(graph.count_edges(), 3);
        assert_eq!(graph.neighbours(VID(0)), &[(VID(1), 2), (VID(2), 7)]);
        assert_eq!(graph.degree(VID(3)), 0);
    }

    #[test]
    fn tolerates_whitespace_and_blank_lines() {
        let graph = load_adj_from_str(" 2 , 1 \r\n\n0, 1, 1\r\n\n").unwrap();
        assert_eq!(graph.count_nodes(), 2);
        assert_eq!(graph.neighbour_ids(VID(1)), &[VID(0)]);
    }

    #[test]
    fn edge_count_mismatch_is_not_an_error() {
        let graph = load_adj_from_str("3,5\n0,1,1\n").unwrap();
        assert_eq!(graph.count_edges(), 1);
    }

    #[test]
    fn missing_header() {
        let err = load_adj_from_str("").unwrap_err();
        assert!(matches!(
            err,
            GraphError::Parse {
                line: 1,
                reason: ParseErrorKind::MissingHeader
            }
        ));
    }

    #[test]
    fn header_must_come_first() {
        let err = load_adj_from_str("\n\n2,1\n0,1,1\n").unwrap_err();
        assert!(matches!(
            err,
            GraphError::Parse {
                line: 1,
                reason: ParseErrorKind::MissingHeader
            }
        ));
    }

    #[test]
    fn huge_node_count_is_an_error() {
        let err = load_adj_from_str("18446744073709551615,0\n").unwrap_err();
        assert!(matches!(
            err,
            GraphError::Parse {
                line: 1,
                reason: ParseErrorKind::TooManyNodes {
                    num_nodes: usize::MAX
                }
            }
        ));
    }

    #[test]
    fn wrong_field_count() {
        let err = load_adj_from_str("3,2\n0,1,1\n1,2\n").unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert!(matches!(
            err,
            GraphError::Parse {
                reason: ParseErrorKind::WrongFieldCount {
                    expected: 3,
                    found: 2
                },
                ..
            }
        ));

        let err = load_adj_from_str("3\n").unwrap_err();
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn non_integer_field() {
        let err = load_adj_from_str("3,2\n0,x,1\n").unwrap_err();
        match err {
            GraphError::Parse {
                line,
                reason: ParseErrorKind::InvalidInteger { field, value },
            } => {
                assert_eq!(line, 2);
                assert_eq!(field, 2);
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error {other:?}"),
        }

        assert_eq!(load_adj_from_str("3,2\n0,1,1.5\n").unwrap_err().line(), Some(2));
        assert_eq!(load_adj_from_str("-3,2\n").unwrap_err().line(), Some(1));
    }

    #[test]
    fn out_of_range_nodes() {
        let err = load_adj_from_str("3,2\n0,1,1\n1,3,1\n").unwrap_err();
        assert!(matches!(
            err,
            GraphError::NodeOutOfRange {
                line: 3,
                node: 3,
                num_nodes: 3
            }
        ));

        let err = load_adj_from_str("3,1\n-1,0,1\n").unwrap_err();
        assert!(matches!(
            err,
            GraphError::NodeOutOfRange {
                line: 2,
                node: -1,
                ..
            }
        ));
    }

    #[test]
    fn empty_graph() {
        let graph = load_adj_from_str("0,0\n").unwrap();
        assert!(graph.is_empty());
    }
}
