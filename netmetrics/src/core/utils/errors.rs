use std::{io, path::PathBuf};

/// What was wrong with a line of a dataset file.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("missing header line")]
    MissingHeader,
    #[error("expected {expected} fields but found {found}")]
    WrongFieldCount { expected: usize, found: usize },
    #[error("field {field} is not a valid integer: {value:?}")]
    InvalidInteger { field: usize, value: String },
    #[error("cannot allocate a graph with {num_nodes} nodes")]
    TooManyNodes { num_nodes: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse line {line}: {reason}")]
    Parse {
        line: usize,
        #[source]
        reason: ParseErrorKind,
    },

    #[error("Node {node} on line {line} is outside of the declared range 0..{num_nodes}")]
    NodeOutOfRange {
        line: usize,
        node: i64,
        num_nodes: usize,
    },
}

impl GraphError {
    pub(crate) fn parse(line: usize, reason: ParseErrorKind) -> Self {
        GraphError::Parse { line, reason }
    }

    /// The 1-based line of the dataset the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            GraphError::Io { .. } => None,
            GraphError::Parse { line, .. } | GraphError::NodeOutOfRange { line, .. } => {
                Some(*line)
            }
        }
    }
}
