//! Error types for graph operations and social queries.

use kinship_core::ParseError;
use thiserror::Error;

/// Failures of the graph data structure itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex number outside `0..size`. Always a caller bug.
    #[error("vertex {vertex} is out of range for a graph of {size} vertices")]
    VertexOutOfRange { vertex: usize, size: usize },

    /// The adjacency matrix could not be allocated.
    #[error("cannot allocate an adjacency matrix for {vertices} vertices")]
    Allocation { vertices: usize },
}

/// Failures of a lookup-by-name query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// No vertex carries the requested label. The caller should ask again.
    #[error("member '{0}' does not exist")]
    MemberNotFound(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Failures while building a network from input files.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Two roster entries claim the same vertex.
    #[error("roster assigns vertex {index} more than once")]
    DuplicateIndex { index: usize },
}
