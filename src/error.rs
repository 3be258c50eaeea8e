use thiserror::Error;

/// Errors raised while building or querying a [`crate::Graph`].
///
/// Vertex values are carried in their `Debug` rendering so the error type
/// stays independent of the vertex type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("invalid edge on line {line}: expected 2 or 3 fields, found {fields}")]
    InvalidEdgeFormat { line: usize, fields: usize },

    #[error("invalid edge cost on line {line}: {value:?}")]
    InvalidCost { line: usize, value: String },

    #[error("source vertex {0} does not exist in the graph")]
    UnknownSourceVertex(String),

    #[error("edge {start} -> {end} already exists")]
    DuplicateEdge { start: String, end: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;
