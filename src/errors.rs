use thiserror::Error;


/// Faults surfaced to the caller.
/// A missing path is not a fault: searches return `None` / an empty list for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("node not found: {0}")]
    NodeNotFound(String), // source or goal is not in the graph

    #[error("invalid graph: {0}")]
    InvalidGraph(String), // rejected at construction

    #[error("no edge between {from} and {to}")]
    NotAdjacent { from: String, to: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
