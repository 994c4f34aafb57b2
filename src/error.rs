//! Error types shared by all algorithms in this crate.

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Conditions reported to the caller. All of them are recoverable values;
/// re-invocation with the same input yields the same outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The requested traversal origin is absent from every edge endpoint.
    #[error("start node not found in the graph")]
    StartNotFound,

    /// Spanning forest construction needs at least one vertex and one edge.
    #[error("the graph must have at least one vertex and one edge")]
    EmptyInput,

    /// The directed graph contains a cycle, so no topological order exists.
    /// This is a designed outcome of topological sorting, not a fault.
    #[error("cycle detected in the graph")]
    CycleDetected,
}
