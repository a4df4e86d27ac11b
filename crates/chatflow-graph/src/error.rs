//! Error types for graph construction and checkpointing.

use thiserror::Error;

/// Result type alias for chatflow-graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors surfaced when validating a graph or persisting state.
///
/// Builder misuse (reserved node names, duplicate nodes, a second outgoing
/// edge from one node) panics instead: those are programming errors in the
/// wiring code, not recoverable conditions.
#[derive(Debug, Error)]
pub enum GraphError {
    /// No edge leaves `START`, so the graph cannot begin executing.
    #[error("graph has no entrypoint: add an edge from START to a node")]
    MissingEntrypoint,

    /// An edge references a node that was never declared.
    #[error("edge '{from}' -> '{to}' references unknown node '{node}'")]
    UnknownNode {
        /// Edge source.
        from: String,
        /// Edge target.
        to: String,
        /// The undeclared endpoint.
        node: String,
    },

    /// A declared node cannot be reached by following edges from `START`.
    #[error("node '{0}' is not reachable from START")]
    Unreachable(String),

    /// The edge chain loops back through an already-visited node, so
    /// execution would never terminate.
    #[error("edge chain revisits node '{0}'")]
    Cycle(String),

    /// Checkpoint payload could not be serialized or deserialized.
    #[error("checkpoint serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
