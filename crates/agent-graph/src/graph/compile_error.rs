//! Graph compilation error.

use thiserror::Error;

/// Error when compiling a state graph.
///
/// Returned by `StateGraph::compile()`. Validation walks the chain from
/// `START` and checks that it reaches `END` through registered nodes only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompilationError {
    /// An edge endpoint was not registered via `add_node`.
    #[error("node not found: {0}")]
    NodeNotFound(String),
    /// No edge leaves `START`.
    #[error("missing entry edge from START")]
    MissingEntry,
    /// `START` connects directly to `END`; the chain has no node to run.
    #[error("START connects directly to END")]
    EmptyChain,
    /// An edge leaves `END` or enters `START`.
    #[error("edge {0} -> {1} uses a virtual endpoint the wrong way")]
    ReservedEndpoint(String, String),
    /// Two edges leave the same node; branching is not supported.
    #[error("duplicate outgoing edge from: {0}")]
    DuplicateEdge(String),
    /// The chain stops at a node with no outgoing edge.
    #[error("node has no outgoing edge: {0}")]
    MissingExit(String),
    /// The chain visits the same node twice.
    #[error("cycle at node: {0}")]
    Cycle(String),
}
