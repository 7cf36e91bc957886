//! State graph builder: nodes plus `START → ... → END` edges.
//!
//! Add nodes with `add_node`, connect them with `add_edge`, then `compile` to
//! get a `CompiledStateGraph`.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::CompiledStateGraph;
use crate::graph::node::Node;
use crate::graph::{END, START};

/// State graph: nodes plus a single chain of edges.
///
/// Generic over state type `S`. Build with `add_node` / `add_edge`, then
/// `compile()` to obtain an executable graph.
///
/// **Interaction**: Accepts `Arc<dyn Node<S>>`; produces `CompiledStateGraph<S>`.
pub struct StateGraph<S> {
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// Edges in insertion order, as (from, to).
    edges: Vec<(String, String)>,
}

impl<S> Default for StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a node; replaces any node registered under the same id.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node<S>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Adds an edge `from → to`. Use `START` / `END` for the virtual endpoints.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.edges.push((from.into(), to.into()));
        self
    }

    /// Validates the chain and builds the executable graph.
    ///
    /// The chain must start at `START`, visit each node at most once, have
    /// exactly one outgoing edge per node and terminate at `END`. Nodes that
    /// are registered but not on the chain are kept as `Next::Node` targets.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        let mut next_of: HashMap<String, String> = HashMap::new();
        for (from, to) in &self.edges {
            if from == END || to == START {
                return Err(CompilationError::ReservedEndpoint(from.clone(), to.clone()));
            }
            for endpoint in [from, to] {
                if endpoint != START && endpoint != END && !self.nodes.contains_key(endpoint) {
                    return Err(CompilationError::NodeNotFound(endpoint.clone()));
                }
            }
            if next_of.insert(from.clone(), to.clone()).is_some() {
                return Err(CompilationError::DuplicateEdge(from.clone()));
            }
        }

        let entry = next_of
            .get(START)
            .cloned()
            .ok_or(CompilationError::MissingEntry)?;
        if entry == END {
            return Err(CompilationError::EmptyChain);
        }

        let mut seen = HashSet::new();
        let mut current = entry.clone();
        while current != END {
            if !seen.insert(current.clone()) {
                return Err(CompilationError::Cycle(current));
            }
            current = next_of
                .get(&current)
                .cloned()
                .ok_or_else(|| CompilationError::MissingExit(current.clone()))?;
        }

        next_of.remove(START);
        Ok(CompiledStateGraph {
            nodes: self.nodes,
            next_of,
            entry,
        })
    }
}
