//! Compiled state graph: immutable, supports invoke only.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::AgentError;
use crate::graph::END;

use super::Next;
use super::Node;

/// Compiled graph: immutable structure, supports invoke only.
///
/// Created by `StateGraph::compile()`. Runs from the entry node; after each
/// node uses the returned `Next` to follow the edge, jump to a node, or end.
/// Holds no per-run data, so one compiled graph can serve concurrent invokes.
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// Outgoing edge of every node on the chain.
    pub(super) next_of: HashMap<String, String>,
    pub(super) entry: String,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Runs the graph with the given state and returns the final state.
    ///
    /// - `Next::Continue`: follow the node's edge; stop when it leads to `END`.
    /// - `Next::Node(id)`: run the node with that id next (`END` stops).
    /// - `Next::End`: stop and return current state.
    pub async fn invoke(&self, state: S) -> Result<S, AgentError> {
        let mut state = state;
        let mut current_id = self.entry.clone();

        loop {
            let node = self
                .nodes
                .get(&current_id)
                .ok_or_else(|| AgentError::ExecutionFailed(format!("node not found: {current_id}")))?;
            debug!(node = %current_id, "running node");
            let (new_state, next) = node.run(state).await?;
            state = new_state;
            debug!(node = %current_id, next = ?next, "node finished");

            let target = match next {
                Next::End => return Ok(state),
                Next::Node(id) => id,
                Next::Continue => match self.next_of.get(&current_id) {
                    Some(to) => to.clone(),
                    None => return Ok(state),
                },
            };
            if target == END {
                return Ok(state);
            }
            current_id = target;
        }
    }

    /// Id of the first node run by `invoke`.
    pub fn entry(&self) -> &str {
        &self.entry
    }
}
