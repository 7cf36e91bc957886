//! State graph: nodes + edges from `START` to `END`, compile and invoke.
//!
//! Aligns with LangGraph `StateGraph`: add nodes and edges, compile, then
//! invoke with state. Edges form a single chain; there are no conditional
//! edges, but a node may still jump or stop early through `Next`.

mod compile_error;
mod compiled;
mod next;
mod node;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use next::Next;
pub use node::Node;
pub use state_graph::StateGraph;

/// Virtual entry node; `add_edge(START, id)` marks the first node to run.
pub const START: &str = "__start__";

/// Virtual exit node; `add_edge(id, END)` ends the run after `id`.
pub const END: &str = "__end__";
