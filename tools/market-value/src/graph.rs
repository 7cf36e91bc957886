//! Graph assembly and the researcher entry point.

use std::sync::Arc;

use agent_graph::llm::DEFAULT_MAX_TOOL_ROUNDS;
use agent_graph::{
    AgentError, CompilationError, CompiledStateGraph, LlmClient, StateGraph, ToolSource, END,
    START,
};
use tracing::info;

use crate::node::{CallModelNode, NODE_ID};
use crate::state::{InputState, MarketValueState, OutputState};
use crate::tools::market_value_tools;

/// Builds START → `call_model_market_value` → END.
///
/// `llm` should declare the same tools that `tools` can execute.
pub fn build_market_value_graph(
    llm: Arc<dyn LlmClient>,
    tools: Arc<dyn ToolSource>,
    max_tool_rounds: usize,
) -> Result<CompiledStateGraph<MarketValueState>, CompilationError> {
    let node = CallModelNode::new(llm, tools).with_max_tool_rounds(max_tool_rounds);

    let mut graph = StateGraph::<MarketValueState>::new();
    graph
        .add_node(NODE_ID, Arc::new(node))
        .add_edge(START, NODE_ID)
        .add_edge(NODE_ID, END);
    graph.compile()
}

/// The compiled researcher graph with its model handle injected.
///
/// Holds no per-run state; each `invoke` starts from its own
/// `MarketValueState`, so one researcher can serve concurrent calls.
pub struct MarketValueResearcher {
    graph: CompiledStateGraph<MarketValueState>,
}

impl MarketValueResearcher {
    /// Researcher over `llm` with the `get_market_value` tool.
    pub fn new(llm: Arc<dyn LlmClient>) -> Result<Self, CompilationError> {
        Self::with_max_tool_rounds(llm, DEFAULT_MAX_TOOL_ROUNDS)
    }

    pub fn with_max_tool_rounds(
        llm: Arc<dyn LlmClient>,
        max_tool_rounds: usize,
    ) -> Result<Self, CompilationError> {
        let graph =
            build_market_value_graph(llm, Arc::new(market_value_tools()), max_tool_rounds)?;
        Ok(Self { graph })
    }

    /// Runs the graph on a fresh state built from `input`.
    pub async fn invoke(&self, input: InputState) -> Result<OutputState, AgentError> {
        let state = self.invoke_state(input.into()).await?;
        Ok(state.output())
    }

    /// Runs the graph on an existing state (e.g. to continue a conversation).
    pub async fn invoke_state(
        &self,
        state: MarketValueState,
    ) -> Result<MarketValueState, AgentError> {
        info!(
            article_len = state.article.len(),
            history = state.messages.len(),
            "invoking market value researcher"
        );
        self.graph.invoke(state).await
    }
}
