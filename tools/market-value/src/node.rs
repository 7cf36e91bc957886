//! Responder node: seed the conversation, ask the tool-bound model, record the answer.
//!
//! **Interaction**: Implements `agent_graph::Node<MarketValueState>`; holds a
//! `ToolCallingChat` over the injected `LlmClient` and the market value tools.

use std::sync::Arc;

use agent_graph::{AgentError, LlmClient, Message, Next, Node, ToolCallingChat, ToolSource};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::state::MarketValueState;

/// Id of the responder in the graph.
pub const NODE_ID: &str = "call_model_market_value";

/// Instruction prepended to every model call; never stored in the state.
pub const SYSTEM_PROMPT: &str =
    "You are an agent tasked with determining the market value of a player.";

/// Single-turn tool-augmented responder.
///
/// On an empty history the article becomes the first human message. The
/// model sees `[System, ...history]`; only its final answer is appended, so a
/// run adds two messages to an empty history and one otherwise.
pub struct CallModelNode {
    chat: ToolCallingChat,
}

impl CallModelNode {
    pub fn new(llm: Arc<dyn LlmClient>, tools: Arc<dyn ToolSource>) -> Self {
        Self {
            chat: ToolCallingChat::new(llm, tools),
        }
    }

    pub fn with_max_tool_rounds(mut self, max_rounds: usize) -> Self {
        self.chat = self.chat.with_max_rounds(max_rounds);
        self
    }
}

#[async_trait]
impl Node<MarketValueState> for CallModelNode {
    fn id(&self) -> &str {
        NODE_ID
    }

    async fn run(&self, state: MarketValueState) -> Result<(MarketValueState, Next), AgentError> {
        let MarketValueState {
            article, messages, ..
        } = state;

        let mut local = messages;
        if local.is_empty() {
            local.push(Message::human(article.clone()));
        }
        info!(history = local.len(), "calling model for market value");

        let mut request = Vec::with_capacity(local.len() + 1);
        request.push(Message::system(SYSTEM_PROMPT));
        request.extend(local.iter().cloned());

        let response = self.chat.invoke(&request).await?;
        debug!(answer = %response.content, "model answered");

        local.push(Message::ai(response.content.clone()));
        let state = MarketValueState {
            article,
            messages: local,
            agent_output: response.content,
        };
        Ok((state, Next::Continue))
    }
}
