//! Tool-calling chat: invoke the model, run the tools it asks for, repeat.
//!
//! The intermediate assistant/tool messages live only in a local transcript;
//! callers see the final reply, as with a LangChain model that has tools bound.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{AgentError, ToolError};
use crate::message::{AiMessage, Message};
use crate::tool::ToolSource;

use super::{LlmClient, LlmResponse, ToolCall};

/// Tool rounds allowed per `invoke` unless overridden.
pub const DEFAULT_MAX_TOOL_ROUNDS: usize = 8;

/// A chat model paired with the tools it may call.
///
/// The model must have been built with the same tools declared (e.g.
/// `ChatOpenAI::with_tools(registry.specs())`), otherwise it never asks for them.
///
/// **Interaction**: Used by graph nodes that need a final answer; calls
/// `LlmClient::invoke` and `ToolSource::call_tool`.
pub struct ToolCallingChat {
    llm: Arc<dyn LlmClient>,
    tools: Arc<dyn ToolSource>,
    max_rounds: usize,
}

impl ToolCallingChat {
    pub fn new(llm: Arc<dyn LlmClient>, tools: Arc<dyn ToolSource>) -> Self {
        Self {
            llm,
            tools,
            max_rounds: DEFAULT_MAX_TOOL_ROUNDS,
        }
    }

    /// Caps the number of tool rounds before giving up.
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Runs the model until it replies without tool calls and returns that reply.
    ///
    /// Each round appends the tool-calling AI message and one tool message per
    /// call to a local copy of `messages`. A failing tool aborts the whole
    /// invocation; more than `max_rounds` rounds yields
    /// `AgentError::ToolRoundsExceeded`.
    pub async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        let mut transcript = messages.to_vec();
        let mut rounds = 0;
        loop {
            let response = self.llm.invoke(&transcript).await?;
            if response.tool_calls.is_empty() {
                if response.content.is_empty() {
                    warn!("model returned no content");
                }
                return Ok(response);
            }
            if rounds >= self.max_rounds {
                return Err(AgentError::ToolRoundsExceeded(self.max_rounds));
            }
            rounds += 1;

            let calls = response.tool_calls.clone();
            transcript.push(Message::Ai(AiMessage {
                content: response.content,
                tool_calls: response.tool_calls,
            }));
            for call in &calls {
                let output = self.call(call).await?;
                transcript.push(Message::tool(call.id.clone(), output));
            }
        }
    }

    async fn call(&self, call: &ToolCall) -> Result<String, ToolError> {
        let args = parse_arguments(call)?;
        debug!(tool = %call.name, id = %call.id, args = %args, "calling tool");
        let result = self.tools.call_tool(&call.name, args).await?;
        debug!(tool = %call.name, result = %result.text, "tool returned");
        Ok(result.text)
    }
}

fn parse_arguments(call: &ToolCall) -> Result<Value, ToolError> {
    if call.arguments.trim().is_empty() {
        return Ok(serde_json::json!({}));
    }
    serde_json::from_str(&call.arguments).map_err(|e| {
        ToolError::ValidationFailed(format!("invalid arguments for {}: {}", call.name, e))
    })
}
