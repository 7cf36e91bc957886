//! Chat model client trait.

use async_trait::async_trait;

use crate::message::Message;

use super::{LlmError, LlmResponse};

/// Async chat model: ordered messages in, one response out.
///
/// Tools are bound when the client is built (e.g. `ChatOpenAI::with_tools`);
/// the response may then carry `tool_calls` that the caller must resolve.
///
/// **Interaction**: Implemented by `ChatOpenAI` and `MockLlm`; driven by
/// `ToolCallingChat`. Shared as `Arc<dyn LlmClient>` so one handle serves
/// every invocation.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// One request/response round with the model.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, LlmError>;
}
