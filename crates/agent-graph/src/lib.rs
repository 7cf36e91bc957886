//! LangGraph-style minimal agent runtime: state in, state out.
//!
//! Build a `StateGraph` of `Node`s joined by edges from `START` to `END`,
//! compile it and `invoke` it with a state value. Chat models implement
//! `LlmClient`; `ToolCallingChat` resolves the tool calls they return against a
//! `ToolSource` such as `ToolRegistry`.

pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod tool;

pub use error::{AgentError, ToolError, ValidationError};
pub use graph::{CompilationError, CompiledStateGraph, Next, Node, StateGraph, END, START};
pub use llm::{
    ChatOpenAI, LlmClient, LlmError, LlmResponse, MockLlm, OpenAiConfig, ToolCall,
    ToolCallingChat, Usage,
};
pub use message::{AiMessage, Message, ToolMessage};
pub use tool::{Tool, ToolCallContent, ToolRegistry, ToolSource, ToolSpec};
