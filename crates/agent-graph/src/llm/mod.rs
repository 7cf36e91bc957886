//! Chat model clients and response types.
//!
//! - `LlmClient`: async chat interface, messages in, `LlmResponse` out
//! - `ChatOpenAI`: OpenAI-compatible Chat Completions client
//! - `MockLlm`: scripted client for tests
//! - `ToolCallingChat`: resolves tool calls against a `ToolSource` until the model answers

mod client;
mod error;
mod mock;
mod openai;
mod tool_calling;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use mock::MockLlm;
pub use openai::{ChatOpenAI, OpenAiConfig, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use tool_calling::{ToolCallingChat, DEFAULT_MAX_TOOL_ROUNDS};
pub use types::{LlmResponse, ToolCall, Usage};
