//! Conversation message types.
//!
//! Aligns with LangChain message roles: System (usually first), Human, AI and
//! Tool. Graph states keep `Vec<Message>` in insertion order; nodes only append.

use crate::llm::ToolCall;

/// Reply produced by the chat model.
///
/// `tool_calls` is non-empty only while the model is asking for tools; the
/// final answer of a turn carries none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiMessage {
    pub content: String,
    pub tool_calls: Vec<ToolCall>,
}

/// Result of one tool call, fed back to the model.
///
/// `call_id` must match the `ToolCall::id` of the preceding AI message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolMessage {
    pub call_id: String,
    pub content: String,
}

/// A single message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Instruction text; typically placed first in the list sent to the model.
    System(String),
    /// User-provided input.
    Human(String),
    /// Model output.
    Ai(AiMessage),
    /// Tool output answering an AI tool call.
    Tool(ToolMessage),
}

impl Message {
    /// Builds a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Builds a human message.
    pub fn human(content: impl Into<String>) -> Self {
        Self::Human(content.into())
    }

    /// Builds an AI message without tool calls.
    pub fn ai(content: impl Into<String>) -> Self {
        Self::Ai(AiMessage {
            content: content.into(),
            tool_calls: Vec::new(),
        })
    }

    /// Builds a tool result message for the call with `call_id`.
    pub fn tool(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Tool(ToolMessage {
            call_id: call_id.into(),
            content: content.into(),
        })
    }

    /// Text payload of the message, whatever its role.
    pub fn content(&self) -> &str {
        match self {
            Message::System(s) | Message::Human(s) => s,
            Message::Ai(m) => &m.content,
            Message::Tool(m) => &m.content,
        }
    }
}
