//! Error types for graph execution and tools.
//!
//! - `AgentError`: returned by `Node::run` and `CompiledStateGraph::invoke`
//! - `ToolError`: tool lookup, argument validation and execution
//! - `ValidationError`: produced by `validate_args`, converts into `ToolError`

use thiserror::Error;

use crate::llm::LlmError;

/// Error raised while running a node or a compiled graph.
///
/// Model and tool failures are wrapped rather than flattened to strings so
/// callers can still match on the cause.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Generic execution failure with a description.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
    /// The chat model call failed.
    #[error("llm: {0}")]
    Llm(#[from] LlmError),
    /// A tool requested by the model failed.
    #[error("tool: {0}")]
    Tool(#[from] ToolError),
    /// The model kept requesting tools past the configured limit.
    #[error("tool rounds exceeded: {0}")]
    ToolRoundsExceeded(usize),
}

/// Argument validation error, see `validate_args`.
#[derive(Debug, Error, Clone)]
#[error("validation failed: {0}")]
pub struct ValidationError(pub String);

/// Tool lookup and execution errors.
///
/// Returned by `Tool::execute`, `ToolRegistry::execute` and `ToolSource::call_tool`.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool registered under this name.
    #[error("tool not found: {0}")]
    NotFound(String),
    /// Arguments are not valid JSON, not an object, or miss a required field.
    #[error("validation failed: {0}")]
    ValidationFailed(String),
    /// The tool itself failed.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

impl From<ValidationError> for ToolError {
    fn from(e: ValidationError) -> Self {
        ToolError::ValidationFailed(e.0)
    }
}
