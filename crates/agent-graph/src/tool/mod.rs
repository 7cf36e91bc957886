//! Tools the model may call.
//!
//! - `Tool`: a named function with a JSON schema for its arguments
//! - `ToolRegistry`: string-keyed dispatch table, also a `ToolSource`
//! - `ToolSource`: async call seam used by `ToolCallingChat`
//! - `validate_args`: checks `required` fields before a tool runs

mod registry;
mod validation;

pub use registry::ToolRegistry;
pub use validation::validate_args;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ToolError;

/// Tool declaration sent to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSpec {
    pub name: String,
    /// Human-readable description the model uses to decide when to call it.
    pub description: Option<String>,
    /// JSON Schema of the arguments object.
    pub input_schema: Value,
}

/// Text result of one tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCallContent {
    pub text: String,
}

/// A synchronous tool.
///
/// `parameters_schema` is a minimal JSON Schema
/// (`{"type":"object","properties":{...},"required":[...]}`), used both for the
/// model-facing declaration and for `validate_args`.
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn parameters_schema(&self) -> Value;

    /// Runs the tool with already-validated arguments.
    fn execute(&self, args: Value) -> Result<Value, ToolError>;

    /// Declaration of this tool for `ChatOpenAI::with_tools`.
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: Some(self.description().to_string()),
            input_schema: self.parameters_schema(),
        }
    }
}

/// Source of callable tools.
///
/// **Interaction**: `ToolCallingChat` calls `call_tool` for every tool call
/// returned by the model. Implemented by `ToolRegistry`.
#[async_trait]
pub trait ToolSource: Send + Sync {
    async fn call_tool(&self, name: &str, arguments: Value) -> Result<ToolCallContent, ToolError>;
}
