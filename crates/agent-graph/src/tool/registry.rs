//! Tool registry: register by name, validate and execute by name.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ToolError;
use crate::tool::{validate_args, Tool, ToolCallContent, ToolSource, ToolSpec};

/// Tool registry keyed by tool name.
///
/// Names are kept sorted so `specs()` declares tools in a stable order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool; a tool with the same name is replaced.
    pub fn register(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        self.tools.insert(tool.name().to_string(), tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|b| b.as_ref())
    }

    /// Validates `args` against the tool schema, then runs the tool.
    pub fn execute(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
        validate_args(&tool.parameters_schema(), &args)?;
        tool.execute(args)
    }

    /// Declarations of all registered tools.
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools.values().map(|t| t.spec()).collect()
    }
}

#[async_trait]
impl ToolSource for ToolRegistry {
    async fn call_tool(&self, name: &str, arguments: Value) -> Result<ToolCallContent, ToolError> {
        let text = match self.execute(name, arguments)? {
            Value::String(s) => s,
            other => other.to_string(),
        };
        Ok(ToolCallContent { text })
    }
}
