//! The `get_market_value` tool backed by a fixed in-memory table.

use agent_graph::{Tool, ToolError, ToolRegistry};
use serde_json::Value;

/// Returned for players missing from the table.
pub const NOT_AVAILABLE: &str = "Market value information not available.";

const MARKET_VALUES: &[(&str, &str)] = &[
    ("Lionel Messi", "€50 million"),
    ("Cristiano Ronaldo", "€30 million"),
];

/// Looks up a player's market value by exact name.
pub fn get_market_value(player_name: &str) -> String {
    MARKET_VALUES
        .iter()
        .find(|(name, _)| *name == player_name)
        .map_or(NOT_AVAILABLE, |&(_, value)| value)
        .to_string()
}

/// `get_market_value` exposed to the model, argument `player_name: string`.
#[derive(Debug, Default)]
pub struct GetMarketValueTool;

impl Tool for GetMarketValueTool {
    fn name(&self) -> &str {
        "get_market_value"
    }

    fn description(&self) -> &str {
        "Gets current market value of a player"
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "player_name": { "type": "string", "description": "Full name of the player, e.g. Lionel Messi" }
            },
            "required": ["player_name"]
        })
    }

    fn execute(&self, args: Value) -> Result<Value, ToolError> {
        let player_name = args
            .get("player_name")
            .and_then(Value::as_str)
            .ok_or_else(|| ToolError::ValidationFailed("'player_name' must be a string".into()))?;
        Ok(Value::String(get_market_value(player_name)))
    }
}

/// Registry holding exactly the tools bound to the researcher's model.
pub fn market_value_tools() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(GetMarketValueTool));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_players() {
        assert_eq!(get_market_value("Lionel Messi"), "€50 million");
        assert_eq!(get_market_value("Cristiano Ronaldo"), "€30 million");
    }

    #[test]
    fn unknown_player() {
        assert_eq!(
            get_market_value("Unknown Player"),
            "Market value information not available."
        );
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(get_market_value("lionel messi"), NOT_AVAILABLE);
        assert_eq!(get_market_value("Messi"), NOT_AVAILABLE);
    }

    #[test]
    fn tool_executes_lookup() {
        let out = GetMarketValueTool
            .execute(serde_json::json!({"player_name": "Cristiano Ronaldo"}))
            .unwrap();
        assert_eq!(out, serde_json::json!("€30 million"));
    }

    #[test]
    fn tool_rejects_non_string_name() {
        let err = GetMarketValueTool
            .execute(serde_json::json!({"player_name": 10}))
            .unwrap_err();
        assert!(matches!(err, ToolError::ValidationFailed(_)));
    }

    #[test]
    fn registry_declares_single_tool() {
        let registry = market_value_tools();
        let specs = registry.specs();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].name, "get_market_value");
        assert_eq!(
            specs[0].description.as_deref(),
            Some("Gets current market value of a player")
        );
        assert_eq!(specs[0].input_schema["required"][0], "player_name");
    }
}
