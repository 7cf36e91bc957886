//! Argument validation against a minimal JSON Schema.

use serde_json::Value;

use crate::error::ValidationError;

/// Checks that `args` is an object containing every key in `schema["required"]`.
///
/// A schema without `required` accepts any arguments.
pub fn validate_args(schema: &Value, args: &Value) -> Result<(), ValidationError> {
    let Some(req) = schema.get("required").and_then(Value::as_array) else {
        return Ok(());
    };
    let Some(obj) = args.as_object() else {
        return Err(ValidationError("args must be an object".into()));
    };
    for key in req.iter().filter_map(Value::as_str) {
        if !obj.contains_key(key) {
            return Err(ValidationError(format!("missing required field: {}", key)));
        }
    }
    Ok(())
}
