use serde::{Deserialize, Serialize};

/// A tool invocation requested by the model.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ToolCall {
    pub id: String,
    pub function: ToolCallFunction,
    // Some compatible backends omit `type` on tool calls.
    #[serde(default)]
    pub r#type: ToolType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    Function,
}

impl Default for ToolType {
    fn default() -> Self {
        Self::Function
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ToolCallFunction {
    pub name: String,
    /// Raw JSON text exactly as transmitted.  Parsing the arguments is the
    /// caller's concern; the wire does not guarantee they are valid JSON.
    pub arguments: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn tool_call_decodes_with_and_without_type() {
        let tagged: ToolCall = serde_json::from_value(json!({
            "id": "call_1",
            "type": "function",
            "function": { "name": "lookup", "arguments": "{\"q\":\"rust\"}" },
        }))
        .unwrap();
        assert_eq!(tagged.r#type, ToolType::Function);

        let untagged: ToolCall = serde_json::from_value(json!({
            "id": "call_2",
            "function": { "name": "lookup", "arguments": "{}" },
        }))
        .unwrap();
        assert_eq!(untagged.r#type, ToolType::Function);
        assert_eq!(untagged.function.arguments, "{}");
    }
}
