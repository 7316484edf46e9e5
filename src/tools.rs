//! Tool surface shared by every transport
//!
//! Four tools, one argument bag each. Parsing turns a tool name plus a JSON
//! argument object into a typed [`ToolCall`]; anything the surface does not
//! understand becomes a [`ToolError`].

use crate::error::ToolError;
use crate::types::ToolCall;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

pub const TOOL_NAMES: [&str; 4] = [
    "list_advisors",
    "consult_advisor",
    "board_meeting",
    "advisor_philosophy",
];

// ============================================================================
// TOOL DEFINITIONS
// ============================================================================

/// MCP tool definitions with JSON-schema input descriptions
pub fn get_tools() -> Vec<Value> {
    vec![
        json!({
            "name": "list_advisors",
            "description": "Get list of advisory board members",
            "inputSchema": {
                "type": "object",
                "properties": {}
            }
        }),
        json!({
            "name": "consult_advisor",
            "description": "Consult with a specific advisor. The advisor is matched by any part of their name, case-insensitively.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "advisor_name": {
                        "type": "string",
                        "description": "Name (or part of the name) of the advisor, e.g. 'Buffett'"
                    },
                    "situation": {
                        "type": "string",
                        "description": "The business situation or question you need advice on"
                    },
                    "context": {
                        "type": "string",
                        "description": "Optional additional context about your business"
                    }
                },
                "required": ["advisor_name", "situation"]
            }
        }),
        json!({
            "name": "board_meeting",
            "description": "Hold virtual board meeting",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "topic": {
                        "type": "string",
                        "description": "The topic or decision for the board to discuss"
                    },
                    "background_info": {
                        "type": "string",
                        "description": "Optional background information for the board"
                    }
                },
                "required": ["topic"]
            }
        }),
        json!({
            "name": "advisor_philosophy",
            "description": "Learn advisor's background",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "advisor_name": {
                        "type": "string",
                        "description": "Name (or part of the name) of the advisor"
                    }
                },
                "required": ["advisor_name"]
            }
        }),
    ]
}

/// `{name, description}` pairs for the server info endpoint
pub fn tool_summaries() -> Vec<Value> {
    get_tools()
        .into_iter()
        .map(|tool| {
            json!({
                "name": tool["name"],
                "description": tool["description"],
            })
        })
        .collect()
}

// ============================================================================
// PARSING
// ============================================================================

/// Parse a tool name and argument bag.
///
/// `null` arguments count as an empty bag. Missing string arguments default
/// to `""` and unknown keys are ignored.
pub fn parse_tool_call(name: &str, arguments: &Value) -> Result<ToolCall, ToolError> {
    match name {
        "list_advisors" => {
            object_args(name, arguments)?;
            Ok(ToolCall::ListAdvisors)
        }
        "consult_advisor" => Ok(ToolCall::ConsultAdvisor(decode(name, arguments)?)),
        "board_meeting" => Ok(ToolCall::BoardMeeting(decode(name, arguments)?)),
        "advisor_philosophy" => Ok(ToolCall::AdvisorPhilosophy(decode(name, arguments)?)),
        _ => Err(ToolError::UnknownTool(name.to_string())),
    }
}

/// Accept an object or `null` (an empty bag)
fn object_args(tool: &str, arguments: &Value) -> Result<Value, ToolError> {
    match arguments {
        Value::Null => Ok(Value::Object(Map::new())),
        Value::Object(_) => Ok(arguments.clone()),
        other => Err(ToolError::InvalidArguments {
            tool: tool.to_string(),
            reason: format!("expected an object, got {}", json_kind(other)),
        }),
    }
}

fn decode<T: DeserializeOwned>(tool: &str, arguments: &Value) -> Result<T, ToolError> {
    let args = object_args(tool, arguments)?;
    serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments {
        tool: tool.to_string(),
        reason: e.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
