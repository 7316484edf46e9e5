//! MCP Server for the Virtual Advisory Board
//!
//! JSON-RPC 2.0 message handling shared by the stdio transport and the
//! `POST /mcp` HTTP route. Supported methods:
//! - `initialize` / `notifications/initialized`
//! - `ping`
//! - `tools/list`
//! - `tools/call`

use crate::board::AdvisoryBoard;
use crate::error::ToolError;
use crate::tools;
use anyhow::Result;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "virtual-advisory-board";

// JSON-RPC error codes
pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;

// ============================================================================
// MESSAGE HANDLING
// ============================================================================

/// Handle one JSON-RPC message.
///
/// Returns `None` for notifications, which never get a reply.
pub fn handle_message(board: &AdvisoryBoard, message: &Value) -> Option<Value> {
    let id = message.get("id").cloned();

    let Some(method) = message.get("method").and_then(|m| m.as_str()) else {
        return Some(error_response(
            id.unwrap_or(Value::Null),
            INVALID_REQUEST,
            "Invalid request: missing method",
        ));
    };

    // Notifications carry no id
    let Some(id) = id else {
        tracing::debug!(method, "Notification received");
        return None;
    };

    let params = message.get("params").cloned().unwrap_or(Value::Null);

    let response = match method {
        "initialize" => success_response(id, initialize_result()),
        "ping" => success_response(id, json!({})),
        "tools/list" => success_response(id, json!({ "tools": tools::get_tools() })),
        "tools/call" => match call_tool(board, &params) {
            Ok(result) => success_response(id, result),
            Err(e) => error_response(id, INVALID_PARAMS, &e.to_string()),
        },
        _ => {
            tracing::warn!(method, "Unknown method");
            error_response(id, METHOD_NOT_FOUND, &format!("Unknown method: {}", method))
        }
    };

    Some(response)
}

/// Handle one raw line of input
pub fn handle_line(board: &AdvisoryBoard, line: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(line) {
        Ok(message) => handle_message(board, &message),
        Err(e) => {
            tracing::warn!(error = %e, "Unparsable JSON-RPC message");
            Some(error_response(
                Value::Null,
                PARSE_ERROR,
                &format!("Parse error: {}", e),
            ))
        }
    }
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        },
        "instructions": "Consult with virtual versions of famous business leaders. \
            Use list_advisors to see the board, consult_advisor for one-on-one advice, \
            board_meeting for a full board discussion, and advisor_philosophy to learn \
            an advisor's background."
    })
}

fn call_tool(board: &AdvisoryBoard, params: &Value) -> Result<Value, ToolError> {
    let name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
    let arguments = params.get("arguments").unwrap_or(&Value::Null);

    let text = board.call_tool(name, arguments)?;
    tracing::info!(tool = %name, "Tool executed successfully");

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "isError": false
    }))
}

fn success_response(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result
    })
}

fn error_response(id: Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message }
    })
}

// ============================================================================
// STDIO TRANSPORT
// ============================================================================

/// Serve newline-delimited JSON-RPC until the reader hits EOF
pub async fn serve_lines<R, W>(board: &AdvisoryBoard, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(response) = handle_line(board, line) {
            let mut out = serde_json::to_vec(&response)?;
            out.push(b'\n');
            writer.write_all(&out).await?;
            writer.flush().await?;
        }
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}

/// Run the MCP server on stdin/stdout
pub async fn run_stdio(board: &AdvisoryBoard) -> Result<()> {
    tracing::info!(
        tools = tools::TOOL_NAMES.len(),
        advisors = board.registry().len(),
        "Server ready, listening on stdio"
    );
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    serve_lines(board, stdin, tokio::io::stdout()).await
}
