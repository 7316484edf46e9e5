//! HTTP transport
//!
//! Two flavors on one router:
//! - REST: `POST /tools` with `{tool, arguments}` returns `{result}`
//! - MCP: `POST /mcp` with a JSON-RPC message, same handling as stdio
//!
//! Plus read-only helpers: `GET /`, `GET /health`, `GET /advisors`,
//! `GET /advisors/{id}`.

use crate::board::AdvisoryBoard;
use crate::config::ServerConfig;
use crate::error::ToolError;
use crate::mcp;
use crate::tools;
use crate::types::Advisor;
use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state
pub struct AppState {
    pub board: AdvisoryBoard,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(board: AdvisoryBoard) -> Self {
        Self {
            board,
            started_at: Utc::now(),
        }
    }
}

/// Body of `POST /tools`
#[derive(Debug, Deserialize)]
pub struct ToolRequest {
    pub tool: String,
    #[serde(default)]
    pub arguments: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolResponse {
    pub result: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ToolError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(server_info))
        .route("/health", get(health))
        .route("/tools", post(execute_tool))
        .route("/mcp", post(mcp_message))
        .route("/advisors", get(list_advisors))
        .route("/advisors/{id}", get(get_advisor))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(config: &ServerConfig, board: AdvisoryBoard) -> Result<()> {
    let state = Arc::new(AppState::new(board));
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Advisory board listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

// ============================================================================
// HANDLERS
// ============================================================================

async fn server_info() -> Json<Value> {
    Json(json!({
        "name": "Virtual Advisory Board",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Consult with virtual versions of famous business leaders",
        "tools": tools::tool_summaries(),
    }))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "advisors": state.board.registry().len(),
        "started_at": state.started_at,
    }))
}

async fn execute_tool(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ToolRequest>,
) -> Result<Json<ToolResponse>, ToolError> {
    let result = state.board.call_tool(&request.tool, &request.arguments)?;
    tracing::info!(tool = %request.tool, "Tool executed successfully");
    Ok(Json(ToolResponse { result }))
}

/// Raw body so malformed JSON gets a JSON-RPC parse error, same as stdio
async fn mcp_message(State(state): State<Arc<AppState>>, body: String) -> Response {
    match mcp::handle_line(&state.board, &body) {
        Some(reply) => Json(reply).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn list_advisors(State(state): State<Arc<AppState>>) -> Json<Vec<Advisor>> {
    Json(state.board.registry().all().to_vec())
}

async fn get_advisor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Advisor>, StatusCode> {
    state
        .board
        .registry()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(Arc::new(AppState::new(AdvisoryBoard::default())))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_server_info_lists_tools() {
        let (status, body) = send(get_req("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Virtual Advisory Board");
        assert_eq!(body["tools"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["advisors"], 6);
    }

    #[tokio::test]
    async fn test_tools_consult() {
        let (status, body) = send(post_json(
            "/tools",
            json!({
                "tool": "consult_advisor",
                "arguments": {
                    "advisor_name": "cook",
                    "situation": "should I expand to Europe?",
                    "context": "Profitable in the US"
                }
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let result = body["result"].as_str().unwrap();
        assert!(result.contains("Advisory Session with Tim Cook"));
        assert!(result.contains("**Additional Context Considered:** Profitable in the US"));
    }

    #[tokio::test]
    async fn test_tools_without_arguments() {
        let (status, body) = send(post_json("/tools", json!({"tool": "list_advisors"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["result"]
            .as_str()
            .unwrap()
            .starts_with("Your Virtual Advisory Board Members:"));
    }

    #[tokio::test]
    async fn test_tools_unknown_tool_is_bad_request() {
        let (status, body) = send(post_json("/tools", json!({"tool": "fly", "arguments": {}}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Unknown tool: fly");
    }

    #[tokio::test]
    async fn test_tools_malformed_arguments_is_bad_request() {
        let (status, body) = send(post_json(
            "/tools",
            json!({"tool": "board_meeting", "arguments": "pricing"}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().starts_with("Invalid arguments for board_meeting"));
    }

    #[tokio::test]
    async fn test_mcp_route_tools_call() {
        let (status, body) = send(post_json(
            "/mcp",
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "tools/call",
                "params": {"name": "board_meeting", "arguments": {"topic": "pricing strategy"}}
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let text = body["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("**Topic:** pricing strategy"));
    }

    #[tokio::test]
    async fn test_mcp_route_notification_is_accepted() {
        let (status, body) = send(post_json(
            "/mcp",
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        ))
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert!(body.is_null());
    }

    #[tokio::test]
    async fn test_mcp_route_parse_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/mcp")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jsonrpc"], "2.0");
        assert!(body["id"].is_null());
        assert_eq!(body["error"]["code"], mcp::PARSE_ERROR);
    }

    #[tokio::test]
    async fn test_mcp_route_accepts_any_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/mcp")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(r#"{"jsonrpc":"2.0","id":9,"method":"ping"}"#))
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 9);
        assert!(body["result"].is_object());
    }

    #[tokio::test]
    async fn test_advisor_records() {
        let (status, body) = send(get_req("/advisors")).await;
        assert_eq!(status, StatusCode::OK);
        let advisors = body.as_array().unwrap();
        assert_eq!(advisors.len(), 6);
        assert_eq!(advisors[0]["id"], "tim_cook");

        let (status, body) = send(get_req("/advisors/art_gensler")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Art Gensler");

        let (status, _) = send(get_req("/advisors/steve_jobs")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
