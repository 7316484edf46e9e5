//! Virtual Advisory Board
//!
//! A tool server that lets an agent (or a person with curl) consult a fixed
//! board of six business personas. Four tools, one shared engine, three ways
//! in.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use advisory_board::{AdvisoryBoard, AdvisorRegistry};
//! use serde_json::json;
//!
//! let board = AdvisoryBoard::new(AdvisorRegistry::builtin());
//! let text = board.call_tool(
//!     "consult_advisor",
//!     &json!({"advisor_name": "buffett", "situation": "should we raise prices?"}),
//! )?;
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  ┌──────────────────┐  ┌──────────────┐
//! │ MCP (stdio)  │  │ POST /mcp        │  │ POST /tools  │
//! └──────┬───────┘  └────────┬─────────┘  └──────┬───────┘
//!        └───────────────────┼───────────────────┘
//!                            ▼
//!              AdvisoryBoard::call_tool()
//!              parse → registry lookup → render
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod http;
pub mod mcp;
pub mod registry;
pub mod render;
pub mod tools;
pub mod types;

pub use board::AdvisoryBoard;
pub use config::ServerConfig;
pub use error::{RegistryError, ToolError};
pub use registry::{AdvisorNotFound, AdvisorRegistry};
pub use tools::{get_tools, parse_tool_call};
pub use types::*;
