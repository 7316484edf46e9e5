//! Virtual Advisory Board server
//!
//! Run with no arguments for the MCP stdio server, `--serve` for HTTP, or one
//! of the one-shot commands below.

use advisory_board::{http, mcp, render, AdvisorRegistry, AdvisoryBoard, ServerConfig};
use anyhow::Result;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Virtual Advisory Board

Usage:
  advisory-board [--stdio]                         MCP server on stdin/stdout
  advisory-board --serve [--host=H] [--port=N]     HTTP server (env: HOST, PORT)
  advisory-board --tools                           Print MCP tool definitions
  advisory-board list                              List board members
  advisory-board philosophy <name>                 Show an advisor's philosophy
  advisory-board consult <name> <situation> [--context=TEXT]
  advisory-board board <topic> [--background=TEXT]";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let board = AdvisoryBoard::new(AdvisorRegistry::builtin());

    let command = args.get(1).map(|s| s.as_str()).unwrap_or("--stdio");
    match command {
        "--stdio" => {
            tracing::info!("Starting Virtual Advisory Board MCP server");
            mcp::run_stdio(&board).await?;
        }
        "--serve" => {
            let config = ServerConfig::load(&args[2..])?;
            http::serve(&config, board).await?;
        }
        "--tools" => {
            let tools = mcp_tools_json()?;
            println!("{}", tools);
        }
        "list" => {
            println!("{}", render::render_advisor_list(board.registry()));
        }
        "philosophy" => {
            let name = positional(&args[2..]).join(" ");
            let arguments = serde_json::json!({ "advisor_name": name });
            println!("{}", run_tool(&board, "advisor_philosophy", arguments)?);
        }
        "consult" => {
            let rest = positional(&args[2..]);
            let Some((name, situation)) = rest.split_first() else {
                eprintln!("{}", USAGE);
                std::process::exit(2);
            };
            let context = flag_value(&args[2..], "--context=").unwrap_or_default();
            let arguments = serde_json::json!({
                "advisor_name": name,
                "situation": situation.join(" "),
                "context": context,
            });
            println!("{}", run_tool(&board, "consult_advisor", arguments)?);
        }
        "board" => {
            let topic = positional(&args[2..]).join(" ");
            let background = flag_value(&args[2..], "--background=").unwrap_or_default();
            let arguments = serde_json::json!({ "topic": topic, "background_info": background });
            println!("{}", run_tool(&board, "board_meeting", arguments)?);
        }
        "--help" | "-h" | "help" => {
            println!("{}", USAGE);
        }
        other => {
            eprintln!("Unknown command: {}\n\n{}", other, USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Logs always go to stderr; stdout belongs to the MCP transport.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_tool(board: &AdvisoryBoard, name: &str, arguments: serde_json::Value) -> Result<String> {
    Ok(board.call_tool(name, &arguments)?)
}

fn mcp_tools_json() -> Result<String> {
    let tools = advisory_board::get_tools();
    Ok(serde_json::to_string_pretty(&tools)?)
}

/// Flags the one-shot commands understand
const VALUE_FLAGS: [&str; 2] = ["--context=", "--background="];

/// Everything except the known value flags; other `--words` stay in the text
fn positional(args: &[String]) -> Vec<String> {
    args.iter()
        .filter(|a| !VALUE_FLAGS.iter().any(|flag| a.starts_with(*flag)))
        .cloned()
        .collect()
}

fn flag_value(args: &[String], prefix: &str) -> Option<String> {
    args.iter()
        .find_map(|a| a.strip_prefix(prefix))
        .map(String::from)
}
