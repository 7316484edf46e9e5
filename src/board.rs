//! Advisory Board Engine
//!
//! Owns the registry and turns a tool call into response text. Every
//! transport goes through [`AdvisoryBoard::call_tool`].

use crate::error::ToolError;
use crate::registry::AdvisorRegistry;
use crate::render;
use crate::tools;
use crate::types::ToolCall;
use serde_json::Value;

/// The board the transports talk to
#[derive(Debug, Clone, Default)]
pub struct AdvisoryBoard {
    registry: AdvisorRegistry,
}

impl AdvisoryBoard {
    pub fn new(registry: AdvisorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &AdvisorRegistry {
        &self.registry
    }

    /// Parse and run a tool by name.
    ///
    /// An advisor miss is a successful result; only protocol problems error.
    pub fn call_tool(&self, name: &str, arguments: &Value) -> Result<String, ToolError> {
        let call = tools::parse_tool_call(name, arguments).inspect_err(|e| {
            tracing::warn!(tool = %name, error = %e, "Rejected tool call");
        })?;
        tracing::debug!(tool = %name, args = ?call, "Tool called");
        Ok(self.execute(&call))
    }

    /// Run an already-parsed tool call
    pub fn execute(&self, call: &ToolCall) -> String {
        match call {
            ToolCall::ListAdvisors => render::render_advisor_list(&self.registry),
            ToolCall::ConsultAdvisor(args) => {
                match self.registry.lookup_by_name_fragment(&args.advisor_name) {
                    Ok(advisor) => {
                        render::render_consultation(advisor, &args.situation, &args.context)
                    }
                    Err(miss) => miss.to_string(),
                }
            }
            ToolCall::BoardMeeting(args) => {
                render::render_board_meeting(&args.topic, &args.background_info)
            }
            ToolCall::AdvisorPhilosophy(args) => {
                match self.registry.lookup_by_name_fragment(&args.advisor_name) {
                    Ok(advisor) => render::render_philosophy(advisor),
                    Err(miss) => miss.to_string(),
                }
            }
        }
    }
}
