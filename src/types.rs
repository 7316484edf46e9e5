//! Core types for the Virtual Advisory Board
//!
//! An advisor is a fixed persona record. Records are built once when the
//! registry is constructed and never change afterwards.

use serde::{Deserialize, Deserializer, Serialize};

/// A member of the advisory board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisor {
    /// Stable short key, e.g. `tim_cook`
    pub id: String,
    /// Full name, e.g. "Tim Cook"
    pub name: String,
    /// One-line title
    pub role: String,
    /// Philosophy and approach
    pub background: String,
}

impl Advisor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            background: background.into(),
        }
    }
}

/// Treat an explicit `null` like a missing argument
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Arguments for `consult_advisor`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsultArgs {
    #[serde(deserialize_with = "null_as_empty")]
    pub advisor_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub situation: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub context: String,
}

/// Arguments for `board_meeting`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardMeetingArgs {
    #[serde(deserialize_with = "null_as_empty")]
    pub topic: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub background_info: String,
}

/// Arguments for `advisor_philosophy`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhilosophyArgs {
    #[serde(deserialize_with = "null_as_empty")]
    pub advisor_name: String,
}

/// A parsed tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    ListAdvisors,
    ConsultAdvisor(ConsultArgs),
    BoardMeeting(BoardMeetingArgs),
    AdvisorPhilosophy(PhilosophyArgs),
}

impl ToolCall {
    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::ListAdvisors => "list_advisors",
            ToolCall::ConsultAdvisor(_) => "consult_advisor",
            ToolCall::BoardMeeting(_) => "board_meeting",
            ToolCall::AdvisorPhilosophy(_) => "advisor_philosophy",
        }
    }
}
