// Chat message display record

use super::agent::AgentId;
use serde::{Deserialize, Serialize};

/// Who sent a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The person at the keyboard
    User,
    /// A simulated agent
    Agent,
    /// The dashboard itself
    System,
}

/// Chat message structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Unique identifier for the message
    pub id: String,
    /// Message text
    pub content: String,
    /// Sender tag
    pub sender: Sender,
    /// Agent that sent the message, for agent replies
    pub agent_id: Option<AgentId>,
    /// Agent display name, for agent replies
    pub agent_name: Option<String>,
    /// Formatted local time (HH:MM:SS)
    pub timestamp: String,
    /// Direct-message target, for user messages
    pub target_agent_id: Option<AgentId>,
}
