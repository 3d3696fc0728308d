// Agent display record
// A fictitious worker shown on the dashboard; not an executing process

use serde::{Deserialize, Serialize};

/// Unique identifier for an agent
pub type AgentId = String;

/// Agent status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    /// Agent has nothing assigned
    Idle,
    /// Agent is busy with a task
    Working,
    /// Agent is flagged as failing (cosmetic only)
    Error,
    /// Agent is not reachable
    Offline,
}

impl AgentStatus {
    /// All statuses, in display order
    pub const ALL: [AgentStatus; 4] = [
        AgentStatus::Idle,
        AgentStatus::Working,
        AgentStatus::Error,
        AgentStatus::Offline,
    ];

    /// Capitalized label shown on status badges
    pub fn label(self) -> &'static str {
        match self {
            AgentStatus::Idle => "Idle",
            AgentStatus::Working => "Working",
            AgentStatus::Error => "Error",
            AgentStatus::Offline => "Offline",
        }
    }

    /// Lowercase tag used in generated feed text
    pub fn tag(self) -> &'static str {
        match self {
            AgentStatus::Idle => "idle",
            AgentStatus::Working => "working",
            AgentStatus::Error => "error",
            AgentStatus::Offline => "offline",
        }
    }
}

/// Agent structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agent {
    /// Unique identifier for the agent
    pub id: AgentId,
    /// Display name of the agent
    pub name: String,
    /// Role label (e.g. "Code Developer")
    pub role: String,
    /// Current status of the agent
    pub status: AgentStatus,
    /// Emoji avatar
    pub avatar: String,
    /// Capability tags (snake_case)
    pub capabilities: Vec<String>,
    /// What the agent is doing right now, if anything
    pub current_task: Option<String>,
    /// Freeform "last activity" text, e.g. "5 min ago"
    pub last_activity: String,
}

/// Avatar used when an agent has none or a reference cannot be resolved
pub const FALLBACK_AVATAR: &str = "🤖";

impl Agent {
    /// Create a freshly added agent: idle, generic role, single capability
    pub fn new_recruit(id: AgentId, name: String) -> Self {
        Self {
            id,
            name,
            role: "New Agent".to_string(),
            status: AgentStatus::Idle,
            avatar: FALLBACK_AVATAR.to_string(),
            capabilities: vec!["learning".to_string()],
            current_task: None,
            last_activity: "Just created".to_string(),
        }
    }

    /// Capability labels as shown on the card: at most `limit`, first `_` replaced by a space
    pub fn capability_labels(&self, limit: usize) -> Vec<String> {
        self.capabilities
            .iter()
            .take(limit)
            .map(|cap| cap.replacen('_', " ", 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recruit_shape() {
        let agent = Agent::new_recruit("a1".to_string(), "Scout".to_string());
        assert_eq!(agent.status, AgentStatus::Idle);
        assert_eq!(agent.role, "New Agent");
        assert_eq!(agent.avatar, "🤖");
        assert_eq!(agent.capabilities, vec!["learning"]);
        assert!(agent.current_task.is_none());
        assert_eq!(agent.last_activity, "Just created");
    }

    #[test]
    fn test_capability_labels() {
        let mut agent = Agent::new_recruit("a1".to_string(), "Scout".to_string());
        agent.capabilities = vec![
            "web_search".to_string(),
            "data_analysis_fast".to_string(),
            "reporting".to_string(),
            "extra".to_string(),
        ];
        assert_eq!(
            agent.capability_labels(3),
            vec!["web search", "data analysis_fast", "reporting"]
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(AgentStatus::Working.label(), "Working");
        assert_eq!(AgentStatus::Offline.tag(), "offline");
    }

    #[test]
    fn test_agent_serialization() {
        let agent = Agent::new_recruit("a1".to_string(), "Scout".to_string());
        let json = serde_json::to_string(&agent).unwrap();
        assert!(json.contains("\"status\":\"idle\""));
        let deserialized: Agent = serde_json::from_str(&json).unwrap();
        assert_eq!(agent, deserialized);
    }
}
