// Task display record

use super::agent::AgentId;
use serde::{Deserialize, Serialize};

/// Task status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Waiting to be picked up
    Pending,
    /// Being worked on
    InProgress,
    /// Finished
    Completed,
    /// Gave up
    Failed,
}

impl TaskStatus {
    /// Lowercase label with spaces ("in progress")
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
        }
    }
}

/// Task priority enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Low priority
    Low,
    /// Medium priority
    Medium,
    /// High priority
    High,
    /// Critical priority
    Critical,
}

impl TaskPriority {
    /// Lowercase label
    pub fn label(self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
            TaskPriority::Critical => "critical",
        }
    }
}

/// Task structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: String,
    /// Short title
    pub title: String,
    /// Owning agent (not validated to exist)
    pub agent_id: Option<AgentId>,
    /// Current status
    pub status: TaskStatus,
    /// Priority
    pub priority: TaskPriority,
    /// Optional longer description
    pub description: Option<String>,
}

impl Task {
    /// Create a task assigned to an agent
    pub fn assigned(
        id: &str,
        title: &str,
        agent_id: &str,
        status: TaskStatus,
        priority: TaskPriority,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            agent_id: Some(agent_id.to_string()),
            status,
            priority,
            description: None,
        }
    }
}
