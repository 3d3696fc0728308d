// State management module
// Data model records and the root dashboard state

pub mod agent;
pub mod app_state;
pub mod message;
pub mod task;
pub mod workflow;

pub use agent::{Agent, AgentId, AgentStatus, FALLBACK_AVATAR};
pub use app_state::{task_completion_percent, Dashboard, StatusSummary};
pub use message::{ChatMessage, Sender};
pub use task::{Task, TaskPriority, TaskStatus};
pub use workflow::{StepState, Workflow, WorkflowId, WorkflowStatus, WorkflowStep};

use uuid::Uuid;

/// Generate a new unique ID for any record
/// Uses UUID v4 for uniqueness
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
