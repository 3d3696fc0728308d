// Workflow display records
// An ordered list of labeled steps; execution is simulated by the workflow board

use super::agent::AgentId;
use serde::{Deserialize, Serialize};

/// Unique identifier for a workflow
pub type WorkflowId = String;

/// Workflow status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    /// Being edited, never run
    Draft,
    /// Currently running
    Active,
    /// Every step finished
    Completed,
    /// Run suspended mid-way
    Paused,
}

impl WorkflowStatus {
    /// Lowercase label
    pub fn label(self) -> &'static str {
        match self {
            WorkflowStatus::Draft => "draft",
            WorkflowStatus::Active => "active",
            WorkflowStatus::Completed => "completed",
            WorkflowStatus::Paused => "paused",
        }
    }
}

/// Progress of a single step through a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    /// Not reached yet
    #[default]
    Pending,
    /// Currently executing
    Active,
    /// Finished, output filled in
    Complete,
}

/// Workflow step structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowStep {
    /// Unique identifier within the workflow
    pub id: String,
    /// Agent performing the step (not validated to exist)
    pub agent_id: AgentId,
    /// Action label, e.g. "Research topic"
    pub action: String,
    /// Input description
    pub input: String,
    /// Output, filled in only by a run
    pub output: Option<String>,
    /// Run progress of this step
    #[serde(default)]
    pub state: StepState,
}

impl WorkflowStep {
    /// Create a pending step
    pub fn new(id: String, agent_id: AgentId, action: String, input: String) -> Self {
        Self {
            id,
            agent_id,
            action,
            input,
            output: None,
            state: StepState::Pending,
        }
    }
}

/// Workflow structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workflow {
    /// Unique identifier for the workflow
    pub id: WorkflowId,
    /// Display name
    pub name: String,
    /// Current status
    pub status: WorkflowStatus,
    /// Ordered steps
    pub steps: Vec<WorkflowStep>,
    /// Run progress percentage (0..=100)
    pub progress: u8,
}

impl Workflow {
    /// Create an empty draft workflow
    pub fn draft(id: WorkflowId, name: String) -> Self {
        Self {
            id,
            name,
            status: WorkflowStatus::Draft,
            steps: Vec::new(),
            progress: 0,
        }
    }

    /// Number of completed steps
    pub fn completed_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.state == StepState::Complete)
            .count()
    }

    /// Index of the active step, if a run is mid-way
    pub fn active_step(&self) -> Option<usize> {
        self.steps.iter().position(|s| s.state == StepState::Active)
    }

    /// Return every step to pending and clear outputs
    pub fn clear_run_state(&mut self) {
        for step in &mut self.steps {
            step.state = StepState::Pending;
            step.output = None;
        }
        self.progress = 0;
    }
}
