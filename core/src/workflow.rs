//! Workflow builder and simulated executor
//!
//! A run walks the step list in order. Each step stays active for a fixed
//! delay, then completes with a placeholder output and the progress moves to
//! `(i + 1) / n * 100`. A run cannot fail; it only finishes, pauses or is
//! reset.

use crate::error::SimError;
use crate::state::{
    generate_id, Agent, AgentId, StepState, Workflow, WorkflowId, WorkflowStatus, WorkflowStep,
};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, warn};

/// Something observable that happened while advancing runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutorEvent {
    /// Step `index` of the workflow became active
    StepStarted {
        /// Workflow being run
        workflow_id: WorkflowId,
        /// Step index
        index: usize,
    },
    /// Step `index` finished and carries its output
    StepCompleted {
        /// Workflow being run
        workflow_id: WorkflowId,
        /// Step index
        index: usize,
    },
    /// Every step finished
    Finished {
        /// Workflow that completed
        workflow_id: WorkflowId,
    },
}

/// In-flight run of one workflow
#[derive(Debug, Clone)]
struct Run {
    step: usize,
    elapsed: Duration,
    paused: bool,
}

/// Workflow list, selection and in-flight runs
#[derive(Debug, Clone)]
pub struct WorkflowBoard {
    workflows: Vec<Workflow>,
    selected: Option<WorkflowId>,
    runs: HashMap<WorkflowId, Run>,
    step_delay: Duration,
}

impl WorkflowBoard {
    /// Create a board over the given workflows
    ///
    /// Workflows that arrive marked active (and have steps) are started
    /// right away so the status always matches a live run.
    pub fn new(workflows: Vec<Workflow>, step_delay: Duration) -> Self {
        let mut board = Self {
            workflows,
            selected: None,
            runs: HashMap::new(),
            step_delay,
        };
        let active: Vec<WorkflowId> = board
            .workflows
            .iter()
            .filter(|w| w.status == WorkflowStatus::Active && !w.steps.is_empty())
            .map(|w| w.id.clone())
            .collect();
        for id in active {
            if let Err(e) = board.run(&id) {
                warn!(workflow_id = %id, "Could not start active workflow: {}", e);
            }
        }
        for workflow in &mut board.workflows {
            if workflow.status == WorkflowStatus::Active && workflow.steps.is_empty() {
                workflow.status = WorkflowStatus::Draft;
            }
        }
        board
    }

    /// All workflows, in creation order
    pub fn workflows(&self) -> &[Workflow] {
        &self.workflows
    }

    /// Look up a workflow by ID
    pub fn workflow(&self, id: &str) -> Option<&Workflow> {
        self.workflows.iter().find(|w| w.id == id)
    }

    fn workflow_mut(&mut self, id: &str) -> Result<&mut Workflow, SimError> {
        self.workflows
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| SimError::UnknownWorkflow(id.to_string()))
    }

    /// Currently selected workflow
    pub fn selected(&self) -> Option<&Workflow> {
        self.selected.as_deref().and_then(|id| self.workflow(id))
    }

    /// Select a workflow for editing
    /// Returns true if the workflow was found and selected
    pub fn select(&mut self, id: &str) -> bool {
        if self.workflow(id).is_some() {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Whether the workflow has a run in flight (paused runs count)
    pub fn is_running(&self, id: &str) -> bool {
        self.runs.contains_key(id)
    }

    /// Create an empty draft workflow and select it
    /// Returns None if the name is blank
    pub fn create_workflow(&mut self, name: &str) -> Option<WorkflowId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = generate_id();
        self.workflows
            .push(Workflow::draft(id.clone(), name.to_string()));
        self.selected = Some(id.clone());
        info!(workflow_id = %id, name = %name, "Workflow created");
        Some(id)
    }

    /// Append a step to a workflow
    ///
    /// A blank action is a no-op (`Ok(None)`). The agent must be on the
    /// roster passed in. Steps cannot be added while the workflow runs.
    pub fn add_step(
        &mut self,
        workflow_id: &str,
        agent_id: &str,
        action: &str,
        input: &str,
        agents: &[Agent],
    ) -> Result<Option<String>, SimError> {
        let action = action.trim();
        if action.is_empty() {
            return Ok(None);
        }
        if !agents.iter().any(|a| a.id == agent_id) {
            return Err(SimError::UnknownAgent(agent_id.to_string()));
        }
        if self.is_running(workflow_id) {
            return Err(SimError::AlreadyRunning(workflow_id.to_string()));
        }
        let workflow = self.workflow_mut(workflow_id)?;
        let step_id = generate_id();
        workflow.steps.push(WorkflowStep::new(
            step_id.clone(),
            agent_id.to_string(),
            action.to_string(),
            input.trim().to_string(),
        ));
        info!(workflow_id, step_id = %step_id, action, "Workflow step added");
        Ok(Some(step_id))
    }

    /// Remove a step from a workflow that is not running
    pub fn remove_step(&mut self, workflow_id: &str, step_id: &str) -> Result<(), SimError> {
        if self.is_running(workflow_id) {
            return Err(SimError::AlreadyRunning(workflow_id.to_string()));
        }
        let workflow = self.workflow_mut(workflow_id)?;
        let index = workflow
            .steps
            .iter()
            .position(|s| s.id == step_id)
            .ok_or_else(|| SimError::UnknownStep(step_id.to_string()))?;
        workflow.steps.remove(index);
        Ok(())
    }

    /// Start running a workflow from its first step
    pub fn run(&mut self, workflow_id: &str) -> Result<(), SimError> {
        if self.is_running(workflow_id) {
            return Err(SimError::AlreadyRunning(workflow_id.to_string()));
        }
        let workflow = self.workflow_mut(workflow_id)?;
        if workflow.steps.is_empty() {
            return Err(SimError::EmptyWorkflow(workflow_id.to_string()));
        }
        workflow.clear_run_state();
        workflow.status = WorkflowStatus::Active;
        workflow.steps[0].state = StepState::Active;
        let steps = workflow.steps.len();
        self.runs.insert(
            workflow_id.to_string(),
            Run {
                step: 0,
                elapsed: Duration::ZERO,
                paused: false,
            },
        );
        info!(workflow_id, steps, "Workflow run started");
        Ok(())
    }

    /// Suspend a run; a paused run accumulates no time
    pub fn pause(&mut self, workflow_id: &str) -> Result<(), SimError> {
        self.set_paused(workflow_id, true)
    }

    /// Continue a paused run
    pub fn resume(&mut self, workflow_id: &str) -> Result<(), SimError> {
        self.set_paused(workflow_id, false)
    }

    fn set_paused(&mut self, workflow_id: &str, paused: bool) -> Result<(), SimError> {
        let run = self
            .runs
            .get_mut(workflow_id)
            .ok_or_else(|| SimError::NotRunning(workflow_id.to_string()))?;
        run.paused = paused;
        let workflow = self.workflow_mut(workflow_id)?;
        workflow.status = if paused {
            WorkflowStatus::Paused
        } else {
            WorkflowStatus::Active
        };
        info!(workflow_id, paused, "Workflow run toggled");
        Ok(())
    }

    /// Cancel any run and return the workflow to a clean draft
    pub fn reset(&mut self, workflow_id: &str) -> Result<(), SimError> {
        let workflow = self.workflow_mut(workflow_id)?;
        workflow.clear_run_state();
        workflow.status = WorkflowStatus::Draft;
        if self.runs.remove(workflow_id).is_some() {
            info!(workflow_id, "Workflow run cancelled");
        }
        Ok(())
    }

    /// Advance every unpaused run by `dt`
    ///
    /// Runs are visited in workflow list order. A long `dt` can complete
    /// several steps at once; events come back in the order they happened.
    pub fn advance(&mut self, dt: Duration, agents: &[Agent]) -> Vec<ExecutorEvent> {
        let mut events = Vec::new();
        let mut finished = Vec::new();
        let step_delay = self.step_delay.max(Duration::from_millis(1));

        for workflow in self.workflows.iter_mut() {
            let Some(run) = self.runs.get_mut(&workflow.id) else {
                continue;
            };
            if run.paused {
                continue;
            }
            let workflow_id = workflow.id.clone();
            run.elapsed += dt;
            while run.elapsed >= step_delay {
                run.elapsed -= step_delay;
                complete_step(workflow, run.step, agents);
                events.push(ExecutorEvent::StepCompleted {
                    workflow_id: workflow_id.clone(),
                    index: run.step,
                });
                run.step += 1;
                if run.step < workflow.steps.len() {
                    workflow.steps[run.step].state = StepState::Active;
                    events.push(ExecutorEvent::StepStarted {
                        workflow_id: workflow_id.clone(),
                        index: run.step,
                    });
                } else {
                    workflow.status = WorkflowStatus::Completed;
                    workflow.progress = 100;
                    events.push(ExecutorEvent::Finished {
                        workflow_id: workflow_id.clone(),
                    });
                    finished.push(workflow_id.clone());
                    info!(workflow_id = %workflow_id, name = %workflow.name, "Workflow run finished");
                    break;
                }
            }
        }

        for id in finished {
            self.runs.remove(&id);
        }
        let workflows = &self.workflows;
        self.runs.retain(|id, _| {
            let known = workflows.iter().any(|w| &w.id == id);
            if !known {
                warn!(workflow_id = %id, "Dropping run for a missing workflow");
            }
            known
        });
        events
    }
}

fn complete_step(workflow: &mut Workflow, index: usize, agents: &[Agent]) {
    let total = workflow.steps.len();
    let step = &mut workflow.steps[index];
    let agent_name = agents
        .iter()
        .find(|a| a.id == step.agent_id)
        .map(|a| a.name.as_str())
        .unwrap_or("unknown agent");
    step.output = Some(placeholder_output(&step.action, agent_name));
    step.state = StepState::Complete;
    workflow.progress = progress_percent(index + 1, total);
    info!(
        workflow_id = %workflow.id,
        step = index,
        progress = workflow.progress,
        "Workflow step completed"
    );
}

/// Output recorded on a step when the simulated run completes it
pub fn placeholder_output(action: &str, agent_name: &str) -> String {
    format!("✓ {action} completed by {agent_name}")
}

/// `done / total * 100`, rounded; an empty workflow is 0%
pub fn progress_percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (done as f64 / total as f64 * 100.0).round() as u8
}

/// Look up the agent a step is assigned to; None if it is not on the roster
pub fn resolve_agent<'a>(agents: &'a [Agent], agent_id: &AgentId) -> Option<&'a Agent> {
    agents.iter().find(|a| &a.id == agent_id)
}
