// Root dashboard state
// Agents, tasks and the uptime clock; everything else hangs off the simulation

use super::agent::{Agent, AgentId, AgentStatus};
use super::generate_id;
use super::task::{Task, TaskStatus};
use std::time::Duration;
use tracing::info;

/// The four counters shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSummary {
    /// Agents currently working
    pub active_agents: usize,
    /// Tasks still pending
    pub pending_tasks: usize,
    /// Tasks completed
    pub completed_tasks: usize,
    /// Uptime formatted as HH:MM:SS
    pub uptime: String,
}

/// Main dashboard state
/// Agents are kept in insertion order, the order cards are shown in
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    /// Agent roster
    pub agents: Vec<Agent>,
    /// Task queue
    pub tasks: Vec<Task>,
    /// Time the dashboard has been running
    pub uptime: Duration,
}

impl Dashboard {
    /// Create a dashboard with the given roster and tasks
    pub fn new(agents: Vec<Agent>, tasks: Vec<Task>) -> Self {
        Self {
            agents,
            tasks,
            uptime: Duration::ZERO,
        }
    }

    /// Add a freshly recruited agent
    /// Returns the new agent's ID, or None if the name is blank
    pub fn add_agent(&mut self, name: &str) -> Option<AgentId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = generate_id();
        self.agents
            .push(Agent::new_recruit(id.clone(), name.to_string()));
        info!(agent_id = %id, agent_name = %name, "Agent added");
        Some(id)
    }

    /// Look up an agent by ID
    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Get the number of agents on the roster
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Advance the uptime clock
    pub fn tick_uptime(&mut self, dt: Duration) {
        self.uptime += dt;
    }

    /// Counters for the status bar
    pub fn status_summary(&self) -> StatusSummary {
        StatusSummary {
            active_agents: self
                .agents
                .iter()
                .filter(|a| a.status == AgentStatus::Working)
                .count(),
            pending_tasks: self.count_tasks(TaskStatus::Pending),
            completed_tasks: self.count_tasks(TaskStatus::Completed),
            uptime: format_uptime(self.uptime),
        }
    }

    /// Number of tasks in the given status
    pub fn count_tasks(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }
}

/// Completion percentage of a task list, rounded
/// An empty list is 0% complete
pub fn task_completion_percent(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    (completed as f64 / tasks.len() as f64 * 100.0).round() as u8
}

/// Format a duration as HH:MM:SS (hours are not wrapped)
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::task::TaskPriority;

    fn task(status: TaskStatus) -> Task {
        Task::assigned("t", "Task", "echo", status, TaskPriority::Low)
    }

    #[test]
    fn test_add_agent_appends_idle() {
        let mut dashboard = Dashboard::default();
        let id = dashboard.add_agent("Scout").unwrap();
        assert_eq!(dashboard.agent_count(), 1);
        let agent = dashboard.agent(&id).unwrap();
        assert_eq!(agent.name, "Scout");
        assert_eq!(agent.status, AgentStatus::Idle);
    }

    #[test]
    fn test_add_agent_blank_is_noop() {
        let mut dashboard = Dashboard::default();
        assert!(dashboard.add_agent("").is_none());
        assert!(dashboard.add_agent("   ").is_none());
        assert_eq!(dashboard.agent_count(), 0);
    }

    #[test]
    fn test_add_agent_keeps_order_and_unique_ids() {
        let mut dashboard = Dashboard::default();
        let a = dashboard.add_agent("Alpha").unwrap();
        let b = dashboard.add_agent("Alpha").unwrap();
        assert_ne!(a, b);
        assert_eq!(dashboard.agents[0].id, a);
        assert_eq!(dashboard.agents[1].id, b);
    }

    #[test]
    fn test_completion_percent() {
        assert_eq!(task_completion_percent(&[]), 0);
        assert_eq!(
            task_completion_percent(&[task(TaskStatus::Completed), task(TaskStatus::Pending)]),
            50
        );
        assert_eq!(
            task_completion_percent(&[
                task(TaskStatus::Completed),
                task(TaskStatus::Pending),
                task(TaskStatus::Pending),
            ]),
            33
        );
        assert_eq!(
            task_completion_percent(&[
                task(TaskStatus::Completed),
                task(TaskStatus::Completed),
                task(TaskStatus::Failed),
            ]),
            67
        );
        assert_eq!(task_completion_percent(&[task(TaskStatus::Completed)]), 100);
    }

    #[test]
    fn test_status_summary() {
        let mut dashboard = Dashboard::new(
            Vec::new(),
            vec![
                task(TaskStatus::Completed),
                task(TaskStatus::Pending),
                task(TaskStatus::Pending),
                task(TaskStatus::InProgress),
            ],
        );
        let id = dashboard.add_agent("Scout").unwrap();
        dashboard.add_agent("Other");
        dashboard
            .agents
            .iter_mut()
            .find(|a| a.id == id)
            .unwrap()
            .status = AgentStatus::Working;
        dashboard.tick_uptime(Duration::from_secs(3 * 3600 + 62));

        let summary = dashboard.status_summary();
        assert_eq!(summary.active_agents, 1);
        assert_eq!(summary.pending_tasks, 2);
        assert_eq!(summary.completed_tasks, 1);
        assert_eq!(summary.uptime, "03:01:02");
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::ZERO), "00:00:00");
        assert_eq!(format_uptime(Duration::from_millis(59_999)), "00:00:59");
        assert_eq!(format_uptime(Duration::from_secs(100 * 3600)), "100:00:00");
    }
}
