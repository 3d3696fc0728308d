//! Demo fixtures
//!
//! The roster, task queue and sample workflows the dashboard starts with.

use crate::state::{
    Agent, AgentStatus, Task, TaskPriority, TaskStatus, Workflow, WorkflowStatus, WorkflowStep,
};

#[allow(clippy::too_many_arguments)]
fn agent(
    id: &str,
    name: &str,
    role: &str,
    status: AgentStatus,
    avatar: &str,
    capabilities: &[&str],
    current_task: Option<&str>,
    last_activity: &str,
) -> Agent {
    Agent {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        status,
        avatar: avatar.to_string(),
        capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
        current_task: current_task.map(str::to_string),
        last_activity: last_activity.to_string(),
    }
}

/// The four demo agents
pub fn demo_agents() -> Vec<Agent> {
    vec![
        agent(
            "echo",
            "Echo",
            "Research Specialist",
            AgentStatus::Idle,
            "🔍",
            &["web_search", "data_analysis", "reporting"],
            None,
            "2 min ago",
        ),
        agent(
            "cipher",
            "Cipher",
            "Code Developer",
            AgentStatus::Working,
            "💻",
            &["code_generation", "architecture", "debugging"],
            Some("Building dashboard UI"),
            "Just now",
        ),
        agent(
            "angel",
            "Angel",
            "Squad Lead",
            AgentStatus::Working,
            "👼",
            &["coordination", "strategy", "decision_making"],
            Some("Reviewing hackathon strategy"),
            "5 min ago",
        ),
        agent(
            "nova",
            "Nova",
            "Creative Designer",
            AgentStatus::Idle,
            "✨",
            &["ui_design", "branding", "prototyping"],
            None,
            "1 hour ago",
        ),
    ]
}

/// The demo task queue
pub fn demo_tasks() -> Vec<Task> {
    vec![
        Task::assigned(
            "1",
            "Scaffold Next.js project",
            "cipher",
            TaskStatus::Completed,
            TaskPriority::High,
        ),
        Task::assigned(
            "2",
            "Design dashboard layout",
            "nova",
            TaskStatus::InProgress,
            TaskPriority::High,
        ),
        Task::assigned(
            "3",
            "Research Gemini 3 API",
            "echo",
            TaskStatus::Pending,
            TaskPriority::Medium,
        ),
        Task::assigned(
            "4",
            "Record demo video",
            "angel",
            TaskStatus::Pending,
            TaskPriority::High,
        ),
    ]
}

fn step(id: &str, agent_id: &str, action: &str, input: &str) -> WorkflowStep {
    WorkflowStep::new(
        id.to_string(),
        agent_id.to_string(),
        action.to_string(),
        input.to_string(),
    )
}

/// The two sample workflows
pub fn demo_workflows() -> Vec<Workflow> {
    vec![
        Workflow {
            id: "1".to_string(),
            name: "Content Creation Pipeline".to_string(),
            status: WorkflowStatus::Active,
            steps: vec![
                step("s1", "echo", "Research topic", "AI trends 2024"),
                step("s2", "cipher", "Generate outline", "Research findings"),
                step("s3", "nova", "Create visuals", "Outline"),
            ],
            progress: 0,
        },
        Workflow {
            id: "2".to_string(),
            name: "Code Review Workflow".to_string(),
            status: WorkflowStatus::Draft,
            steps: vec![
                step("s1", "cipher", "Analyze code", "Pull request"),
                step("s2", "angel", "Review strategy", "Analysis"),
            ],
            progress: 0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::task_completion_percent;

    #[test]
    fn test_demo_roster() {
        let agents = demo_agents();
        assert_eq!(agents.len(), 4);
        let working: Vec<_> = agents
            .iter()
            .filter(|a| a.status == AgentStatus::Working)
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(working, vec!["Cipher", "Angel"]);
        assert!(agents
            .iter()
            .all(|a| a.current_task.is_some() == (a.status == AgentStatus::Working)));
    }

    #[test]
    fn test_demo_tasks_completion() {
        assert_eq!(task_completion_percent(&demo_tasks()), 25);
    }

    #[test]
    fn test_demo_workflow_steps_reference_roster() {
        let ids: Vec<_> = demo_agents().into_iter().map(|a| a.id).collect();
        for workflow in demo_workflows() {
            for step in workflow.steps {
                assert!(ids.contains(&step.agent_id));
                assert!(step.output.is_none());
            }
        }
    }
}
