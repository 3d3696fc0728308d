//! Simulation driver
//!
//! Owns every piece of mutable dashboard state and the single RNG. The UI
//! calls [`Simulation::advance`] once per frame with the frame's elapsed time.

pub mod ticker;
pub mod timer;

use crate::activity::ActivityFeed;
use crate::analytics::{agent_performance, performance_for, AgentPerformance, AnalyticsSnapshot};
use crate::chat::TeamChat;
use crate::config::Config;
use crate::error::{ConfigError, ExportError, SimError};
use crate::fixtures::{demo_agents, demo_tasks, demo_workflows};
use crate::logs::{LogLevel, LogStream};
use crate::state::{Agent, AgentId, Dashboard, Task, Workflow};
use crate::workflow::{ExecutorEvent, WorkflowBoard};
use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Duration;
use ticker::StatusTicker;
use tracing::info;

/// What changed during one `advance` call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Agents whose status flipped
    pub flipped: Vec<AgentId>,
    /// Chat replies delivered
    pub replies: usize,
    /// Workflow executor events, in order
    pub executor: Vec<ExecutorEvent>,
    /// Live log lines generated
    pub logs_added: usize,
    /// Live activity entries injected
    pub activities_added: usize,
}

impl TickReport {
    /// Whether anything visible changed
    pub fn is_empty(&self) -> bool {
        self.flipped.is_empty()
            && self.replies == 0
            && self.executor.is_empty()
            && self.logs_added == 0
            && self.activities_added == 0
    }
}

/// The whole simulated mission control
#[derive(Debug)]
pub struct Simulation {
    /// Agents, tasks and uptime
    pub dashboard: Dashboard,
    /// Team chat
    pub chat: TeamChat,
    /// Workflow builder and executor
    pub workflows: WorkflowBoard,
    /// Activity feed
    pub activity: ActivityFeed,
    /// Live terminal
    pub logs: LogStream,
    performance: Vec<AgentPerformance>,
    ticker: StatusTicker,
    rng: StdRng,
    config: Config,
}

impl Simulation {
    /// Create a simulation seeded with the demo fixtures
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_state(config, demo_agents(), demo_tasks(), demo_workflows())
    }

    /// Create a simulation over explicit state
    pub fn with_state(
        config: Config,
        agents: Vec<Agent>,
        tasks: Vec<Task>,
        workflows: Vec<Workflow>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let now = Local::now();
        let timers = &config.timers;

        let dashboard = Dashboard::new(agents, tasks);
        let workflows = WorkflowBoard::new(workflows, timers.workflow_step_delay);
        let activity = ActivityFeed::new(
            &dashboard.agents,
            &dashboard.tasks,
            workflows.workflows(),
            timers.activity_tick,
            now,
        );
        let logs = LogStream::new(config.logs.capacity, timers.log_tick, now, &mut rng);
        let performance = agent_performance(&dashboard.agents, &mut rng);

        info!(
            agents = dashboard.agent_count(),
            tasks = dashboard.tasks.len(),
            workflows = workflows.workflows().len(),
            seeded = config.seed.is_some(),
            "Simulation initialized"
        );

        Ok(Self {
            chat: TeamChat::new(timers.chat_reply_delay),
            ticker: StatusTicker::new(timers.status_tick, timers.status_flip_chance),
            dashboard,
            workflows,
            activity,
            logs,
            performance,
            rng,
            config,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Advance every timer by `dt`, stamping generated content with the current time
    pub fn advance(&mut self, dt: Duration) -> TickReport {
        self.advance_at(dt, Local::now())
    }

    /// Advance every timer by `dt`, stamping generated content with `now`
    pub fn advance_at(&mut self, dt: Duration, now: DateTime<Local>) -> TickReport {
        let now_label = now.format("%H:%M:%S").to_string();
        self.dashboard.tick_uptime(dt);

        let flipped = self
            .ticker
            .advance(dt, &mut self.dashboard.agents, &mut self.rng);
        let replies = self
            .chat
            .advance(dt, &self.dashboard.agents, &now_label, &mut self.rng);
        let executor = self.workflows.advance(dt, &self.dashboard.agents);
        for event in &executor {
            self.log_executor_event(event, now);
        }
        let logs_added = self.logs.advance(dt, now, &mut self.rng);

        if !flipped.is_empty()
            || executor
                .iter()
                .any(|e| matches!(e, ExecutorEvent::Finished { .. }))
        {
            self.rederive_activity(now);
        }
        let activities_added =
            self.activity
                .advance(dt, &self.dashboard.agents, now, &mut self.rng);

        TickReport {
            flipped,
            replies,
            executor,
            logs_added,
            activities_added,
        }
    }

    fn log_executor_event(&mut self, event: &ExecutorEvent, now: DateTime<Local>) {
        let (level, workflow_id, message) = match event {
            ExecutorEvent::StepStarted { workflow_id, index } => {
                (LogLevel::Info, workflow_id, format!("starting step {}", index + 1))
            }
            ExecutorEvent::StepCompleted { workflow_id, index } => {
                (LogLevel::Success, workflow_id, format!("step {} executed", index + 1))
            }
            ExecutorEvent::Finished { workflow_id } => {
                (LogLevel::Success, workflow_id, "all steps completed".to_string())
            }
        };
        let name = self
            .workflows
            .workflow(workflow_id)
            .map(|w| w.name.clone())
            .unwrap_or_else(|| workflow_id.clone());
        self.logs.record(
            level,
            "WorkflowEngine",
            format!("'{name}' {message}"),
            now,
        );
    }

    fn rederive_activity(&mut self, now: DateTime<Local>) {
        self.activity.rederive(
            &self.dashboard.agents,
            &self.dashboard.tasks,
            self.workflows.workflows(),
            now,
        );
    }

    /// Add an agent from the "create new agent" bar
    /// Returns None (and changes nothing) for a blank name
    pub fn add_agent(&mut self, name: &str) -> Option<AgentId> {
        let id = self.dashboard.add_agent(name)?;
        if let Some(agent) = self.dashboard.agent(&id) {
            let color_index = self.performance.len();
            self.performance
                .push(performance_for(agent, color_index, &mut self.rng));
        }
        let now = Local::now();
        self.logs.record(
            LogLevel::Success,
            "AgentManager",
            format!("Agent '{}' registered successfully", name.trim()),
            now,
        );
        self.rederive_activity(now);
        Some(id)
    }

    /// Send a chat message to the current target, stamped with the current time
    pub fn send_chat(&mut self, content: &str) -> bool {
        let label = Local::now().format("%H:%M:%S").to_string();
        self.chat.send(content, label)
    }

    /// Append a step to a workflow, checking the agent against the roster
    pub fn add_workflow_step(
        &mut self,
        workflow_id: &str,
        agent_id: &str,
        action: &str,
        input: &str,
    ) -> Result<Option<String>, SimError> {
        self.workflows
            .add_step(workflow_id, agent_id, action, input, &self.dashboard.agents)
    }

    /// Analytics over current state
    /// Performance figures are kept until the next refresh; everything else is recomputed
    pub fn analytics(&self) -> AnalyticsSnapshot {
        AnalyticsSnapshot::from_performance(
            &self.dashboard.agents,
            &self.dashboard.tasks,
            self.performance.clone(),
        )
    }

    /// Draw new performance figures for every agent
    pub fn refresh_analytics(&mut self) {
        self.performance = agent_performance(&self.dashboard.agents, &mut self.rng);
    }

    /// Write the live terminal as plain text into the configured export directory
    pub fn export_logs(&self) -> Result<PathBuf, ExportError> {
        self.logs
            .export_to(&self.config.logs.export_dir, Local::now().date_naive())
    }

    /// Write the live terminal as JSON into the configured export directory
    pub fn export_logs_json(&self) -> Result<PathBuf, ExportError> {
        self.logs
            .export_json_to(&self.config.logs.export_dir, Local::now().date_naive())
    }
}
