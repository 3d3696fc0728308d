//! Activity feed
//!
//! A cosmetic, time-sorted list of events derived from the current roster,
//! task queue and workflows, topped up by a live injector.

use crate::sim::timer::Interval;
use crate::state::{Agent, AgentId, AgentStatus, Task, TaskStatus, Workflow, WorkflowStatus};
use chrono::{DateTime, Duration as ChronoDuration, Local};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

/// Entries kept right after the feed is derived
pub const DERIVED_LIMIT: usize = 15;

/// Entries kept once live items start arriving
pub const LIVE_LIMIT: usize = 20;

/// Kind of activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    /// Task status changes
    Task,
    /// Agent doing something
    Agent,
    /// Platform health
    System,
    /// Team channel
    Chat,
    /// Workflow lifecycle
    Workflow,
}

impl ActivityKind {
    /// All kinds, in filter-bar order
    pub const ALL: [ActivityKind; 5] = [
        ActivityKind::Task,
        ActivityKind::Agent,
        ActivityKind::System,
        ActivityKind::Chat,
        ActivityKind::Workflow,
    ];

    /// Lowercase label
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Task => "task",
            ActivityKind::Agent => "agent",
            ActivityKind::System => "system",
            ActivityKind::Chat => "chat",
            ActivityKind::Workflow => "workflow",
        }
    }
}

/// One feed entry
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityItem {
    /// Unique identifier
    pub id: String,
    /// Kind of activity
    pub kind: ActivityKind,
    /// Headline
    pub title: String,
    /// Detail line
    pub description: String,
    /// When it happened
    pub timestamp: DateTime<Local>,
    /// Agent involved, if any
    pub agent_id: Option<AgentId>,
    /// Agent name, if any
    pub agent_name: Option<String>,
    /// Agent avatar, if any
    pub agent_avatar: Option<String>,
    /// Task priority, for task entries
    pub priority: Option<String>,
}

impl ActivityItem {
    fn plain(
        id: &str,
        kind: ActivityKind,
        title: &str,
        description: &str,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            description: description.to_string(),
            timestamp,
            agent_id: None,
            agent_name: None,
            agent_avatar: None,
            priority: None,
        }
    }

    fn by_agent(mut self, agent: Option<&Agent>) -> Self {
        if let Some(agent) = agent {
            self.agent_id = Some(agent.id.clone());
            self.agent_name = Some(agent.name.clone());
            self.agent_avatar = Some(agent.avatar.clone());
        }
        self
    }
}

fn minutes_ago(now: DateTime<Local>, minutes: i64) -> DateTime<Local> {
    now - ChronoDuration::minutes(minutes)
}

/// Build the feed from current state, newest first, at most `DERIVED_LIMIT`
pub fn derive_activities(
    agents: &[Agent],
    tasks: &[Task],
    workflows: &[Workflow],
    now: DateTime<Local>,
) -> Vec<ActivityItem> {
    let mut items = Vec::new();

    for (i, task) in tasks.iter().enumerate() {
        let agent = task
            .agent_id
            .as_deref()
            .and_then(|id| agents.iter().find(|a| a.id == id));
        let (title, description) = if task.status == TaskStatus::Completed {
            ("Task Completed", format!("\"{}\" finished successfully", task.title))
        } else {
            (
                "Task Updated",
                format!("\"{}\" is now {}", task.title, task.status.label()),
            )
        };
        let mut item = ActivityItem::plain(
            &format!("task-{}", task.id),
            ActivityKind::Task,
            title,
            &description,
            minutes_ago(now, 5 * i as i64),
        )
        .by_agent(agent);
        item.priority = Some(task.priority.label().to_string());
        items.push(item);
    }

    for (i, agent) in agents.iter().enumerate() {
        if agent.status != AgentStatus::Working {
            continue;
        }
        items.push(
            ActivityItem::plain(
                &format!("agent-{}-working", agent.id),
                ActivityKind::Agent,
                &format!("{} Started Task", agent.name),
                agent
                    .current_task
                    .as_deref()
                    .unwrap_or("Processing assigned work"),
                minutes_ago(now, 3 * i as i64),
            )
            .by_agent(Some(agent)),
        );
    }

    items.extend([
        ActivityItem::plain(
            "system-1",
            ActivityKind::System,
            "System Health Check",
            "All systems operational. Response time: 42ms",
            minutes_ago(now, 2),
        ),
        ActivityItem::plain(
            "system-2",
            ActivityKind::System,
            "Gemini 3 API Connected",
            "AI inference endpoint responding normally",
            minutes_ago(now, 8),
        ),
        ActivityItem::plain(
            "system-3",
            ActivityKind::System,
            "Database Sync Complete",
            "Task state synchronized across all nodes",
            minutes_ago(now, 15),
        ),
    ]);

    let mut chat = ActivityItem::plain(
        "chat-1",
        ActivityKind::Chat,
        "Team Channel Activity",
        "New message from Angel: \"Great progress today team!\"",
        minutes_ago(now, 4),
    );
    chat.agent_name = Some("Angel".to_string());
    chat.agent_avatar = Some("👼".to_string());
    items.push(chat);

    let mut dm = ActivityItem::plain(
        "chat-2",
        ActivityKind::Chat,
        "Direct Message",
        "Cipher responded to workflow query",
        minutes_ago(now, 12),
    );
    dm.agent_name = Some("Cipher".to_string());
    dm.agent_avatar = Some("💻".to_string());
    items.push(dm);

    for (i, workflow) in workflows.iter().enumerate() {
        let (title, description) = match workflow.status {
            WorkflowStatus::Completed => (
                "Workflow Executed",
                format!(
                    "{} completed {}/{} steps",
                    workflow.name,
                    workflow.completed_steps(),
                    workflow.steps.len()
                ),
            ),
            WorkflowStatus::Active | WorkflowStatus::Paused => (
                "Workflow Running",
                format!(
                    "{} at step {}/{}",
                    workflow.name,
                    workflow.active_step().map_or(0, |s| s + 1),
                    workflow.steps.len()
                ),
            ),
            WorkflowStatus::Draft => ("Workflow Created", format!("New {} drafted", workflow.name)),
        };
        items.push(ActivityItem::plain(
            &format!("wf-{}", workflow.id),
            ActivityKind::Workflow,
            title,
            &description,
            minutes_ago(now, 6 + 14 * i as i64),
        ));
    }

    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items.truncate(DERIVED_LIMIT);
    items
}

/// One synthetic live entry: a metric update or a heartbeat
pub fn live_activity<R: Rng + ?Sized>(
    agents: &[Agent],
    now: DateTime<Local>,
    seq: u64,
    rng: &mut R,
) -> ActivityItem {
    let agent = agents.choose(rng);
    let kind = if rng.gen_bool(0.5) {
        ActivityKind::System
    } else {
        ActivityKind::Agent
    };
    let title = if rng.gen_bool(0.5) {
        "Metric Update"
    } else {
        "Heartbeat Received"
    };
    let description = if rng.gen_bool(0.5) {
        format!(
            "CPU usage: {}% • Memory: {}%",
            rng.gen_range(20..50),
            rng.gen_range(40..60)
        )
    } else {
        format!(
            "{} reported status: {}",
            agent.map_or("Agent", |a| a.name.as_str()),
            agent.map_or("idle", |a| a.status.tag())
        )
    };
    ActivityItem::plain(&format!("live-{seq}"), kind, title, &description, now).by_agent(agent)
}

/// Activity feed state
#[derive(Debug, Clone)]
pub struct ActivityFeed {
    items: Vec<ActivityItem>,
    live: bool,
    timer: Interval,
    seq: u64,
}

impl ActivityFeed {
    /// Create a feed derived from the given state
    pub fn new(
        agents: &[Agent],
        tasks: &[Task],
        workflows: &[Workflow],
        tick: Duration,
        now: DateTime<Local>,
    ) -> Self {
        Self {
            items: derive_activities(agents, tasks, workflows, now),
            live: true,
            timer: Interval::new(tick),
            seq: 0,
        }
    }

    /// Rebuild from current state, dropping live entries
    pub fn rederive(
        &mut self,
        agents: &[Agent],
        tasks: &[Task],
        workflows: &[Workflow],
        now: DateTime<Local>,
    ) {
        self.items = derive_activities(agents, tasks, workflows, now);
    }

    /// Advance the live injector; returns how many entries were added
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt: Duration,
        agents: &[Agent],
        now: DateTime<Local>,
        rng: &mut R,
    ) -> usize {
        if !self.live {
            return 0;
        }
        let fired = self.timer.advance(dt);
        for _ in 0..fired {
            self.seq += 1;
            let item = live_activity(agents, now, self.seq, rng);
            self.items.insert(0, item);
        }
        self.items.truncate(LIVE_LIMIT);
        fired as usize
    }

    /// Entries, newest first
    pub fn items(&self) -> &[ActivityItem] {
        &self.items
    }

    /// Entries of one kind (or all)
    pub fn filtered(&self, kind: Option<ActivityKind>) -> Vec<&ActivityItem> {
        self.items
            .iter()
            .filter(|i| kind.map_or(true, |k| i.kind == k))
            .collect()
    }

    /// Per-kind counts, in `ActivityKind::ALL` order
    pub fn counts(&self) -> [(ActivityKind, usize); 5] {
        ActivityKind::ALL.map(|kind| (kind, self.items.iter().filter(|i| i.kind == kind).count()))
    }

    /// Whether live entries are being injected
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Pause or resume live injection
    pub fn set_live(&mut self, live: bool) {
        if live && !self.live {
            self.timer.reset();
        }
        self.live = live;
    }
}

/// "Just now", "{m}m ago", "{h}h ago", or HH:MM beyond a day
pub fn format_relative(timestamp: DateTime<Local>, now: DateTime<Local>) -> String {
    let secs = (now - timestamp).num_seconds();
    if secs < 60 {
        "Just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3600)
    } else {
        timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{demo_agents, demo_tasks, demo_workflows};
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 11, 5, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_derived_feed_sorted() {
        let items = derive_activities(&demo_agents(), &demo_tasks(), &demo_workflows(), now());
        // 4 tasks, 2 working agents, 3 system, 2 chat, 2 workflows
        assert_eq!(items.len(), 13);
        assert!(items.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
        assert_eq!(items[0].id, "task-1");
    }

    #[test]
    fn test_derived_feed_capped() {
        let tasks: Vec<_> = (0..10)
            .map(|i| {
                crate::state::Task::assigned(
                    &i.to_string(),
                    "Busywork",
                    "echo",
                    TaskStatus::Pending,
                    crate::state::TaskPriority::Low,
                )
            })
            .collect();
        let items = derive_activities(&demo_agents(), &tasks, &demo_workflows(), now());
        assert_eq!(items.len(), DERIVED_LIMIT);
    }

    #[test]
    fn test_task_entries() {
        let items = derive_activities(&[], &demo_tasks(), &[], now());
        let done = items.iter().find(|i| i.id == "task-1").unwrap();
        assert_eq!(done.title, "Task Completed");
        assert_eq!(
            done.description,
            "\"Scaffold Next.js project\" finished successfully"
        );
        let pending = items.iter().find(|i| i.id == "task-3").unwrap();
        assert_eq!(pending.description, "\"Research Gemini 3 API\" is now pending");
        assert_eq!(pending.priority.as_deref(), Some("medium"));
        assert!(pending.agent_name.is_none());
    }

    #[test]
    fn test_working_agents_only() {
        let items = derive_activities(&demo_agents(), &[], &[], now());
        let agent_titles: Vec<_> = items
            .iter()
            .filter(|i| i.kind == ActivityKind::Agent)
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(agent_titles, vec!["Cipher Started Task", "Angel Started Task"]);
    }

    #[test]
    fn test_live_injection_caps_at_limit() {
        let agents = demo_agents();
        let mut feed = ActivityFeed::new(
            &agents,
            &demo_tasks(),
            &demo_workflows(),
            Duration::from_secs(3),
            now(),
        );
        let mut rng = StdRng::seed_from_u64(9);

        assert_eq!(feed.advance(Duration::from_secs(3), &agents, now(), &mut rng), 1);
        assert!(feed.items()[0].id.starts_with("live-"));
        assert_eq!(feed.items().len(), 14);

        feed.advance(Duration::from_secs(60), &agents, now(), &mut rng);
        assert_eq!(feed.items().len(), LIVE_LIMIT);
    }

    #[test]
    fn test_paused_feed_is_static() {
        let agents = demo_agents();
        let mut feed = ActivityFeed::new(&agents, &[], &[], Duration::from_secs(3), now());
        let before = feed.items().to_vec();
        let mut rng = StdRng::seed_from_u64(9);
        feed.set_live(false);
        assert_eq!(feed.advance(Duration::from_secs(30), &agents, now(), &mut rng), 0);
        assert_eq!(feed.items(), before.as_slice());
    }

    #[test]
    fn test_filter_and_counts_agree() {
        let feed = ActivityFeed::new(
            &demo_agents(),
            &demo_tasks(),
            &demo_workflows(),
            Duration::from_secs(3),
            now(),
        );
        for (kind, count) in feed.counts() {
            assert_eq!(feed.filtered(Some(kind)).len(), count);
        }
        assert_eq!(feed.filtered(None).len(), feed.items().len());
    }

    #[test]
    fn test_live_activity_without_agents() {
        let mut rng = StdRng::seed_from_u64(3);
        for seq in 0..50 {
            let item = live_activity(&[], now(), seq, &mut rng);
            assert!(item.agent_id.is_none());
            assert!(!item.description.is_empty());
        }
    }

    #[test]
    fn test_format_relative() {
        let now = now();
        assert_eq!(format_relative(now - ChronoDuration::seconds(30), now), "Just now");
        assert_eq!(format_relative(now - ChronoDuration::minutes(5), now), "5m ago");
        assert_eq!(format_relative(now - ChronoDuration::hours(3), now), "3h ago");
        assert_eq!(format_relative(now - ChronoDuration::days(2), now), "12:00");
    }
}
