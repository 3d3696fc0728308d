//! Analytics snapshot
//!
//! Chart series with no relation to real telemetry. Per-agent performance is
//! random and only regenerated on refresh, so charts do not jitter per frame.

use crate::state::{Agent, AgentStatus, Task, TaskStatus};
use rand::Rng;

/// One point on the trend chart
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// Time-of-day label
    pub time: &'static str,
    /// Tasks handled in the bucket
    pub tasks: u32,
    /// Agents online in the bucket
    pub agents: u32,
    /// Efficiency percentage
    pub efficiency: u32,
}

/// Fixed six-point trend series
pub fn trend_series() -> Vec<TrendPoint> {
    [
        ("00:00", 12, 3, 85),
        ("04:00", 8, 2, 78),
        ("08:00", 24, 4, 92),
        ("12:00", 32, 4, 88),
        ("16:00", 28, 4, 90),
        ("20:00", 18, 3, 86),
    ]
    .into_iter()
    .map(|(time, tasks, agents, efficiency)| TrendPoint {
        time,
        tasks,
        agents,
        efficiency,
    })
    .collect()
}

/// Generated performance for one agent
#[derive(Debug, Clone, PartialEq)]
pub struct AgentPerformance {
    /// Agent display name
    pub name: String,
    /// Agent avatar
    pub avatar: String,
    /// Tasks handled (10..=59)
    pub tasks: u32,
    /// Efficiency percentage (70..=99)
    pub efficiency: u32,
    /// Index into the chart palette
    pub color_index: usize,
}

/// Generate random performance figures for one agent
pub fn performance_for<R: Rng + ?Sized>(
    agent: &Agent,
    color_index: usize,
    rng: &mut R,
) -> AgentPerformance {
    AgentPerformance {
        name: agent.name.clone(),
        avatar: agent.avatar.clone(),
        tasks: rng.gen_range(10..60),
        efficiency: rng.gen_range(70..100),
        color_index,
    }
}

/// Generate random performance figures for every agent
pub fn agent_performance<R: Rng + ?Sized>(agents: &[Agent], rng: &mut R) -> Vec<AgentPerformance> {
    agents
        .iter()
        .enumerate()
        .map(|(i, agent)| performance_for(agent, i, rng))
        .collect()
}

/// One slice of the task distribution chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionSlice {
    /// Status the slice counts
    pub status: TaskStatus,
    /// Display label
    pub label: &'static str,
    /// Number of tasks
    pub value: usize,
}

/// Count tasks per status, omitting empty buckets
pub fn task_distribution(tasks: &[Task]) -> Vec<DistributionSlice> {
    [
        (TaskStatus::Completed, "Completed"),
        (TaskStatus::InProgress, "In Progress"),
        (TaskStatus::Pending, "Pending"),
        (TaskStatus::Failed, "Failed"),
    ]
    .into_iter()
    .map(|(status, label)| DistributionSlice {
        status,
        label,
        value: tasks.iter().filter(|t| t.status == status).count(),
    })
    .filter(|slice| slice.value > 0)
    .collect()
}

/// Headline figures for the stat cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCards {
    /// Working agents
    pub active_agents: usize,
    /// Roster size
    pub total_agents: usize,
    /// Completed tasks
    pub completed_tasks: usize,
    /// Queue size
    pub total_tasks: usize,
    /// Mean generated efficiency (0 with no agents)
    pub avg_efficiency: u32,
    /// Completed share of the queue, rounded
    pub system_health: u32,
}

/// Compute the stat cards from current state and a performance snapshot
pub fn stat_cards(agents: &[Agent], tasks: &[Task], performance: &[AgentPerformance]) -> StatCards {
    let completed = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    let avg_efficiency = if performance.is_empty() {
        0
    } else {
        let total: u32 = performance.iter().map(|p| p.efficiency).sum();
        (total as f64 / performance.len() as f64).round() as u32
    };
    StatCards {
        active_agents: agents
            .iter()
            .filter(|a| a.status == AgentStatus::Working)
            .count(),
        total_agents: agents.len(),
        completed_tasks: completed,
        total_tasks: tasks.len(),
        avg_efficiency,
        system_health: (completed as f64 / tasks.len().max(1) as f64 * 100.0).round() as u32,
    }
}

/// Everything the analytics tab draws
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSnapshot {
    /// Trend chart series
    pub trend: Vec<TrendPoint>,
    /// Per-agent bars
    pub performance: Vec<AgentPerformance>,
    /// Task distribution slices
    pub distribution: Vec<DistributionSlice>,
    /// Stat cards
    pub stats: StatCards,
}

impl AnalyticsSnapshot {
    /// Generate a fresh snapshot with new performance figures
    pub fn generate<R: Rng + ?Sized>(agents: &[Agent], tasks: &[Task], rng: &mut R) -> Self {
        Self::from_performance(agents, tasks, agent_performance(agents, rng))
    }

    /// Build a snapshot around existing performance figures
    ///
    /// Stat cards and the distribution always reflect `agents` and `tasks`.
    pub fn from_performance(agents: &[Agent], tasks: &[Task], performance: Vec<AgentPerformance>) -> Self {
        Self {
            trend: trend_series(),
            distribution: task_distribution(tasks),
            stats: stat_cards(agents, tasks, &performance),
            performance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{demo_agents, demo_tasks};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_trend_series_fixed() {
        let trend = trend_series();
        assert_eq!(trend.len(), 6);
        assert_eq!(trend[3].tasks, 32);
        assert_eq!(trend[5].time, "20:00");
    }

    #[test]
    fn test_performance_ranges() {
        let mut rng = StdRng::seed_from_u64(21);
        let agents = demo_agents();
        for _ in 0..50 {
            for perf in agent_performance(&agents, &mut rng) {
                assert!((10..60).contains(&perf.tasks));
                assert!((70..100).contains(&perf.efficiency));
            }
        }
    }

    #[test]
    fn test_distribution_omits_empty_buckets() {
        let slices = task_distribution(&demo_tasks());
        let labels: Vec<_> = slices.iter().map(|s| (s.label, s.value)).collect();
        assert_eq!(
            labels,
            vec![("Completed", 1), ("In Progress", 1), ("Pending", 2)]
        );
        assert!(task_distribution(&[]).is_empty());
    }

    #[test]
    fn test_stat_cards() {
        let agents = demo_agents();
        let mut rng = StdRng::seed_from_u64(21);
        let performance = agent_performance(&agents, &mut rng);
        let stats = stat_cards(&agents, &demo_tasks(), &performance);
        assert_eq!(stats.active_agents, 2);
        assert_eq!(stats.total_agents, 4);
        assert_eq!(stats.completed_tasks, 1);
        assert_eq!(stats.system_health, 25);
        assert!((70..100).contains(&stats.avg_efficiency));
    }

    #[test]
    fn test_snapshot_keeps_performance_but_tracks_state() {
        let mut agents = demo_agents();
        let mut rng = StdRng::seed_from_u64(5);
        let performance = agent_performance(&agents, &mut rng);

        agents[0].status = AgentStatus::Working;
        agents[1].status = AgentStatus::Working;
        let snapshot = AnalyticsSnapshot::from_performance(&agents, &demo_tasks(), performance.clone());
        assert_eq!(snapshot.performance, performance);
        assert_eq!(
            snapshot.stats.active_agents,
            agents.iter().filter(|a| a.status == AgentStatus::Working).count()
        );
    }

    #[test]
    fn test_stat_cards_empty_state() {
        let stats = stat_cards(&[], &[], &[]);
        assert_eq!(stats.avg_efficiency, 0);
        assert_eq!(stats.system_health, 0);
    }
}
