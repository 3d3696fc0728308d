//! Randomized agent status ticker
//!
//! On every period each agent independently rolls against the flip chance.
//! Agents are never coordinated with each other.

use super::timer::Interval;
use crate::state::{Agent, AgentStatus};
use rand::Rng;
use std::time::Duration;
use tracing::debug;

/// Current-task text given to an agent that flips to working
pub const PROCESSING_TASK: &str = "Processing task...";

/// Status ticker
#[derive(Debug, Clone)]
pub struct StatusTicker {
    timer: Interval,
    flip_chance: f64,
}

impl StatusTicker {
    /// Create a ticker with the given period and per-agent flip chance
    pub fn new(period: Duration, flip_chance: f64) -> Self {
        Self {
            timer: Interval::new(period),
            flip_chance: flip_chance.clamp(0.0, 1.0),
        }
    }

    /// Advance the ticker; returns the IDs of agents that flipped
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt: Duration,
        agents: &mut [Agent],
        rng: &mut R,
    ) -> Vec<String> {
        let mut flipped = Vec::new();
        for _ in 0..self.timer.advance(dt) {
            for agent in agents.iter_mut() {
                if rng.gen_bool(self.flip_chance) {
                    flip(agent);
                    flipped.push(agent.id.clone());
                }
            }
        }
        flipped
    }
}

/// Working agents go idle and drop their task; everyone else starts working
pub fn flip(agent: &mut Agent) {
    if agent.status == AgentStatus::Working {
        agent.status = AgentStatus::Idle;
        agent.current_task = None;
    } else {
        agent.status = AgentStatus::Working;
        agent.current_task = Some(PROCESSING_TASK.to_string());
    }
    agent.last_activity = "Just now".to_string();
    debug!(agent_id = %agent.id, status = agent.status.tag(), "Agent status flipped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::demo_agents;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_flip_toggles_working() {
        let mut agent = Agent::new_recruit("a".to_string(), "A".to_string());
        flip(&mut agent);
        assert_eq!(agent.status, AgentStatus::Working);
        assert_eq!(agent.current_task.as_deref(), Some(PROCESSING_TASK));
        flip(&mut agent);
        assert_eq!(agent.status, AgentStatus::Idle);
        assert!(agent.current_task.is_none());

        agent.status = AgentStatus::Offline;
        flip(&mut agent);
        assert_eq!(agent.status, AgentStatus::Working);
    }

    #[test]
    fn test_no_flip_before_period() {
        let mut ticker = StatusTicker::new(Duration::from_secs(5), 1.0);
        let mut agents = demo_agents();
        let before = agents.clone();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(ticker
            .advance(Duration::from_secs(4), &mut agents, &mut rng)
            .is_empty());
        assert_eq!(agents, before);
    }

    #[test]
    fn test_certain_flip_hits_everyone() {
        let mut ticker = StatusTicker::new(Duration::from_secs(5), 1.0);
        let mut agents = demo_agents();
        let mut rng = StdRng::seed_from_u64(7);
        let flipped = ticker.advance(Duration::from_secs(5), &mut agents, &mut rng);
        assert_eq!(flipped.len(), agents.len());
        assert_eq!(agents[0].status, AgentStatus::Working);
        assert_eq!(agents[1].status, AgentStatus::Idle);
    }

    #[test]
    fn test_zero_chance_never_flips() {
        let mut ticker = StatusTicker::new(Duration::from_secs(1), 0.0);
        let mut agents = demo_agents();
        let mut rng = StdRng::seed_from_u64(7);
        let flipped = ticker.advance(Duration::from_secs(60), &mut agents, &mut rng);
        assert!(flipped.is_empty());
    }
}
