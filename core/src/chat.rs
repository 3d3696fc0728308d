//! Team chat
//!
//! Messages, the direct-message target and replies waiting on their delay.
//! Every user message schedules exactly one canned reply.

use crate::sim::timer::Delay;
use crate::state::{generate_id, Agent, AgentId, ChatMessage, Sender};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;
use tracing::info;

/// Canned replies; `{name}` is replaced with the responding agent's name
pub const CANNED_REPLIES: [&str; 4] = [
    "Roger that! {name} here. I'll handle that for you.",
    "On it. {name} will report back shortly.",
    "Copy. {name} is adding that to the queue.",
    "Acknowledged. {name} has started looking into it.",
];

/// Posted when a reply falls due and nobody is on the roster
pub const NO_AGENTS_REPLY: &str = "No agents are online to respond.";

/// Number of agents offered as direct-message toggles in the header
pub const DM_SHORTCUTS: usize = 3;

/// Team chat state
#[derive(Debug, Clone)]
pub struct TeamChat {
    messages: Vec<ChatMessage>,
    target: Option<AgentId>,
    pending: Vec<Delay<Option<AgentId>>>,
    reply_delay: Duration,
}

impl TeamChat {
    /// Create an empty chat whose replies arrive after `reply_delay`
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            messages: Vec::new(),
            target: None,
            pending: Vec::new(),
            reply_delay,
        }
    }

    /// All messages, oldest first
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Current direct-message target
    pub fn target(&self) -> Option<&AgentId> {
        self.target.as_ref()
    }

    /// Number of replies still waiting on their delay
    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    /// Toggle the direct-message target (selecting the current target clears it)
    pub fn toggle_target(&mut self, agent_id: &str) {
        if self.target.as_deref() == Some(agent_id) {
            self.target = None;
        } else {
            self.target = Some(agent_id.to_string());
        }
    }

    /// Go back to messaging the whole team
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Post a user message to the current target (or the team)
    /// Returns false without doing anything if the message is blank
    pub fn send(&mut self, content: &str, timestamp: String) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            id: generate_id(),
            content: content.to_string(),
            sender: Sender::User,
            agent_id: None,
            agent_name: None,
            timestamp,
            target_agent_id: self.target.clone(),
        });
        self.pending
            .push(Delay::new(self.reply_delay, self.target.clone()));
        info!(
            target = self.target.as_deref().unwrap_or("team"),
            len = content.len(),
            "Chat message sent"
        );
        true
    }

    /// Advance pending replies and deliver the ones that fell due
    /// Returns the number of replies delivered
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt: Duration,
        agents: &[Agent],
        now_label: &str,
        rng: &mut R,
    ) -> usize {
        let mut due = Vec::new();
        let mut waiting = Vec::with_capacity(self.pending.len());
        for mut delay in self.pending.drain(..) {
            if delay.advance(dt) {
                due.push(delay.into_payload());
            } else {
                waiting.push(delay);
            }
        }
        self.pending = waiting;

        for target in &due {
            let reply = compose_reply(target.as_deref(), agents, now_label, rng);
            info!(
                agent = reply.agent_name.as_deref().unwrap_or("system"),
                "Chat reply delivered"
            );
            self.messages.push(reply);
        }
        due.len()
    }
}

/// Build the reply for a message sent to `target`
///
/// The targeted agent answers if it is still on the roster; otherwise a
/// random agent does.
pub fn compose_reply<R: Rng + ?Sized>(
    target: Option<&str>,
    agents: &[Agent],
    now_label: &str,
    rng: &mut R,
) -> ChatMessage {
    let responder = target
        .and_then(|id| agents.iter().find(|a| a.id == id))
        .or_else(|| agents.choose(rng));

    match responder {
        Some(agent) => {
            let template = CANNED_REPLIES.choose(rng).unwrap_or(&CANNED_REPLIES[0]);
            ChatMessage {
                id: generate_id(),
                content: template.replace("{name}", &agent.name),
                sender: Sender::Agent,
                agent_id: Some(agent.id.clone()),
                agent_name: Some(agent.name.clone()),
                timestamp: now_label.to_string(),
                target_agent_id: None,
            }
        }
        None => ChatMessage {
            id: generate_id(),
            content: NO_AGENTS_REPLY.to_string(),
            sender: Sender::System,
            agent_id: None,
            agent_name: None,
            timestamp: now_label.to_string(),
            target_agent_id: None,
        },
    }
}

/// Split the roster into the direct-message shortcuts and the overflow count
pub fn dm_shortcuts(agents: &[Agent]) -> (&[Agent], usize) {
    let shown = agents.len().min(DM_SHORTCUTS);
    (&agents[..shown], agents.len() - shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::demo_agents;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn chat() -> TeamChat {
        TeamChat::new(Duration::from_secs(1))
    }

    #[test]
    fn test_blank_message_is_noop() {
        let mut chat = chat();
        assert!(!chat.send("", "10:00:00".to_string()));
        assert!(!chat.send("  \t ", "10:00:00".to_string()));
        assert!(chat.messages().is_empty());
        assert_eq!(chat.pending_replies(), 0);
    }

    #[test]
    fn test_reply_arrives_after_delay() {
        let mut chat = chat();
        let agents = demo_agents();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(chat.send("status report please", "10:00:00".to_string()));
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].sender, Sender::User);

        assert_eq!(
            chat.advance(Duration::from_millis(500), &agents, "10:00:00", &mut rng),
            0
        );
        assert_eq!(chat.messages().len(), 1);

        assert_eq!(
            chat.advance(Duration::from_millis(500), &agents, "10:00:01", &mut rng),
            1
        );
        let reply = &chat.messages()[1];
        assert_eq!(reply.sender, Sender::Agent);
        let name = reply.agent_name.as_deref().unwrap();
        assert!(agents.iter().any(|a| a.name == name));
        assert!(reply.content.contains(name));
        assert_eq!(chat.pending_replies(), 0);
    }

    #[test]
    fn test_direct_message_answered_by_target() {
        let mut chat = chat();
        let agents = demo_agents();
        let mut rng = StdRng::seed_from_u64(2);

        chat.toggle_target("nova");
        chat.send("mockups?", "10:00:00".to_string());
        assert_eq!(chat.messages()[0].target_agent_id.as_deref(), Some("nova"));

        chat.advance(Duration::from_secs(1), &agents, "10:00:01", &mut rng);
        assert_eq!(chat.messages()[1].agent_id.as_deref(), Some("nova"));
    }

    #[test]
    fn test_toggle_target() {
        let mut chat = chat();
        chat.toggle_target("echo");
        assert_eq!(chat.target().map(String::as_str), Some("echo"));
        chat.toggle_target("cipher");
        assert_eq!(chat.target().map(String::as_str), Some("cipher"));
        chat.toggle_target("cipher");
        assert!(chat.target().is_none());
        chat.toggle_target("echo");
        chat.clear_target();
        assert!(chat.target().is_none());
    }

    #[test]
    fn test_reply_with_empty_roster() {
        let mut chat = chat();
        let mut rng = StdRng::seed_from_u64(3);
        chat.send("anyone?", "10:00:00".to_string());
        chat.advance(Duration::from_secs(2), &[], "10:00:02", &mut rng);
        let reply = &chat.messages()[1];
        assert_eq!(reply.sender, Sender::System);
        assert_eq!(reply.content, NO_AGENTS_REPLY);
    }

    #[test]
    fn test_departed_target_falls_back_to_random_agent() {
        let agents = demo_agents();
        let mut rng = StdRng::seed_from_u64(4);
        let reply = compose_reply(Some("ghost"), &agents, "10:00:00", &mut rng);
        assert_eq!(reply.sender, Sender::Agent);
        assert!(reply.agent_id.is_some());
    }

    #[test]
    fn test_each_message_gets_one_reply() {
        let mut chat = chat();
        let agents = demo_agents();
        let mut rng = StdRng::seed_from_u64(5);
        chat.send("one", "10:00:00".to_string());
        chat.advance(Duration::from_millis(400), &agents, "10:00:00", &mut rng);
        chat.send("two", "10:00:00".to_string());
        assert_eq!(chat.pending_replies(), 2);
        assert_eq!(
            chat.advance(Duration::from_millis(600), &agents, "10:00:01", &mut rng),
            1
        );
        assert_eq!(
            chat.advance(Duration::from_millis(400), &agents, "10:00:01", &mut rng),
            1
        );
        assert_eq!(chat.messages().len(), 4);
    }

    #[test]
    fn test_dm_shortcuts() {
        let agents = demo_agents();
        let (shown, more) = dm_shortcuts(&agents);
        assert_eq!(shown.len(), 3);
        assert_eq!(more, 1);
        let (shown, more) = dm_shortcuts(&agents[..2]);
        assert_eq!(shown.len(), 2);
        assert_eq!(more, 0);
    }
}
