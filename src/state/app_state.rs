// UI-local state
// Everything the window needs between frames that is not simulation state

use mission_control_core::activity::ActivityKind;
use mission_control_core::logs::LogFilter;
use mission_control_core::state::Agent;
use std::time::Duration;

/// How long a notice stays on screen
pub const NOTICE_TTL: Duration = Duration::from_secs(6);

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Agent grid, task queue and activity feed
    #[default]
    Dashboard,
    /// Charts and stat cards
    Analytics,
    /// Workflow builder
    Workflows,
    /// Team chat
    Chat,
    /// Live terminal
    Logs,
}

impl Tab {
    /// All tabs, in tab-bar order
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Analytics,
        Tab::Workflows,
        Tab::Chat,
        Tab::Logs,
    ];

    /// Tab-bar label
    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "📊 Dashboard",
            Tab::Analytics => "📈 Analytics",
            Tab::Workflows => "🔀 Workflows",
            Tab::Chat => "💬 Team Chat",
            Tab::Logs => "🖥 Logs",
        }
    }
}

/// A one-line message shown in the footer until it expires
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Message text
    pub text: String,
    /// Render as an error
    pub is_error: bool,
    remaining: Duration,
}

/// "Add step" form buffers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepForm {
    /// Selected agent
    pub agent_id: String,
    /// Action label
    pub action: String,
    /// Input description
    pub input: String,
}

impl StepForm {
    /// Pick the first agent if the current choice is empty or gone
    pub fn ensure_agent(&mut self, agents: &[Agent]) {
        if !agents.iter().any(|a| a.id == self.agent_id) {
            self.agent_id = agents.first().map(|a| a.id.clone()).unwrap_or_default();
        }
    }

    /// Clear the text fields after a step was added (the agent choice stays)
    pub fn clear_text(&mut self) {
        self.action.clear();
        self.input.clear();
    }
}

/// UI-specific state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Selected tab
    pub tab: Tab,
    /// "Create new agent" input
    pub new_agent_name: String,
    /// Chat input
    pub chat_input: String,
    /// "New workflow name" input
    pub new_workflow_name: String,
    /// "Add step" form
    pub step_form: StepForm,
    /// Live terminal level filter
    pub log_filter: LogFilter,
    /// Activity feed kind filter (None = all)
    pub activity_filter: Option<ActivityKind>,
    /// Scroll the terminal to the newest line
    pub auto_scroll: bool,
    /// Whether the about window is open
    pub about_open: bool,
    notice: Option<Notice>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            new_agent_name: String::new(),
            chat_input: String::new(),
            new_workflow_name: String::new(),
            step_form: StepForm::default(),
            log_filter: LogFilter::All,
            activity_filter: None,
            auto_scroll: true,
            about_open: false,
            notice: None,
        }
    }
}

impl UiState {
    /// Create a new UI state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an informational notice
    pub fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            is_error: false,
            remaining: NOTICE_TTL,
        });
    }

    /// Show an error notice
    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            is_error: true,
            remaining: NOTICE_TTL,
        });
    }

    /// Current notice, if it has not expired
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Count down the notice
    pub fn tick(&mut self, dt: Duration) {
        if let Some(notice) = &mut self.notice {
            notice.remaining = notice.remaining.saturating_sub(dt);
            if notice.remaining.is_zero() {
                self.notice = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mission_control_core::fixtures::demo_agents;

    #[test]
    fn test_ui_state_defaults() {
        let state = UiState::new();
        assert_eq!(state.tab, Tab::Dashboard);
        assert_eq!(state.log_filter, LogFilter::All);
        assert!(state.auto_scroll);
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_notice_expires() {
        let mut state = UiState::new();
        state.notify_error("Workflow has no steps: 7");
        assert!(state.notice().unwrap().is_error);

        state.tick(NOTICE_TTL / 2);
        assert!(state.notice().is_some());
        state.tick(NOTICE_TTL);
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_newer_notice_replaces_older() {
        let mut state = UiState::new();
        state.notify_error("boom");
        state.notify("Logs exported");
        let notice = state.notice().unwrap();
        assert_eq!(notice.text, "Logs exported");
        assert!(!notice.is_error);
    }

    #[test]
    fn test_step_form_agent_choice() {
        let agents = demo_agents();
        let mut form = StepForm::default();
        form.ensure_agent(&agents);
        assert_eq!(form.agent_id, "echo");

        form.agent_id = "nova".to_string();
        form.ensure_agent(&agents);
        assert_eq!(form.agent_id, "nova");

        form.agent_id = "ghost".to_string();
        form.ensure_agent(&agents);
        assert_eq!(form.agent_id, "echo");

        form.ensure_agent(&[]);
        assert!(form.agent_id.is_empty());
    }

    #[test]
    fn test_step_form_clear_keeps_agent() {
        let mut form = StepForm {
            agent_id: "echo".to_string(),
            action: "Scan".to_string(),
            input: "repo".to_string(),
        };
        form.clear_text();
        assert_eq!(form.agent_id, "echo");
        assert!(form.action.is_empty() && form.input.is_empty());
    }
}
