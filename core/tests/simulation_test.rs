//! Integration tests for the simulated mission control
//!
//! These drive the full `Simulation` through its public surface with a fixed
//! seed and explicit frame times, checking the dashboard's UI-state
//! invariants end to end.

use chrono::{Local, TimeZone};
use mission_control_core::activity::ActivityKind;
use mission_control_core::logs::{LogFilter, LogLevel};
use mission_control_core::state::{task_completion_percent, AgentStatus, Sender, StepState, WorkflowStatus};
use mission_control_core::workflow::ExecutorEvent;
use mission_control_core::{Config, ConfigError, SimError, Simulation};
use std::time::Duration;

/// Config with a fixed seed and the default timers
fn seeded_config() -> Config {
    Config {
        seed: Some(1234),
        ..Config::default()
    }
}

fn simulation() -> Simulation {
    Simulation::new(seeded_config()).expect("default config is valid")
}

fn frame(sim: &mut Simulation, dt: Duration) -> mission_control_core::sim::TickReport {
    let now = Local.with_ymd_and_hms(2024, 11, 5, 21, 45, 12).unwrap();
    sim.advance_at(dt, now)
}

#[test]
fn test_add_agent_appends_one_idle_entry() {
    let mut sim = simulation();
    let before = sim.dashboard.agent_count();

    let id = sim.add_agent("Atlas").expect("non-empty name");
    assert_eq!(sim.dashboard.agent_count(), before + 1);
    let agent = sim.dashboard.agents.last().unwrap();
    assert_eq!(agent.id, id);
    assert_eq!(agent.status, AgentStatus::Idle);

    assert!(sim.add_agent("").is_none());
    assert_eq!(sim.dashboard.agent_count(), before + 1);
}

#[test]
fn test_empty_chat_message_produces_nothing() {
    let mut sim = simulation();
    assert!(!sim.send_chat(""));
    assert!(!sim.send_chat("   "));
    frame(&mut sim, Duration::from_secs(5));
    assert!(sim.chat.messages().is_empty());
}

#[test]
fn test_chat_reply_after_fixed_delay() {
    let mut sim = simulation();
    assert!(sim.send_chat("What's the plan?"));

    let report = frame(&mut sim, Duration::from_millis(999));
    assert_eq!(report.replies, 0);
    let report = frame(&mut sim, Duration::from_millis(1));
    assert_eq!(report.replies, 1);

    let messages = sim.chat.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[1].sender, Sender::Agent);
}

#[test]
fn test_workflow_run_walks_every_step_in_order() {
    let mut sim = simulation();
    let agents = sim.dashboard.agents.clone();
    let id = sim.workflows.create_workflow("Launch").unwrap();
    for (agent, action) in agents.iter().zip(["Research", "Build", "Review", "Ship"]) {
        sim.add_workflow_step(&id, &agent.id, action, "brief").unwrap();
    }
    let n = sim.workflows.workflow(&id).unwrap().steps.len();
    assert_eq!(n, 4);

    sim.workflows.run(&id).unwrap();
    let mut active_seen = vec![sim.workflows.workflow(&id).unwrap().active_step().unwrap()];
    let step_delay = sim.config().timers.workflow_step_delay;

    let mut finished = false;
    for _ in 0..n {
        let report = frame(&mut sim, step_delay);
        for event in report.executor {
            match event {
                ExecutorEvent::StepStarted { workflow_id, index } if workflow_id == id => {
                    active_seen.push(index)
                }
                ExecutorEvent::Finished { workflow_id } if workflow_id == id => finished = true,
                _ => {}
            }
        }
    }

    assert_eq!(active_seen, (0..n).collect::<Vec<_>>());
    assert!(finished);
    let workflow = sim.workflows.workflow(&id).unwrap();
    assert_eq!(workflow.status, WorkflowStatus::Completed);
    assert_eq!(workflow.progress, 100);
    assert!(workflow.steps.iter().all(|s| s.state == StepState::Complete
        && s.output.as_deref().is_some_and(|o| !o.is_empty())));
}

#[test]
fn test_progress_is_linear() {
    let mut sim = simulation();
    let id = sim.workflows.create_workflow("Triple").unwrap();
    for action in ["a", "b", "c"] {
        sim.add_workflow_step(&id, "echo", action, "").unwrap();
    }
    sim.workflows.run(&id).unwrap();
    let step_delay = sim.config().timers.workflow_step_delay;

    let mut progress = Vec::new();
    for _ in 0..3 {
        frame(&mut sim, step_delay);
        progress.push(sim.workflows.workflow(&id).unwrap().progress);
    }
    assert_eq!(progress, vec![33, 67, 100]);
}

#[test]
fn test_running_empty_workflow_is_rejected() {
    let mut sim = simulation();
    let id = sim.workflows.create_workflow("Empty").unwrap();
    assert_eq!(sim.workflows.run(&id), Err(SimError::EmptyWorkflow(id)));
}

#[test]
fn test_executor_events_reach_live_terminal() {
    let mut sim = simulation();
    sim.logs.set_streaming(false);
    let before = sim.logs.entries().len();
    let step_delay = sim.config().timers.workflow_step_delay;

    // The demo pipeline starts active
    frame(&mut sim, step_delay);
    let engine_lines = sim.logs.entries()[before..]
        .iter()
        .filter(|e| e.source == "WorkflowEngine")
        .count();
    assert_eq!(engine_lines, 2);
}

#[test]
fn test_task_completion_percent_fixtures_and_empty() {
    let sim = simulation();
    assert_eq!(task_completion_percent(&sim.dashboard.tasks), 25);
    assert_eq!(task_completion_percent(&[]), 0);
}

#[test]
fn test_log_filter_count_matches_list() {
    let mut sim = simulation();
    frame(&mut sim, Duration::from_secs(30));

    for level in LogLevel::ALL {
        let shown = sim.logs.filtered(LogFilter::Level(level));
        assert!(shown.iter().all(|e| e.level == level));
        let counted = sim
            .logs
            .counts()
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, c)| *c)
            .unwrap();
        assert_eq!(shown.len(), counted);
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let mut a = simulation();
    let mut b = simulation();
    for _ in 0..20 {
        frame(&mut a, Duration::from_millis(900));
        frame(&mut b, Duration::from_millis(900));
    }
    let statuses = |sim: &Simulation| {
        sim.dashboard
            .agents
            .iter()
            .map(|a| a.status)
            .collect::<Vec<_>>()
    };
    assert_eq!(statuses(&a), statuses(&b));
    let messages = |sim: &Simulation| {
        sim.logs
            .entries()
            .iter()
            .map(|e| e.message.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(messages(&a), messages(&b));
}

#[test]
fn test_concurrent_runs_are_reproducible() {
    let executor_order = || {
        let mut sim = simulation();
        sim.workflows.run("2").unwrap();
        let step_delay = sim.config().timers.workflow_step_delay;
        (0..4)
            .flat_map(|_| frame(&mut sim, step_delay).executor)
            .collect::<Vec<_>>()
    };
    let first = executor_order();
    assert!(first.iter().any(|e| matches!(e, ExecutorEvent::Finished { workflow_id } if workflow_id == "2")));
    for _ in 0..10 {
        assert_eq!(executor_order(), first);
    }
}

/// Config whose status ticker flips every agent on every tick
fn always_flipping() -> Config {
    let mut config = seeded_config();
    config.timers.status_flip_chance = 1.0;
    config
}

fn working_ids(sim: &Simulation) -> Vec<String> {
    sim.dashboard
        .agents
        .iter()
        .filter(|a| a.status == AgentStatus::Working)
        .map(|a| a.id.clone())
        .collect()
}

#[test]
fn test_analytics_follow_flips_and_new_agents() {
    let mut sim = Simulation::new(always_flipping()).unwrap();
    sim.add_agent("Atlas").unwrap();
    let status_tick = sim.config().timers.status_tick;
    frame(&mut sim, status_tick);

    let analytics = sim.analytics();
    let summary = sim.dashboard.status_summary();
    assert_eq!(analytics.stats.active_agents, summary.active_agents);
    assert_eq!(analytics.stats.total_agents, sim.dashboard.agent_count());
    assert_eq!(analytics.performance.len(), sim.dashboard.agent_count());
    assert_eq!(analytics.performance.last().unwrap().name, "Atlas");
}

#[test]
fn test_status_flip_rebuilds_activity_feed() {
    let mut sim = Simulation::new(always_flipping()).unwrap();
    sim.activity.set_live(false);
    let before = working_ids(&sim);
    let status_tick = sim.config().timers.status_tick;

    let report = frame(&mut sim, status_tick);
    assert_eq!(report.flipped.len(), sim.dashboard.agent_count());

    let after = working_ids(&sim);
    assert_ne!(before, after);
    let mut featured: Vec<String> = sim
        .activity
        .filtered(Some(ActivityKind::Agent))
        .iter()
        .filter_map(|item| item.agent_id.clone())
        .collect();
    featured.sort();
    let mut expected = after;
    expected.sort();
    assert_eq!(featured, expected);
}

#[test]
fn test_add_agent_logs_and_rebuilds_feed() {
    let mut sim = simulation();
    let activity_tick = sim.config().timers.activity_tick;
    frame(&mut sim, activity_tick);
    assert!(sim.activity.items().iter().any(|i| i.id.starts_with("live-")));

    sim.add_agent("  Atlas ").unwrap();
    assert_eq!(sim.dashboard.agents.last().unwrap().name, "Atlas");
    let last = sim.logs.entries().last().unwrap();
    assert_eq!(last.source, "AgentManager");
    assert_eq!(last.level, LogLevel::Success);
    assert_eq!(last.message, "Agent 'Atlas' registered successfully");
    assert!(!sim.activity.items().iter().any(|i| i.id.starts_with("live-")));
}

#[test]
fn test_status_summary_tracks_uptime() {
    let mut sim = simulation();
    frame(&mut sim, Duration::from_secs(61));
    let summary = sim.dashboard.status_summary();
    assert_eq!(summary.uptime, "00:01:01");
    assert_eq!(summary.pending_tasks, 2);
    assert_eq!(summary.completed_tasks, 1);
}

#[test]
fn test_invalid_config_is_refused() {
    let mut config = seeded_config();
    config.timers.chat_reply_delay = Duration::ZERO;
    assert_eq!(
        Simulation::new(config).err().map(|e| e.to_string()),
        Some(ConfigError::ZeroPeriod("chat_reply_delay").to_string())
    );
}

#[test]
fn test_log_export_to_configured_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = seeded_config();
    config.logs.export_dir = dir.path().to_path_buf();
    let sim = Simulation::new(config).unwrap();

    let path = sim.export_logs().unwrap();
    assert!(path.starts_with(dir.path()));
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), sim.logs.entries().len());
}
