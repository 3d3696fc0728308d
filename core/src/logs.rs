//! Live terminal log stream
//!
//! A rolling buffer of generated log lines. This is display content for the
//! "Logs" tab, not the application's own diagnostics (those go through
//! `tracing`).

use crate::error::ExportError;
use crate::sim::timer::Interval;
use chrono::{DateTime, Duration as ChronoDuration, Local, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Severity of a generated log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Informational
    Info,
    /// Something finished well
    Success,
    /// Something looks off
    Warn,
    /// Something failed
    Error,
    /// Low-level detail
    Debug,
}

impl LogLevel {
    /// All levels, in filter-bar order
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Info,
        LogLevel::Success,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Debug,
    ];

    /// Uppercase label
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Success => "SUCCESS",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// Level filter for the log view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFilter {
    /// Show everything
    #[default]
    All,
    /// Show one level only
    Level(LogLevel),
}

impl LogFilter {
    /// Whether an entry passes the filter
    pub fn matches(self, entry: &LogEntry) -> bool {
        match self {
            LogFilter::All => true,
            LogFilter::Level(level) => entry.level == level,
        }
    }
}

/// A generated log line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Unique identifier
    pub id: String,
    /// When the line was generated
    pub timestamp: DateTime<Local>,
    /// Severity
    pub level: LogLevel,
    /// Component the line claims to come from
    pub source: String,
    /// Message text
    pub message: String,
    /// Extra detail (debug lines carry a fake pid)
    pub metadata: Option<String>,
}

impl LogEntry {
    /// `[HH:MM:SS] [LEVEL] source: message`
    pub fn export_line(&self) -> String {
        format!(
            "[{}] [{}] {}: {}",
            self.timestamp.format("%H:%M:%S"),
            self.level.label(),
            self.source,
            self.message
        )
    }
}

const INITIAL_SOURCES: [&str; 6] = [
    "AgentManager",
    "TaskQueue",
    "GeminiAPI",
    "WebSocket",
    "System",
    "WorkflowEngine",
];

const LIVE_SOURCES: [&str; 7] = [
    "AgentManager",
    "TaskQueue",
    "GeminiAPI",
    "WebSocket",
    "System",
    "WorkflowEngine",
    "Analytics",
];

const INITIAL_MESSAGES: [(LogLevel, &str); 12] = [
    (LogLevel::Info, "Initializing agent coordination service..."),
    (LogLevel::Success, "Agent 'Echo' registered successfully (id: echo-001)"),
    (LogLevel::Success, "Agent 'Cipher' registered successfully (id: cipher-001)"),
    (LogLevel::Success, "Agent 'Angel' registered successfully (id: angel-001)"),
    (LogLevel::Info, "Connecting to Gemini 3 API endpoint..."),
    (LogLevel::Success, "Gemini 3 API connection established (latency: 42ms)"),
    (LogLevel::Info, "Task queue initialized with 4 pending tasks"),
    (LogLevel::Debug, "WebSocket connection ready on port 3001"),
    (LogLevel::Info, "Workflow engine started - 2 workflows loaded"),
    (LogLevel::Success, "All systems operational. Ready for commands."),
    (LogLevel::Info, "Heartbeat check: 3 agents responding"),
    (LogLevel::Debug, "Memory usage: 234MB / 1024MB (22.8%)"),
];

/// Level weights for live lines: info is three times as likely as the rest
const LIVE_LEVELS: [LogLevel; 6] = [
    LogLevel::Info,
    LogLevel::Info,
    LogLevel::Info,
    LogLevel::Success,
    LogLevel::Debug,
    LogLevel::Warn,
];

/// Chance that a log tick actually produces a line
pub const EMIT_CHANCE: f64 = 0.7;

fn templates(level: LogLevel) -> &'static [&'static str] {
    match level {
        LogLevel::Info => &[
            "Processing task assignment...",
            "Agent status update received",
            "Syncing task state with database",
            "Heartbeat received from agent",
            "Analyzing workflow dependencies...",
            "Checking API rate limits...",
        ],
        LogLevel::Success => &[
            "Task completed successfully",
            "Agent finished processing",
            "Workflow step executed",
            "Data synced successfully",
            "Cache invalidated",
        ],
        LogLevel::Warn => &[
            "High memory usage detected (78%)",
            "API response time elevated (245ms)",
            "Agent idle for extended period",
            "Retry attempt 2/3 for task",
        ],
        LogLevel::Error => &[
            "Failed to connect to agent",
            "Task execution timeout",
            "API rate limit exceeded",
        ],
        LogLevel::Debug => &[
            "Memory stats: heap=156MB, external=23MB",
            "Event loop lag: 2.4ms",
            "Active connections: 5",
        ],
    }
}

fn pick<R: Rng + ?Sized>(items: &[&'static str], rng: &mut R) -> String {
    items.choose(rng).copied().unwrap_or_default().to_string()
}

/// The twelve boot lines, one second apart, the last one a second before `now`
pub fn initial_logs<R: Rng + ?Sized>(now: DateTime<Local>, rng: &mut R) -> Vec<LogEntry> {
    let count = INITIAL_MESSAGES.len() as i64;
    INITIAL_MESSAGES
        .iter()
        .enumerate()
        .map(|(i, (level, message))| LogEntry {
            id: format!("init-{i}"),
            timestamp: now - ChronoDuration::seconds(count - i as i64),
            level: *level,
            source: pick(&INITIAL_SOURCES, rng),
            message: message.to_string(),
            metadata: None,
        })
        .collect()
}

/// Generate one random live line
pub fn generate_live_log<R: Rng + ?Sized>(
    now: DateTime<Local>,
    seq: u64,
    rng: &mut R,
) -> LogEntry {
    let level = *LIVE_LEVELS.choose(rng).unwrap_or(&LogLevel::Info);
    LogEntry {
        id: format!("live-{seq}"),
        timestamp: now,
        level,
        source: pick(&LIVE_SOURCES, rng),
        message: pick(templates(level), rng),
        metadata: (level == LogLevel::Debug).then(|| format!("pid={}", rng.gen_range(1000..10000))),
    }
}

/// Rolling log buffer with streaming control
#[derive(Debug, Clone)]
pub struct LogStream {
    entries: Vec<LogEntry>,
    capacity: usize,
    streaming: bool,
    timer: Interval,
    seq: u64,
}

impl LogStream {
    /// Create a stream seeded with the boot lines
    pub fn new<R: Rng + ?Sized>(
        capacity: usize,
        tick: Duration,
        now: DateTime<Local>,
        rng: &mut R,
    ) -> Self {
        let mut stream = Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
            streaming: true,
            timer: Interval::new(tick),
            seq: 0,
        };
        for entry in initial_logs(now, rng) {
            stream.push(entry);
        }
        stream
    }

    /// Append an entry, dropping the oldest beyond capacity
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(..excess);
        }
    }

    /// Append a line describing something the dashboard itself did
    pub fn record(&mut self, level: LogLevel, source: &str, message: String, now: DateTime<Local>) {
        self.seq += 1;
        self.push(LogEntry {
            id: format!("event-{}", self.seq),
            timestamp: now,
            level,
            source: source.to_string(),
            message,
            metadata: None,
        });
    }

    /// Advance the generator; returns how many lines were added
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt: Duration,
        now: DateTime<Local>,
        rng: &mut R,
    ) -> usize {
        if !self.streaming {
            return 0;
        }
        let mut added = 0;
        for _ in 0..self.timer.advance(dt) {
            if rng.gen_bool(EMIT_CHANCE) {
                self.seq += 1;
                let entry = generate_live_log(now, self.seq, rng);
                self.push(entry);
                added += 1;
            }
        }
        added
    }

    /// All retained entries, oldest first
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries passing the filter
    pub fn filtered(&self, filter: LogFilter) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Per-level counts over the whole buffer, in `LogLevel::ALL` order
    pub fn counts(&self) -> [(LogLevel, usize); 5] {
        LogLevel::ALL.map(|level| {
            (
                level,
                self.entries.iter().filter(|e| e.level == level).count(),
            )
        })
    }

    /// Whether new lines are being generated
    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Pause or resume generation
    pub fn set_streaming(&mut self, streaming: bool) {
        if streaming && !self.streaming {
            self.timer.reset();
        }
        self.streaming = streaming;
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Plain-text export, one `export_line` per entry
    pub fn render_export(&self) -> String {
        self.entries
            .iter()
            .map(LogEntry::export_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the plain-text export into `dir` and return the file path
    pub fn export_to(&self, dir: &Path, today: NaiveDate) -> Result<PathBuf, ExportError> {
        let path = dir.join(export_file_name(today, "txt"));
        self.write_export(&path, self.render_export())
    }

    /// Write the entries as pretty JSON into `dir` and return the file path
    pub fn export_json_to(&self, dir: &Path, today: NaiveDate) -> Result<PathBuf, ExportError> {
        let path = dir.join(export_file_name(today, "json"));
        let json = serde_json::to_string_pretty(&self.entries)?;
        self.write_export(&path, json)
    }

    fn write_export(&self, path: &Path, contents: String) -> Result<PathBuf, ExportError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        info!(path = %path.display(), entries = self.entries.len(), "Log export written");
        Ok(path.to_path_buf())
    }
}

/// `agent-mission-control-logs-YYYY-MM-DD.<ext>`
pub fn export_file_name(today: NaiveDate, ext: &str) -> String {
    format!("agent-mission-control-logs-{}.{ext}", today.format("%Y-%m-%d"))
}
