//! Application configuration
//!
//! Timer periods, log buffer sizing and the optional RNG seed, loaded from
//! environment variables with sensible defaults.

use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// Simulation timer configuration
    pub timers: TimerConfig,
    /// Live terminal configuration
    pub logs: LogConfig,
    /// Fixed RNG seed (None = seed from entropy)
    pub seed: Option<u64>,
}

/// Timer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TimerConfig {
    /// Period of the randomized agent status ticker
    pub status_tick: Duration,
    /// Probability that a single agent flips on a ticker period
    pub status_flip_chance: f64,
    /// Delay before a canned chat reply is delivered
    pub chat_reply_delay: Duration,
    /// Time each workflow step stays active while a workflow runs
    pub workflow_step_delay: Duration,
    /// Period of the live log generator
    pub log_tick: Duration,
    /// Period of the live activity injector
    pub activity_tick: Duration,
}

/// Live terminal configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Maximum number of log entries retained
    pub capacity: usize,
    /// Directory log exports are written into
    pub export_dir: PathBuf,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            status_tick: Duration::from_millis(5000),
            status_flip_chance: 0.1,
            chat_reply_delay: Duration::from_millis(1000),
            workflow_step_delay: Duration::from_millis(1500),
            log_tick: Duration::from_millis(800),
            activity_tick: Duration::from_millis(3000),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            capacity: 101,
            export_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Self {
            timers: TimerConfig {
                status_tick: millis_var("MC_STATUS_TICK_MS", defaults.timers.status_tick),
                status_flip_chance: parsed_var(
                    "MC_STATUS_FLIP_CHANCE",
                    defaults.timers.status_flip_chance,
                ),
                chat_reply_delay: millis_var("MC_CHAT_REPLY_MS", defaults.timers.chat_reply_delay),
                workflow_step_delay: millis_var(
                    "MC_STEP_DELAY_MS",
                    defaults.timers.workflow_step_delay,
                ),
                log_tick: millis_var("MC_LOG_TICK_MS", defaults.timers.log_tick),
                activity_tick: millis_var("MC_ACTIVITY_TICK_MS", defaults.timers.activity_tick),
            },
            logs: LogConfig {
                capacity: parsed_var("MC_LOG_CAPACITY", defaults.logs.capacity),
                export_dir: env::var_os("MC_EXPORT_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.logs.export_dir),
            },
            seed: env::var("MC_SEED").ok().and_then(|raw| match raw.parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    warn!(value = %raw, "Ignoring unparseable MC_SEED");
                    None
                }
            }),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("status_tick", self.timers.status_tick),
            ("chat_reply_delay", self.timers.chat_reply_delay),
            ("workflow_step_delay", self.timers.workflow_step_delay),
            ("log_tick", self.timers.log_tick),
            ("activity_tick", self.timers.activity_tick),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, period)| period.is_zero()) {
            return Err(ConfigError::ZeroPeriod(name));
        }
        let chance = self.timers.status_flip_chance;
        if !(0.0..=1.0).contains(&chance) {
            return Err(ConfigError::FlipChanceOutOfRange(chance));
        }
        if self.logs.capacity == 0 {
            return Err(ConfigError::ZeroLogCapacity);
        }
        Ok(())
    }
}

fn parsed_var<T: FromStr + Copy>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Unparseable configuration value, using default");
            default
        }),
        Err(_) => default,
    }
}

fn millis_var(key: &str, default: Duration) -> Duration {
    Duration::from_millis(parsed_var(key, default.as_millis() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "MC_STATUS_TICK_MS",
            "MC_STATUS_FLIP_CHANCE",
            "MC_CHAT_REPLY_MS",
            "MC_STEP_DELAY_MS",
            "MC_LOG_TICK_MS",
            "MC_ACTIVITY_TICK_MS",
            "MC_LOG_CAPACITY",
            "MC_EXPORT_DIR",
            "MC_SEED",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env();
        assert_eq!(config, Config::default());
        assert_eq!(config.timers.status_tick, Duration::from_secs(5));
        assert_eq!(config.logs.capacity, 101);
        assert!(config.seed.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        env::set_var("MC_STEP_DELAY_MS", "250");
        env::set_var("MC_SEED", "42");
        env::set_var("MC_EXPORT_DIR", "/tmp/mc-logs");
        let config = Config::from_env();
        assert_eq!(config.timers.workflow_step_delay, Duration::from_millis(250));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.logs.export_dir, PathBuf::from("/tmp/mc-logs"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_bad_value_falls_back() {
        clear_env();
        env::set_var("MC_LOG_TICK_MS", "fast");
        env::set_var("MC_SEED", "not-a-number");
        let config = Config::from_env();
        assert_eq!(config.timers.log_tick, Duration::from_millis(800));
        assert!(config.seed.is_none());
        clear_env();
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.timers.log_tick = Duration::ZERO;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPeriod("log_tick")));

        let mut config = Config::default();
        config.timers.status_flip_chance = 1.5;
        assert_eq!(
            config.validate(),
            Err(ConfigError::FlipChanceOutOfRange(1.5))
        );

        let mut config = Config::default();
        config.logs.capacity = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroLogCapacity));
    }
}
