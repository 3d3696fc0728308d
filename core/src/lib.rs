//! Agent Mission Control core
//!
//! Headless simulation behind the dashboard: demo fixtures, timers, the
//! randomized status ticker, chat replies, the workflow executor, the
//! activity feed, the live log stream and analytics snapshots.
//!
//! Nothing in here reads the wall clock to drive timers. The UI passes the
//! elapsed frame time into [`Simulation::advance`].

pub mod activity;
pub mod analytics;
pub mod chat;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod logs;
pub mod sim;
/// Data model and root dashboard state
pub mod state;
pub mod workflow;

pub use config::Config;
pub use error::{ConfigError, ExportError, SimError};
pub use sim::Simulation;
