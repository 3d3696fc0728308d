// UI module
// Contains layout, panels, and reusable components

pub mod activity;
pub mod agents;
pub mod analytics;
pub mod chat;
pub mod components;
pub mod layout;
pub mod status_bar;
pub mod task_queue;
pub mod terminal;
pub mod workflows;

pub use layout::render_app_layout;
