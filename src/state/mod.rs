// UI state module
// Tab selection, form buffers and transient notices; simulation state lives in the core crate

pub mod app_state;

pub use app_state::{Tab, UiState};
