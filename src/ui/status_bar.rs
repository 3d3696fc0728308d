// Status bar
// Active agents, pending and completed tasks, and uptime

use crate::ui::components::{BLUE, GREEN, YELLOW};
use eframe::egui;
use mission_control_core::state::Dashboard;

/// Render the status bar right-to-left, so the first item drawn ends up rightmost
pub fn render(ui: &mut egui::Ui, dashboard: &Dashboard) {
    let summary = dashboard.status_summary();
    stat(ui, "⏱", &summary.uptime, egui::Color32::GRAY);
    ui.separator();
    stat(ui, "✔", &format!("{} done", summary.completed_tasks), BLUE);
    ui.separator();
    stat(ui, "⏳", &format!("{} pending", summary.pending_tasks), YELLOW);
    ui.separator();
    stat(ui, "●", &format!("{} active", summary.active_agents), GREEN);
}

fn stat(ui: &mut egui::Ui, icon: &str, text: &str, color: egui::Color32) {
    ui.label(egui::RichText::new(text).monospace().size(12.0));
    ui.colored_label(color, icon);
}
