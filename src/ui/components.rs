// Reusable UI components
// Badges, colors and buttons shared by every panel

use eframe::egui;
use mission_control_core::activity::ActivityKind;
use mission_control_core::logs::LogLevel;
use mission_control_core::state::{AgentStatus, TaskPriority, TaskStatus, WorkflowStatus};

pub const GREEN: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);
pub const YELLOW: egui::Color32 = egui::Color32::from_rgb(220, 180, 0);
pub const RED: egui::Color32 = egui::Color32::from_rgb(220, 0, 0);
pub const BLUE: egui::Color32 = egui::Color32::from_rgb(60, 140, 240);
pub const PURPLE: egui::Color32 = egui::Color32::from_rgb(160, 100, 230);
pub const ORANGE: egui::Color32 = egui::Color32::from_rgb(240, 130, 40);

/// Series colors for charts, indexed by agent position
pub const CHART_PALETTE: [egui::Color32; 6] = [BLUE, GREEN, PURPLE, ORANGE, YELLOW, RED];

/// Colors: Idle (gray), Working (green), Error (red), Offline (dark gray)
pub fn agent_status_color(status: AgentStatus) -> egui::Color32 {
    match status {
        AgentStatus::Idle => egui::Color32::GRAY,
        AgentStatus::Working => GREEN,
        AgentStatus::Error => RED,
        AgentStatus::Offline => egui::Color32::DARK_GRAY,
    }
}

pub fn task_status_color(status: TaskStatus) -> egui::Color32 {
    match status {
        TaskStatus::Pending => YELLOW,
        TaskStatus::InProgress => BLUE,
        TaskStatus::Completed => GREEN,
        TaskStatus::Failed => RED,
    }
}

pub fn priority_color(priority: TaskPriority) -> egui::Color32 {
    match priority {
        TaskPriority::Low => egui::Color32::GRAY,
        TaskPriority::Medium => BLUE,
        TaskPriority::High => ORANGE,
        TaskPriority::Critical => RED,
    }
}

pub fn workflow_status_color(status: WorkflowStatus) -> egui::Color32 {
    match status {
        WorkflowStatus::Draft => egui::Color32::GRAY,
        WorkflowStatus::Active => GREEN,
        WorkflowStatus::Completed => BLUE,
        WorkflowStatus::Paused => YELLOW,
    }
}

pub fn log_level_color(level: LogLevel) -> egui::Color32 {
    match level {
        LogLevel::Info => BLUE,
        LogLevel::Success => GREEN,
        LogLevel::Warn => YELLOW,
        LogLevel::Error => RED,
        LogLevel::Debug => PURPLE,
    }
}

pub fn activity_kind_color(kind: ActivityKind) -> egui::Color32 {
    match kind {
        ActivityKind::Task => BLUE,
        ActivityKind::Agent => GREEN,
        ActivityKind::System => egui::Color32::GRAY,
        ActivityKind::Chat => PURPLE,
        ActivityKind::Workflow => ORANGE,
    }
}

/// Render a status badge with colored text (no background bar)
pub fn status_badge(ui: &mut egui::Ui, status: AgentStatus) {
    ui.colored_label(agent_status_color(status), format!("● {}", status.label()));
}

/// Small rounded label with a tinted background
pub fn pill(ui: &mut egui::Ui, text: &str, color: egui::Color32) -> egui::Response {
    egui::Frame::none()
        .fill(color.gamma_multiply(0.2))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(color).size(11.0));
        })
        .response
}

/// Toggle pill for filter bars; returns true when clicked
pub fn filter_pill(ui: &mut egui::Ui, text: &str, selected: bool) -> bool {
    ui.selectable_label(selected, egui::RichText::new(text).size(12.0))
        .clicked()
}

/// Card container used by panels and stat tiles
pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, add_contents)
        .inner
}

/// Section header with an optional weak subtitle on the right
pub fn section_header(ui: &mut egui::Ui, title: &str, subtitle: Option<&str>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(title).heading().size(16.0));
        if let Some(subtitle) = subtitle {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(subtitle).weak().size(12.0));
            });
        }
    });
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(4.0);
}

/// Render a run/resume button (green)
pub fn start_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.button(egui::RichText::new(format!("▶ {text}")).color(GREEN))
}

/// Render a pause button (yellow)
pub fn pause_button(ui: &mut egui::Ui) -> egui::Response {
    ui.button(egui::RichText::new("⏸ Pause").color(YELLOW))
}

/// Empty-state placeholder
pub fn empty_state(ui: &mut egui::Ui, title: &str, hint: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(egui::RichText::new(title).italics().weak().size(14.0));
        ui.add_space(6.0);
        ui.label(egui::RichText::new(hint).weak().size(12.0));
        ui.add_space(24.0);
    });
}
