// Task queue
// Completion bar plus one row per task

use crate::ui::components::{card, empty_state, pill, priority_color, section_header, task_status_color};
use eframe::egui;
use mission_control_core::state::{task_completion_percent, Dashboard, Task, TaskStatus, FALLBACK_AVATAR};

pub fn render(ui: &mut egui::Ui, dashboard: &Dashboard) {
    let completed = dashboard.count_tasks(TaskStatus::Completed);
    let subtitle = format!("{}/{} completed", completed, dashboard.tasks.len());
    section_header(ui, "Task Queue", Some(&subtitle));

    let percent = task_completion_percent(&dashboard.tasks);
    ui.add(
        egui::ProgressBar::new(f32::from(percent) / 100.0)
            .text(format!("{percent}% complete"))
            .desired_height(14.0),
    );
    ui.add_space(8.0);

    if dashboard.tasks.is_empty() {
        empty_state(ui, "Queue is empty", "No tasks have been scheduled");
        return;
    }

    for task in &dashboard.tasks {
        render_task_row(ui, dashboard, task);
        ui.add_space(4.0);
    }
}

fn render_task_row(ui: &mut egui::Ui, dashboard: &Dashboard, task: &Task) {
    let assignee = task.agent_id.as_deref().and_then(|id| dashboard.agent(id));
    card(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.colored_label(priority_color(task.priority), "●");
            ui.label(assignee.map_or(FALLBACK_AVATAR, |a| a.avatar.as_str()));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&task.title).strong());
                let owner = match assignee {
                    Some(agent) => format!("Assigned to {}", agent.name),
                    None => "Unassigned".to_string(),
                };
                ui.label(egui::RichText::new(owner).weak().size(12.0));
                if let Some(description) = &task.description {
                    ui.label(egui::RichText::new(description).small());
                }
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                pill(ui, task.status.label(), task_status_color(task.status));
                pill(ui, task.priority.label(), priority_color(task.priority));
            });
        });
    });
}
