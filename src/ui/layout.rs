// Main application layout
// Handles menu bar, header, tab bar, footer and the per-tab content area

use crate::state::{Tab, UiState};
use crate::ui::components::{GREEN, RED};
use crate::ui::{activity, agents, analytics, chat, status_bar, task_queue, terminal, workflows};
use eframe::egui;
use mission_control_core::Simulation;
use tracing::{error, info};

/// Render the main application layout
/// Includes menu bar, header with status bar, tabs, and the selected tab's content
pub fn render_app_layout(ctx: &egui::Context, sim: &mut Simulation, ui_state: &mut UiState) {
    render_menu_bar(ctx, sim, ui_state);
    render_header(ctx, sim, ui_state);
    render_footer(ctx, ui_state);

    // The activity feed sits beside the dashboard only
    if ui_state.tab == Tab::Dashboard {
        egui::SidePanel::right("activity_feed")
            .resizable(true)
            .default_width(320.0)
            .min_width(240.0)
            .show(ctx, |ui| activity::render(ui, sim, ui_state));
    }

    egui::CentralPanel::default().show(ctx, |ui| match ui_state.tab {
        Tab::Dashboard => render_dashboard(ui, sim, ui_state),
        Tab::Analytics => analytics::render(ui, sim),
        Tab::Workflows => workflows::render(ui, sim, ui_state),
        Tab::Chat => chat::render(ui, sim, ui_state),
        Tab::Logs => terminal::render(ui, sim, ui_state),
    });

    render_about_window(ctx, ui_state);
}

/// Render the top menu bar
fn render_menu_bar(ctx: &egui::Context, sim: &mut Simulation, ui_state: &mut UiState) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            // File menu
            ui.menu_button("File", |ui| {
                if ui.button("Export Logs").clicked() {
                    export_logs(sim, ui_state, false);
                    ui.close_menu();
                }
                if ui.button("Export Logs (JSON)").clicked() {
                    export_logs(sim, ui_state, true);
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            // View menu
            ui.menu_button("View", |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    ctx.set_visuals(if dark_mode {
                        egui::Visuals::dark()
                    } else {
                        egui::Visuals::light()
                    });
                }
                ui.separator();
                for tab in Tab::ALL {
                    if ui
                        .radio(ui_state.tab == tab, tab.label())
                        .clicked()
                    {
                        ui_state.tab = tab;
                        ui.close_menu();
                    }
                }
            });

            // Help menu
            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui_state.about_open = true;
                    ui.close_menu();
                }
            });
        });
    });
}

/// Title row, status bar and tab bar
fn render_header(ctx: &egui::Context, sim: &Simulation, ui_state: &mut UiState) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new("🛰 Agent Mission Control").size(20.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                status_bar::render(ui, &sim.dashboard);
            });
        });
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                ui.selectable_value(&mut ui_state.tab, tab, tab.label());
            }
        });
        ui.add_space(4.0);
    });
}

/// Bottom strip showing the latest notice
fn render_footer(ctx: &egui::Context, ui_state: &UiState) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.horizontal(|ui| match ui_state.notice() {
            Some(notice) => {
                let color = if notice.is_error { RED } else { GREEN };
                ui.colored_label(color, &notice.text);
            }
            None => {
                ui.label(egui::RichText::new("All systems simulated").weak().small());
            }
        });
    });
}

/// Agent grid on top, task queue underneath
fn render_dashboard(ui: &mut egui::Ui, sim: &mut Simulation, ui_state: &mut UiState) {
    egui::ScrollArea::vertical()
        .id_source("dashboard_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            agents::render(ui, sim, ui_state);
            ui.add_space(12.0);
            task_queue::render(ui, &sim.dashboard);
        });
}

fn render_about_window(ctx: &egui::Context, ui_state: &mut UiState) {
    egui::Window::new("About")
        .open(&mut ui_state.about_open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Agent Mission Control");
            ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
            ui.add_space(8.0);
            ui.label("A dashboard for a simulated team of agents.");
            ui.label(
                egui::RichText::new("Statuses, replies, runs and logs are all generated locally.")
                    .weak()
                    .small(),
            );
        });
}

/// Write the live terminal to the export directory and report the outcome
pub fn export_logs(sim: &Simulation, ui_state: &mut UiState, json: bool) {
    let result = if json {
        sim.export_logs_json()
    } else {
        sim.export_logs()
    };
    match result {
        Ok(path) => {
            info!(path = %path.display(), "Logs exported");
            ui_state.notify(format!("Logs exported to {}", path.display()));
        }
        Err(e) => {
            error!("Log export failed: {}", e);
            ui_state.notify_error(format!("Log export failed: {e}"));
        }
    }
}
