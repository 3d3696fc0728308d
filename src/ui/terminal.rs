// Live terminal
// Streaming log view with level filter, pause, export and clear

use crate::state::UiState;
use crate::ui::components::{filter_pill, log_level_color, GREEN, YELLOW};
use crate::ui::layout::export_logs;
use eframe::egui;
use mission_control_core::logs::{LogEntry, LogFilter};
use mission_control_core::Simulation;

/// Render the terminal output in a scrollable area
pub fn render(ui: &mut egui::Ui, sim: &mut Simulation, ui_state: &mut UiState) {
    render_control_bar(ui, sim, ui_state);
    ui.add_space(4.0);
    render_filter_bar(ui, sim, ui_state);
    ui.add_space(4.0);
    ui.separator();

    let shown = sim.logs.filtered(ui_state.log_filter).len();
    let total = sim.logs.entries().len();

    egui::TopBottomPanel::bottom("terminal_footer")
        .show_separator_line(true)
        .show_inside(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(format!("Total: {total}")).weak().small());
                ui.label(egui::RichText::new(format!("Showing: {shown}")).weak().small());
            });
        });

    // Scrollable text area with monospace font
    egui::ScrollArea::vertical()
        .id_source("terminal_scroll")
        .auto_shrink([false; 2])
        .stick_to_bottom(ui_state.auto_scroll)
        .show(ui, |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.spacing_mut().item_spacing = egui::vec2(4.0, 2.0);

            let lines = sim.logs.filtered(ui_state.log_filter);
            if lines.is_empty() {
                ui.label(egui::RichText::new("No log lines").italics().weak());
            }
            for entry in lines {
                render_line(ui, entry);
            }
        });
}

fn render_control_bar(ui: &mut egui::Ui, sim: &mut Simulation, ui_state: &mut UiState) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Live Terminal").heading());
        if sim.logs.is_streaming() {
            ui.colored_label(GREEN, "● STREAMING");
        } else {
            ui.colored_label(YELLOW, "⏸ PAUSED");
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Clear").clicked() {
                sim.logs.clear();
            }
            if ui.button("Export").clicked() {
                export_logs(sim, ui_state, false);
            }
            let toggle = if sim.logs.is_streaming() { "⏸ Pause" } else { "▶ Resume" };
            if ui.button(toggle).clicked() {
                let streaming = sim.logs.is_streaming();
                sim.logs.set_streaming(!streaming);
            }
            ui.checkbox(&mut ui_state.auto_scroll, "Auto-scroll");
        });
    });
}

fn render_filter_bar(ui: &mut egui::Ui, sim: &Simulation, ui_state: &mut UiState) {
    ui.horizontal_wrapped(|ui| {
        let total = sim.logs.entries().len();
        if filter_pill(ui, &format!("ALL ({total})"), ui_state.log_filter == LogFilter::All) {
            ui_state.log_filter = LogFilter::All;
        }
        for (level, count) in sim.logs.counts() {
            let filter = LogFilter::Level(level);
            if filter_pill(ui, &format!("{} ({count})", level.label()), ui_state.log_filter == filter) {
                ui_state.log_filter = filter;
            }
        }
    });
}

fn render_line(ui: &mut egui::Ui, entry: &LogEntry) {
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                .size(12.0)
                .weak(),
        );
        ui.label(
            egui::RichText::new(format!("[{}]", entry.level.label()))
                .size(12.0)
                .color(log_level_color(entry.level)),
        );
        ui.label(egui::RichText::new(format!("{}:", entry.source)).size(12.0).strong());
        ui.label(egui::RichText::new(&entry.message).size(12.0));
        if let Some(metadata) = &entry.metadata {
            ui.label(egui::RichText::new(metadata).size(11.0).weak());
        }
    });
}
