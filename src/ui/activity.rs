// Activity feed side panel
// Newest-first event list with a LIVE toggle and kind filter

use crate::state::UiState;
use crate::ui::components::{activity_kind_color, filter_pill, pill, GREEN};
use chrono::Local;
use eframe::egui;
use mission_control_core::activity::{format_relative, ActivityItem};
use mission_control_core::Simulation;

pub fn render(ui: &mut egui::Ui, sim: &mut Simulation, ui_state: &mut UiState) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Activity Feed").heading().size(16.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let live = sim.activity.is_live();
            let text = if live {
                egui::RichText::new("● LIVE").color(GREEN)
            } else {
                egui::RichText::new("⏸ PAUSED").weak()
            };
            if ui
                .selectable_label(live, text)
                .on_hover_text("Toggle live updates")
                .clicked()
            {
                sim.activity.set_live(!live);
            }
        });
    });
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(4.0);

    ui.horizontal_wrapped(|ui| {
        let total = sim.activity.items().len();
        if filter_pill(ui, &format!("all ({total})"), ui_state.activity_filter.is_none()) {
            ui_state.activity_filter = None;
        }
        for (kind, count) in sim.activity.counts() {
            let selected = ui_state.activity_filter == Some(kind);
            if filter_pill(ui, &format!("{} ({count})", kind.label()), selected) {
                ui_state.activity_filter = Some(kind);
            }
        }
    });
    ui.add_space(6.0);

    let now = Local::now();
    egui::ScrollArea::vertical()
        .id_source("activity_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            let items = sim.activity.filtered(ui_state.activity_filter);
            if items.is_empty() {
                ui.label(egui::RichText::new("Nothing to show").italics().weak());
            }
            for item in items {
                render_item(ui, item, now);
                ui.add_space(6.0);
            }
        });
}

fn render_item(ui: &mut egui::Ui, item: &ActivityItem, now: chrono::DateTime<Local>) {
    ui.horizontal(|ui| {
        let color = activity_kind_color(item.kind);
        let painter_size = egui::vec2(4.0, 36.0);
        let (rect, _) = ui.allocate_exact_size(painter_size, egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, egui::Rounding::same(2.0), color);

        if let Some(avatar) = &item.agent_avatar {
            ui.label(egui::RichText::new(avatar).size(18.0));
        }
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&item.title).strong().size(13.0));
                pill(ui, item.kind.label(), color);
                if let Some(priority) = &item.priority {
                    pill(ui, priority, egui::Color32::GRAY);
                }
            });
            ui.label(egui::RichText::new(&item.description).size(12.0));
            let mut meta = format_relative(item.timestamp, now);
            if let Some(name) = &item.agent_name {
                meta = format!("{meta} · {name}");
            }
            ui.label(egui::RichText::new(meta).weak().small());
        });
    });
}
