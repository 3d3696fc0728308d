// Team chat panel
// DM toggles, message history and the input row

use crate::state::UiState;
use crate::ui::components::{empty_state, pill, section_header, BLUE, PURPLE};
use eframe::egui;
use mission_control_core::chat::dm_shortcuts;
use mission_control_core::state::{ChatMessage, Sender};
use mission_control_core::Simulation;

pub fn render(ui: &mut egui::Ui, sim: &mut Simulation, ui_state: &mut UiState) {
    section_header(ui, "Team Chat", None);
    render_dm_toggles(ui, sim);
    ui.add_space(6.0);

    // Input row stays pinned to the bottom
    egui::TopBottomPanel::bottom("chat_input")
        .show_separator_line(true)
        .show_inside(ui, |ui| {
            ui.add_space(6.0);
            render_input(ui, sim, ui_state);
            ui.add_space(4.0);
        });

    egui::ScrollArea::vertical()
        .id_source("chat_messages")
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if sim.chat.messages().is_empty() {
                empty_state(ui, "No messages yet", "Say hello to the team");
            }
            for message in sim.chat.messages() {
                render_message(ui, sim, message);
                ui.add_space(6.0);
            }
            if sim.chat.pending_replies() > 0 {
                ui.label(egui::RichText::new("typing...").italics().weak().small());
            }
        });
}

fn render_dm_toggles(ui: &mut egui::Ui, sim: &mut Simulation) {
    let (shortcuts, overflow) = dm_shortcuts(&sim.dashboard.agents);
    let target = sim.chat.target().cloned();
    let mut toggled = None;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Message:").weak());
        if ui
            .selectable_label(target.is_none(), "👥 Team")
            .clicked()
        {
            toggled = Some(None);
        }
        for agent in shortcuts {
            let selected = target.as_deref() == Some(agent.id.as_str());
            if ui
                .selectable_label(selected, format!("{} {}", agent.avatar, agent.name))
                .clicked()
            {
                toggled = Some(Some(agent.id.clone()));
            }
        }
        if overflow > 0 {
            pill(ui, &format!("+{overflow}"), egui::Color32::GRAY);
        }
    });

    match toggled {
        Some(Some(agent_id)) => sim.chat.toggle_target(&agent_id),
        Some(None) => sim.chat.clear_target(),
        None => {}
    }
}

fn render_message(ui: &mut egui::Ui, sim: &Simulation, message: &ChatMessage) {
    let (align, fill) = match message.sender {
        Sender::User => (egui::Align::Max, BLUE.gamma_multiply(0.25)),
        Sender::Agent => (egui::Align::Min, ui.visuals().faint_bg_color),
        Sender::System => (egui::Align::Center, egui::Color32::TRANSPARENT),
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        egui::Frame::none()
            .fill(fill)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::symmetric(10.0, 6.0))
            .show(ui, |ui| {
                ui.set_max_width(480.0);
                ui.horizontal(|ui| {
                    let author = match message.sender {
                        Sender::User => "You".to_string(),
                        Sender::Agent => message.agent_name.clone().unwrap_or_default(),
                        Sender::System => "System".to_string(),
                    };
                    ui.label(egui::RichText::new(author).strong().size(12.0));
                    if let Some(target) = &message.target_agent_id {
                        let name = sim
                            .dashboard
                            .agent(target)
                            .map_or(target.as_str(), |a| a.name.as_str());
                        pill(ui, &format!("@{name}"), PURPLE);
                    }
                    ui.label(egui::RichText::new(&message.timestamp).weak().small());
                });
                let text = egui::RichText::new(&message.content);
                if message.sender == Sender::System {
                    ui.label(text.italics().weak());
                } else {
                    ui.label(text);
                }
            });
    });
}

fn render_input(ui: &mut egui::Ui, sim: &mut Simulation, ui_state: &mut UiState) {
    let hint = match sim.chat.target().and_then(|id| sim.dashboard.agent(id)) {
        Some(agent) => format!("Message {}...", agent.name),
        None => "Message the team...".to_string(),
    };

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut ui_state.chat_input)
                .hint_text(hint)
                .desired_width(ui.available_width() - 80.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui
            .add_enabled(
                !ui_state.chat_input.trim().is_empty(),
                egui::Button::new("Send ➤"),
            )
            .clicked();

        if (submitted || clicked) && sim.send_chat(&ui_state.chat_input) {
            ui_state.chat_input.clear();
        }
        if submitted {
            response.request_focus();
        }
    });
}
