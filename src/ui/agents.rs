// Agent grid
// "Create new agent" bar and one card per agent

use crate::state::UiState;
use crate::ui::components::{card, empty_state, pill, section_header, status_badge, BLUE};
use eframe::egui;
use mission_control_core::state::Agent;
use mission_control_core::Simulation;

const CARD_WIDTH: f32 = 230.0;
const CAPABILITIES_SHOWN: usize = 3;

pub fn render(ui: &mut egui::Ui, sim: &mut Simulation, ui_state: &mut UiState) {
    let subtitle = format!("{} agents", sim.dashboard.agent_count());
    section_header(ui, "Agents", Some(&subtitle));

    render_add_bar(ui, sim, ui_state);
    ui.add_space(8.0);

    if sim.dashboard.agents.is_empty() {
        empty_state(ui, "No agents", "Name one above to add it to the roster");
        return;
    }

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
        for agent in &sim.dashboard.agents {
            render_agent_card(ui, agent);
        }
    });
}

fn render_add_bar(ui: &mut egui::Ui, sim: &mut Simulation, ui_state: &mut UiState) {
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut ui_state.new_agent_name)
                .hint_text("Create new agent...")
                .desired_width(260.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let enabled = !ui_state.new_agent_name.trim().is_empty();
        let clicked = ui
            .add_enabled(enabled, egui::Button::new("➕ Add Agent"))
            .clicked();

        if submitted || clicked {
            if let Some(id) = sim.add_agent(&ui_state.new_agent_name) {
                ui_state.notify(format!("Agent '{}' added", ui_state.new_agent_name.trim()));
                ui_state.new_agent_name.clear();
                tracing::debug!(agent_id = %id, "Agent added from dashboard");
            }
            if submitted {
                response.request_focus();
            }
        }
    });
}

fn render_agent_card(ui: &mut egui::Ui, agent: &Agent) {
    card(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&agent.avatar).size(24.0));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&agent.name).strong().size(15.0));
                    ui.label(egui::RichText::new(&agent.role).weak().size(12.0));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    status_badge(ui, agent.status);
                });
            });

            ui.add_space(6.0);
            let task = agent.current_task.as_deref().unwrap_or("No active task");
            ui.label(egui::RichText::new(task).size(12.0).italics());

            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                for capability in agent.capability_labels(CAPABILITIES_SHOWN) {
                    pill(ui, &capability, BLUE);
                }
            });

            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!("Last activity: {}", agent.last_activity))
                    .weak()
                    .small(),
            );
        });
    });
}
