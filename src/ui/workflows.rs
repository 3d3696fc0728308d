// Workflow builder
// Workflow list on the left, editor and run controls for the selected one

use crate::state::UiState;
use crate::ui::components::{
    card, empty_state, pause_button, pill, section_header, start_button, workflow_status_color,
    BLUE, GREEN,
};
use eframe::egui;
use mission_control_core::state::{Agent, StepState, Workflow, WorkflowStatus};
use mission_control_core::workflow::resolve_agent;
use mission_control_core::{SimError, Simulation};

pub fn render(ui: &mut egui::Ui, sim: &mut Simulation, ui_state: &mut UiState) {
    egui::SidePanel::left("workflow_list")
        .resizable(true)
        .default_width(240.0)
        .min_width(180.0)
        .show_inside(ui, |ui| render_workflow_list(ui, sim, ui_state));

    egui::CentralPanel::default().show_inside(ui, |ui| {
        // Cloned so the board can be mutated while the editor is drawn
        let Some(workflow) = sim.workflows.selected().cloned() else {
            empty_state(ui, "No workflow selected", "Pick one on the left or create a new one");
            return;
        };
        egui::ScrollArea::vertical()
            .id_source("workflow_editor")
            .auto_shrink([false; 2])
            .show(ui, |ui| render_editor(ui, sim, ui_state, &workflow));
    });
}

fn render_workflow_list(ui: &mut egui::Ui, sim: &mut Simulation, ui_state: &mut UiState) {
    ui.add_space(8.0);
    section_header(ui, "Workflows", None);

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut ui_state.new_workflow_name)
                .hint_text("New workflow name")
                .desired_width(ui.available_width() - 40.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (ui.button("➕").clicked() || submitted)
            && sim
                .workflows
                .create_workflow(&ui_state.new_workflow_name)
                .is_some()
        {
            ui_state.new_workflow_name.clear();
        }
    });
    ui.add_space(6.0);

    let selected_id = sim.workflows.selected().map(|w| w.id.clone());
    let rows: Vec<_> = sim
        .workflows
        .workflows()
        .iter()
        .map(|w| (w.id.clone(), w.name.clone(), w.status, w.steps.len()))
        .collect();

    egui::ScrollArea::vertical()
        .id_source("workflow_list_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for (id, name, status, steps) in rows {
                let is_selected = selected_id.as_deref() == Some(id.as_str());
                let response = ui
                    .horizontal(|ui| {
                        let label = ui.selectable_label(
                            is_selected,
                            format!("{name}\n{steps} steps"),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            pill(ui, status.label(), workflow_status_color(status));
                        });
                        label
                    })
                    .inner;
                if response.clicked() {
                    sim.workflows.select(&id);
                }
                ui.add_space(4.0);
            }
        });
}

fn render_editor(ui: &mut egui::Ui, sim: &mut Simulation, ui_state: &mut UiState, workflow: &Workflow) {
    let running = sim.workflows.is_running(&workflow.id);

    ui.horizontal(|ui| {
        ui.heading(&workflow.name);
        pill(ui, workflow.status.label(), workflow_status_color(workflow.status));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut outcome = Ok(());
            if ui.button("↺ Reset").clicked() {
                outcome = sim.workflows.reset(&workflow.id);
            }
            match (running, workflow.status) {
                (true, WorkflowStatus::Paused) => {
                    if start_button(ui, "Resume").clicked() {
                        outcome = sim.workflows.resume(&workflow.id);
                    }
                }
                (true, _) => {
                    if pause_button(ui).clicked() {
                        outcome = sim.workflows.pause(&workflow.id);
                    }
                }
                (false, _) => {
                    if start_button(ui, "Run").clicked() {
                        outcome = sim.workflows.run(&workflow.id);
                    }
                }
            }
            report(ui_state, outcome);
        });
    });

    ui.add_space(6.0);
    ui.add(
        egui::ProgressBar::new(f32::from(workflow.progress) / 100.0)
            .text(format!(
                "{}% ({}/{} steps)",
                workflow.progress,
                workflow.completed_steps(),
                workflow.steps.len()
            )),
    );
    ui.add_space(10.0);

    if workflow.steps.is_empty() {
        empty_state(ui, "No steps yet", "Add a step below to build the pipeline");
    }
    for (index, step) in workflow.steps.iter().enumerate() {
        let agent = resolve_agent(&sim.dashboard.agents, &step.agent_id);
        let mut remove = false;
        card(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let (icon, color) = match step.state {
                    StepState::Pending => ("○", egui::Color32::GRAY),
                    StepState::Active => ("◉", BLUE),
                    StepState::Complete => ("✔", GREEN),
                };
                ui.colored_label(color, egui::RichText::new(icon).size(18.0));
                ui.label(egui::RichText::new(format!("{}.", index + 1)).weak());
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&step.action).strong());
                    let who = agent.map_or("Unknown agent".to_string(), |a| {
                        format!("{} {}", a.avatar, a.name)
                    });
                    ui.label(egui::RichText::new(who).size(12.0));
                    if !step.input.is_empty() {
                        ui.label(
                            egui::RichText::new(format!("Input: {}", step.input))
                                .weak()
                                .small(),
                        );
                    }
                    if let Some(output) = &step.output {
                        ui.colored_label(GREEN, egui::RichText::new(output).small());
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    remove = ui
                        .add_enabled(!running, egui::Button::new("🗑"))
                        .on_hover_text("Remove step")
                        .clicked();
                });
            });
        });
        if remove {
            report(ui_state, sim.workflows.remove_step(&workflow.id, &step.id));
        }
        ui.add_space(4.0);
    }

    ui.add_space(10.0);
    render_add_step(ui, sim, ui_state, &workflow.id, running);
}

fn render_add_step(
    ui: &mut egui::Ui,
    sim: &mut Simulation,
    ui_state: &mut UiState,
    workflow_id: &str,
    running: bool,
) {
    section_header(ui, "Add Step", None);
    let agents: &[Agent] = &sim.dashboard.agents;
    ui_state.step_form.ensure_agent(agents);

    // Quick-pick chips
    ui.horizontal_wrapped(|ui| {
        for agent in agents {
            let selected = ui_state.step_form.agent_id == agent.id;
            if ui
                .selectable_label(selected, format!("{} {}", agent.avatar, agent.name))
                .clicked()
            {
                ui_state.step_form.agent_id = agent.id.clone();
            }
        }
    });
    ui.add_space(4.0);

    egui::Grid::new("add_step_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Agent");
            let selected_name = agents
                .iter()
                .find(|a| a.id == ui_state.step_form.agent_id)
                .map_or("Select an agent", |a| a.name.as_str());
            egui::ComboBox::from_id_source("step_agent")
                .selected_text(selected_name)
                .show_ui(ui, |ui| {
                    for agent in agents {
                        ui.selectable_value(
                            &mut ui_state.step_form.agent_id,
                            agent.id.clone(),
                            format!("{} {}", agent.avatar, agent.name),
                        );
                    }
                });
            ui.end_row();

            ui.label("Action");
            ui.text_edit_singleline(&mut ui_state.step_form.action);
            ui.end_row();

            ui.label("Input");
            ui.text_edit_singleline(&mut ui_state.step_form.input);
            ui.end_row();
        });

    ui.add_space(6.0);
    let can_add = !running
        && !ui_state.step_form.agent_id.is_empty()
        && !ui_state.step_form.action.trim().is_empty();
    if ui
        .add_enabled(can_add, egui::Button::new("➕ Add Step"))
        .clicked()
    {
        let form = &ui_state.step_form;
        let outcome = sim.add_workflow_step(workflow_id, &form.agent_id, &form.action, &form.input);
        match outcome {
            Ok(Some(_)) => ui_state.step_form.clear_text(),
            Ok(None) => {}
            Err(e) => ui_state.notify_error(e.to_string()),
        }
    }
}

/// Surface a builder error in the footer
fn report(ui_state: &mut UiState, outcome: Result<(), SimError>) {
    if let Err(e) = outcome {
        tracing::warn!("Workflow action rejected: {}", e);
        ui_state.notify_error(e.to_string());
    }
}
