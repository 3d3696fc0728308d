// Analytics tab
// Stat cards and three painter-drawn charts over the current snapshot

use crate::ui::components::{card, section_header, task_status_color, BLUE, CHART_PALETTE, GREEN};
use eframe::egui;
use mission_control_core::analytics::{AgentPerformance, DistributionSlice, StatCards, TrendPoint};
use mission_control_core::Simulation;
use std::f32::consts::TAU;

const CHART_HEIGHT: f32 = 200.0;

pub fn render(ui: &mut egui::Ui, sim: &mut Simulation) {
    ui.horizontal(|ui| {
        ui.heading("Analytics");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⟳ Refresh").clicked() {
                sim.refresh_analytics();
            }
        });
    });
    ui.add_space(8.0);

    let snapshot = sim.analytics();
    egui::ScrollArea::vertical()
        .id_source("analytics_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            render_stat_cards(ui, &snapshot.stats);
            ui.add_space(12.0);

            section_header(ui, "Activity Trend", Some("tasks / efficiency"));
            trend_chart(ui, &snapshot.trend);
            ui.add_space(12.0);

            ui.columns(2, |columns| {
                section_header(&mut columns[0], "Agent Performance", Some("tasks handled"));
                performance_chart(&mut columns[0], &snapshot.performance);
                section_header(&mut columns[1], "Task Distribution", None);
                distribution_chart(&mut columns[1], &snapshot.distribution);
            });
        });
}

fn render_stat_cards(ui: &mut egui::Ui, stats: &StatCards) {
    let cards = [
        (
            "Active Agents",
            format!("{}/{}", stats.active_agents, stats.total_agents),
        ),
        (
            "Tasks Completed",
            format!("{}/{}", stats.completed_tasks, stats.total_tasks),
        ),
        ("Avg Efficiency", format!("{}%", stats.avg_efficiency)),
        ("System Health", format!("{}%", stats.system_health)),
    ];
    ui.columns(cards.len(), |columns| {
        for (column, (title, value)) in columns.iter_mut().zip(cards) {
            card(column, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(title).weak().size(12.0));
                ui.label(egui::RichText::new(value).strong().size(22.0));
            });
        }
    });
}

fn chart_area(ui: &mut egui::Ui) -> (egui::Rect, egui::Painter) {
    let size = egui::vec2(ui.available_width(), CHART_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    painter.rect_stroke(
        response.rect,
        egui::Rounding::same(4.0),
        ui.visuals().widgets.noninteractive.bg_stroke,
    );
    (response.rect.shrink(24.0), painter)
}

/// Two lines: task counts scaled to the busiest bucket, efficiency on 0..=100
fn trend_chart(ui: &mut egui::Ui, trend: &[TrendPoint]) {
    let (plot, painter) = chart_area(ui);
    if trend.len() < 2 {
        return;
    }
    let text_color = ui.visuals().weak_text_color();
    let max_tasks = trend.iter().map(|p| p.tasks).max().unwrap_or(1).max(1) as f32;
    let step = plot.width() / (trend.len() - 1) as f32;
    let x = |i: usize| plot.left() + step * i as f32;
    let y = |fraction: f32| plot.bottom() - plot.height() * fraction;

    let tasks: Vec<egui::Pos2> = trend
        .iter()
        .enumerate()
        .map(|(i, p)| egui::pos2(x(i), y(p.tasks as f32 / max_tasks)))
        .collect();
    let efficiency: Vec<egui::Pos2> = trend
        .iter()
        .enumerate()
        .map(|(i, p)| egui::pos2(x(i), y(p.efficiency as f32 / 100.0)))
        .collect();

    painter.add(egui::Shape::line(tasks.clone(), egui::Stroke::new(2.0, BLUE)));
    painter.add(egui::Shape::line(efficiency, egui::Stroke::new(2.0, GREEN)));
    for point in tasks {
        painter.circle_filled(point, 3.0, BLUE);
    }
    for (i, point) in trend.iter().enumerate() {
        painter.text(
            egui::pos2(x(i), plot.bottom() + 12.0),
            egui::Align2::CENTER_CENTER,
            point.time,
            egui::FontId::proportional(11.0),
            text_color,
        );
    }
}

fn performance_chart(ui: &mut egui::Ui, performance: &[AgentPerformance]) {
    let (plot, painter) = chart_area(ui);
    if performance.is_empty() {
        return;
    }
    let text_color = ui.visuals().text_color();
    let max_tasks = performance.iter().map(|p| p.tasks).max().unwrap_or(1).max(1) as f32;
    let slot = plot.width() / performance.len() as f32;

    for (i, perf) in performance.iter().enumerate() {
        let height = plot.height() * perf.tasks as f32 / max_tasks;
        let left = plot.left() + slot * i as f32 + slot * 0.2;
        let bar = egui::Rect::from_min_max(
            egui::pos2(left, plot.bottom() - height),
            egui::pos2(left + slot * 0.6, plot.bottom()),
        );
        let color = CHART_PALETTE[perf.color_index % CHART_PALETTE.len()];
        painter.rect_filled(bar, egui::Rounding::same(3.0), color);
        painter.text(
            egui::pos2(bar.center().x, bar.top() - 8.0),
            egui::Align2::CENTER_CENTER,
            format!("{} · {}%", perf.tasks, perf.efficiency),
            egui::FontId::proportional(10.0),
            text_color,
        );
        painter.text(
            egui::pos2(bar.center().x, plot.bottom() + 12.0),
            egui::Align2::CENTER_CENTER,
            format!("{} {}", perf.avatar, perf.name),
            egui::FontId::proportional(11.0),
            text_color,
        );
    }
}

/// Pie drawn as a fan of thin triangles so every wedge stays convex
fn distribution_chart(ui: &mut egui::Ui, distribution: &[DistributionSlice]) {
    let (plot, painter) = chart_area(ui);
    let total: usize = distribution.iter().map(|s| s.value).sum();
    if total == 0 {
        painter.text(
            plot.center(),
            egui::Align2::CENTER_CENTER,
            "No tasks",
            egui::FontId::proportional(12.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    let radius = plot.height().min(plot.width() * 0.5) / 2.0;
    let center = egui::pos2(plot.left() + radius, plot.center().y);
    let point_at = |angle: f32| center + radius * egui::vec2(angle.cos(), angle.sin());
    let mut start = -TAU / 4.0;

    for (row, slice) in distribution.iter().enumerate() {
        let sweep = TAU * slice.value as f32 / total as f32;
        let color = task_status_color(slice.status);
        let segments = ((sweep / TAU * 90.0).ceil() as usize).max(1);
        for s in 0..segments {
            let a0 = start + sweep * s as f32 / segments as f32;
            let a1 = start + sweep * (s + 1) as f32 / segments as f32;
            painter.add(egui::Shape::convex_polygon(
                vec![center, point_at(a0), point_at(a1)],
                color,
                egui::Stroke::NONE,
            ));
        }
        start += sweep;

        // Legend
        let legend = egui::pos2(center.x + radius + 24.0, plot.top() + 16.0 + row as f32 * 20.0);
        painter.circle_filled(legend, 5.0, color);
        painter.text(
            legend + egui::vec2(12.0, 0.0),
            egui::Align2::LEFT_CENTER,
            format!("{} ({})", slice.label, slice.value),
            egui::FontId::proportional(12.0),
            ui.visuals().text_color(),
        );
    }
}
