// Agent Mission Control - Main Entry Point
// Native dashboard for a simulated team of agents

mod state;
mod ui;

use eframe::egui;
use mission_control_core::sim::TickReport;
use mission_control_core::{Config, Simulation};
use state::UiState;
use std::time::{Duration, Instant};
use tracing::info;
use ui::render_app_layout;

/// Repaint cadence while idle, so timers keep ticking without input
const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Longest frame step fed to the simulation (e.g. after the window was hidden)
const MAX_FRAME_STEP: Duration = Duration::from_secs(5);

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let simulation = Simulation::new(config)?;

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Agent Mission Control")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Agent Mission Control",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Box::new(MissionControlApp::new(simulation))
        }),
    )
    .map_err(|e| anyhow::anyhow!("UI event loop failed: {}", e))?;

    info!("Window closed, shutting down");
    Ok(())
}

/// Main application struct
/// Owns the simulation, the UI-local state and the frame clock
struct MissionControlApp {
    /// Simulated agents, tasks, chat, workflows, feed and logs
    simulation: Simulation,
    /// Tabs, input buffers and notices
    ui: UiState,
    /// When the previous frame was drawn
    last_frame: Instant,
}

impl MissionControlApp {
    /// Create a new application instance
    fn new(simulation: Simulation) -> Self {
        Self {
            simulation,
            ui: UiState::new(),
            last_frame: Instant::now(),
        }
    }

    /// Advance simulation timers by the time since the previous frame
    fn step(&mut self, dt: Duration) -> TickReport {
        let dt = dt.min(MAX_FRAME_STEP);
        self.ui.tick(dt);
        self.simulation.advance(dt)
    }
}

impl eframe::App for MissionControlApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;
        let report = self.step(dt);

        // Render the main application layout
        render_app_layout(ctx, &mut self.simulation, &mut self.ui);

        // Draw changes right away; otherwise keep the timers ticking
        if report.is_empty() {
            ctx.request_repaint_after(REPAINT_INTERVAL);
        } else {
            ctx.request_repaint();
        }
    }
}
