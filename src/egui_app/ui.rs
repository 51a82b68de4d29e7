//! egui renderer for the application UI.

mod classify_panel;
mod config_panel;
mod layout;
mod metrics_panel;
mod scatter_panel;
pub mod style;

use std::time::Duration;

use crate::egui_app::controller::SessionController;
use eframe::egui;

/// Minimum inner size of the main window.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);

const JOB_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: SessionController,
    visuals_set: bool,
}

impl EguiApp {
    /// Wrap a controller and start its session.
    pub fn new(mut controller: SessionController) -> Self {
        controller.start_session();
        Self {
            controller,
            visuals_set: false,
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.consume_dropped_files(ctx);
        self.render_status(ctx);
        egui::SidePanel::left("config_panel")
            .resizable(true)
            .default_width(340.0)
            .min_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("config_scroll")
                    .show(ui, |ui| self.render_config_panel(ui));
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("results_scroll")
                .show(ui, |ui| {
                    self.render_error_banner(ui);
                    self.render_classify_panel(ui);
                    ui.add_space(12.0);
                    self.render_metrics_panel(ui);
                    ui.add_space(12.0);
                    self.render_scatter_panel(ui);
                });
        });
        // Worker results arrive off-thread; keep polling until they land.
        if self.controller.has_pending_jobs() {
            ctx.request_repaint_after(JOB_POLL_INTERVAL);
        }
    }
}
