//! Entry point for the egui-based audio event classifier client.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::sync::Arc;

use aed_client::egui_app::controller::SessionController;
use aed_client::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use aed_client::logging;
use aed_client::service::HttpService;
use aed_client::settings::{self, CategoryTable};
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match logging::init() {
        Ok(Some(path)) => tracing::info!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(err) => eprintln!("Logging disabled: {err}"),
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Audio Event Classifier")
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1280.0, 860.0))
        .with_drag_and_drop(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Audio Event Classifier",
        native_options,
        Box::new(|_cc| match build_controller() {
            Ok(controller) => Ok(Box::new(EguiApp::new(controller))),
            Err(message) => Ok(Box::new(LaunchError { message })),
        }),
    )?;
    Ok(())
}

fn build_controller() -> Result<SessionController, String> {
    let settings =
        settings::load_or_default().map_err(|err| format!("Failed to load settings: {err}"))?;
    let base = settings
        .service
        .endpoint()
        .map_err(|err| format!("Invalid service URL: {err}"))?;
    tracing::info!(%base, "Using classification service");
    let service = Arc::new(HttpService::new(base));
    Ok(SessionController::new(service, CategoryTable::builtin()))
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
