use crate::egui_app::ui::EguiApp;
use crate::egui_app::ui::style;
use eframe::egui::{self, RichText, TopBottomPanel, Ui};

impl EguiApp {
    pub(super) fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    /// Files dropped anywhere on the window become the upload candidate.
    pub(super) fn consume_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
        // Only the first file is used; the service classifies one clip at a time.
        let Some(file) = dropped_files.into_iter().next() else {
            return;
        };
        if let Some(path) = file.path {
            self.controller.choose_file(&path);
        } else if let Some(bytes) = file.bytes {
            let mime = (!file.mime.is_empty()).then_some(file.mime.as_str());
            self.controller
                .choose_file_bytes(&file.name, mime, bytes.to_vec());
        }
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::new().fill(style::palette().bg_primary))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(9.0, 11.0),
                        9.0,
                        status.badge_color,
                    );
                    ui.add_space(22.0);
                    ui.label(RichText::new(&status.badge_label).strong());
                    ui.separator();
                    ui.label(&status.text);
                    if self.controller.ui.operations.is_loading() {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.spinner();
                        });
                    }
                });
            });
    }

    pub(super) fn render_error_banner(&mut self, ui: &mut Ui) {
        let Some(error) = self.controller.ui.error.clone() else {
            return;
        };
        let palette = style::palette();
        egui::Frame::new()
            .fill(style::compartment_fill())
            .stroke(egui::Stroke::new(1.0, palette.warning))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(error.to_string()).color(palette.warning))
                        .on_hover_text(error.detail());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Dismiss").clicked() {
                            self.controller.dismiss_error();
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }
}

/// Heading used at the top of each section.
pub(super) fn section_heading(ui: &mut Ui, title: &str) {
    ui.label(RichText::new(title).heading().color(style::palette().text_primary));
    ui.add_space(4.0);
}
