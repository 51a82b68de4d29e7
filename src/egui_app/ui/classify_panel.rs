use super::EguiApp;
use super::layout::section_heading;
use super::style;
use crate::egui_app::state::CatalogPhase;
use crate::egui_app::view_model;
use crate::upload::MAX_UPLOAD_BYTES;
use eframe::egui::{self, RichText, Ui};

impl EguiApp {
    pub(super) fn render_classify_panel(&mut self, ui: &mut Ui) {
        section_heading(ui, "Classify Audio");
        self.render_model_picker(ui);
        ui.add_space(8.0);
        self.render_file_picker(ui);
        ui.add_space(8.0);
        self.render_predict_button(ui);
        self.render_prediction(ui);
    }

    fn render_model_picker(&mut self, ui: &mut Ui) {
        let catalog = self.controller.ui.catalog.clone();
        let selected = self.controller.selected_model().map(str::to_string);
        let mut chosen = None;
        ui.horizontal(|ui| {
            ui.label("Model");
            let text = selected.as_deref().unwrap_or("Select a model");
            egui::ComboBox::from_id_salt("model_select")
                .selected_text(text)
                .width(240.0)
                .show_ui(ui, |ui| {
                    for model in &catalog.models {
                        let is_selected = selected.as_deref() == Some(model.as_str());
                        if ui.selectable_label(is_selected, model).clicked() {
                            chosen = Some(model.clone());
                        }
                    }
                });
            if catalog.phase == CatalogPhase::Loading {
                ui.spinner();
            } else if ui.small_button("Refresh").clicked() {
                self.controller.reload_models();
            }
        });
        if catalog.phase == CatalogPhase::Loaded && catalog.models.is_empty() {
            ui.label(
                RichText::new("No trained models yet")
                    .small()
                    .color(style::palette().text_muted),
            );
        }
        if let Some(model) = chosen {
            self.controller.select_model(&model);
        }
    }

    fn render_file_picker(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let hovering_files = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
        let stroke = if hovering_files {
            egui::Stroke::new(2.0, palette.accent_ice)
        } else {
            style::outer_border()
        };
        egui::Frame::new()
            .fill(style::compartment_fill())
            .stroke(stroke)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    if ui.button("Choose audio file").clicked() {
                        self.controller.choose_file_via_dialog();
                    }
                    ui.label(
                        RichText::new(format!(
                            "or drop a file here (WAV, MP3, max. {} MB)",
                            MAX_UPLOAD_BYTES / (1024 * 1024)
                        ))
                        .small()
                        .color(palette.text_muted),
                    );
                    if let Some(file) = &self.controller.ui.upload {
                        ui.add_space(4.0);
                        ui.label(format!("{} ({:.1} KB)", file.name(), file.len() as f64 / 1024.0));
                    }
                });
            });
    }

    fn render_predict_button(&mut self, ui: &mut Ui) {
        let predicting = self.controller.ui.operations.predict.is_in_flight();
        ui.horizontal(|ui| {
            let label = if predicting { "Classifying..." } else { "Classify" };
            let clicked = ui
                .add_enabled(self.controller.can_predict(), egui::Button::new(label))
                .clicked();
            if clicked {
                self.controller.submit_prediction();
            }
            if predicting {
                ui.spinner();
            }
        });
    }

    fn render_prediction(&mut self, ui: &mut Ui) {
        let Some(prediction) = &self.controller.ui.selection.prediction else {
            return;
        };
        let label = view_model::prediction_label(prediction, self.controller.categories());
        ui.add_space(8.0);
        egui::Frame::new()
            .fill(style::compartment_fill())
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.label(RichText::new(format!("Predicted Class: {label}")).strong());
                ui.label(
                    RichText::new(format!(
                        "{} with {}",
                        prediction.file_name, prediction.model_name
                    ))
                    .small()
                    .color(style::palette().text_muted),
                );
            });
    }
}
