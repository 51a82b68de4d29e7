use super::EguiApp;
use super::layout::section_heading;
use super::style;
use crate::egui_app::view_model::metrics::{FamilySection, ReportTable, family_sections};
use eframe::egui::{self, RichText, Ui};

impl EguiApp {
    pub(super) fn render_metrics_panel(&mut self, ui: &mut Ui) {
        section_heading(ui, "Model Metrics");
        let Some(metrics) = &self.controller.ui.selection.metrics else {
            let text = if self.controller.ui.operations.fetch_metrics.is_in_flight() {
                "Loading metrics..."
            } else {
                "No metrics available for this model"
            };
            ui.label(RichText::new(text).color(style::palette().text_muted));
            return;
        };
        for section in family_sections(metrics, self.controller.categories()) {
            render_family_section(ui, &section);
            ui.add_space(8.0);
        }
    }
}

fn render_family_section(ui: &mut Ui, section: &FamilySection) {
    egui::CollapsingHeader::new(section.family.label())
        .id_salt(("metrics", section.family.key()))
        .default_open(true)
        .show(ui, |ui| {
            ui.label(RichText::new("Overall Metrics").strong());
            egui::Grid::new(("overall", section.family.key()))
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for row in &section.overall {
                        ui.label(row.name);
                        ui.label(&row.value);
                        ui.end_row();
                    }
                });
            ui.add_space(6.0);
            ui.label(RichText::new("Detailed Classification Report").strong());
            render_report(ui, section.family.key(), &section.report);
        });
}

fn render_report(ui: &mut Ui, id: &str, report: &ReportTable) {
    egui::Grid::new(("report", id))
        .num_columns(5)
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for header in ["Class", "Precision", "Recall", "F1-score", "Support"] {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();
            for row in &report.rows {
                ui.label(&row.label).on_hover_text(&row.class_key);
                ui.label(&row.precision);
                ui.label(&row.recall);
                ui.label(&row.f1_score);
                ui.label(&row.support);
                ui.end_row();
            }
            ui.label(RichText::new("Accuracy").strong());
            ui.label(&report.accuracy);
            ui.label("");
            ui.label("");
            ui.label(&report.accuracy_support);
            ui.end_row();
        });
}
