use super::EguiApp;
use super::layout::section_heading;
use super::style;
use crate::training::{ActiveHyperparameters, Feature, ModelFamily, ranges};
use eframe::egui::{self, RichText, Ui};

impl EguiApp {
    pub(super) fn render_config_panel(&mut self, ui: &mut Ui) {
        section_heading(ui, "Train Model");
        self.render_model_name(ui);
        ui.add_space(8.0);
        self.render_feature_toggles(ui);
        ui.add_space(8.0);
        self.render_preprocessing(ui);
        ui.add_space(8.0);
        self.render_family_picker(ui);
        ui.add_space(4.0);
        self.render_hyperparameters(ui);
        ui.add_space(12.0);
        self.render_train_button(ui);
    }

    fn render_model_name(&mut self, ui: &mut Ui) {
        ui.label("Model name");
        let mut name = self.controller.training_config().model_name().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut name)
                .hint_text("default_model")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.controller.set_model_name(name);
        }
    }

    fn render_feature_toggles(&mut self, ui: &mut Ui) {
        egui::CollapsingHeader::new("Features")
            .id_salt("feature_toggles")
            .default_open(true)
            .show(ui, |ui| {
                let selection = self.controller.training_config().feature_selection().clone();
                egui::Grid::new("feature_grid")
                    .num_columns(2)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for (index, feature) in Feature::ALL.into_iter().enumerate() {
                            let mut enabled = selection.is_enabled(feature);
                            if ui.checkbox(&mut enabled, feature.label()).changed() {
                                self.controller.set_feature(feature, enabled);
                            }
                            if index % 2 == 1 {
                                ui.end_row();
                            }
                        }
                    });
                let muted = style::palette().text_muted;
                ui.label(
                    RichText::new(format!(
                        "{} of {} enabled",
                        selection.enabled_count(),
                        Feature::ALL.len()
                    ))
                    .small()
                    .color(muted),
                );
            });
    }

    fn render_preprocessing(&mut self, ui: &mut Ui) {
        let config = self.controller.training_config().clone();
        let mut normalize = config.normalize();
        if ui.checkbox(&mut normalize, "Normalize features").changed() {
            self.controller.set_normalize(normalize);
        }
        let mut apply_pca = config.apply_pca();
        if ui.checkbox(&mut apply_pca, "Apply PCA").changed() {
            self.controller.set_apply_pca(apply_pca);
        }
        if config.apply_pca() {
            let mut components = config.pca_components();
            let slider = egui::Slider::new(&mut components, ranges::PCA_COMPONENTS)
                .text("Variance kept")
                .fixed_decimals(2);
            if ui.add(slider).changed() {
                self.controller.set_pca_components(components);
            }
        }
    }

    fn render_family_picker(&mut self, ui: &mut Ui) {
        let current = self.controller.training_config().model_family();
        let mut family = current;
        ui.horizontal(|ui| {
            ui.label("Model type");
            egui::ComboBox::from_id_salt("model_family")
                .selected_text(current.label())
                .show_ui(ui, |ui| {
                    for option in ModelFamily::ALL {
                        ui.selectable_value(&mut family, option, option.label());
                    }
                });
        });
        if family != current {
            self.controller.set_model_family(family);
        }
    }

    fn render_hyperparameters(&mut self, ui: &mut Ui) {
        match self.controller.training_config().active_hyperparameters() {
            ActiveHyperparameters::Svm { mut c, mut gamma } => {
                if ui
                    .add(egui::Slider::new(&mut c, ranges::SVM_C).text("C").fixed_decimals(1))
                    .changed()
                {
                    self.controller.set_svm_c(c);
                }
                if ui
                    .add(
                        egui::Slider::new(&mut gamma, ranges::SVM_GAMMA)
                            .text("Gamma")
                            .logarithmic(true)
                            .fixed_decimals(3),
                    )
                    .changed()
                {
                    self.controller.set_svm_gamma(gamma);
                }
            }
            ActiveHyperparameters::RandomForest {
                mut estimators,
                mut max_depth,
            } => {
                if ui
                    .add(egui::Slider::new(&mut estimators, ranges::RF_ESTIMATORS).text("Estimators"))
                    .changed()
                {
                    self.controller.set_rf_estimators(estimators);
                }
                if ui
                    .add(egui::Slider::new(&mut max_depth, ranges::RF_MAX_DEPTH).text("Max depth"))
                    .changed()
                {
                    self.controller.set_rf_max_depth(max_depth);
                }
            }
            ActiveHyperparameters::Knn { mut neighbors } => {
                if ui
                    .add(egui::Slider::new(&mut neighbors, ranges::KNN_NEIGHBORS).text("Neighbors"))
                    .changed()
                {
                    self.controller.set_knn_neighbors(neighbors);
                }
            }
        }
    }

    fn render_train_button(&mut self, ui: &mut Ui) {
        let training = self.controller.ui.operations.train.is_in_flight();
        ui.horizontal(|ui| {
            let label = if training { "Training..." } else { "Train Model" };
            let clicked = ui
                .add_enabled(self.controller.can_train(), egui::Button::new(label))
                .clicked();
            if clicked {
                self.controller.submit_training();
            }
            if training {
                ui.spinner();
            }
        });
        if let Some(message) = &self.controller.ui.training.last_message {
            ui.add_space(4.0);
            ui.label(RichText::new(message).color(style::palette().success));
        }
    }
}
