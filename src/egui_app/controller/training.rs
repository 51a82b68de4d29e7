use super::jobs::TrainResult;
use super::*;
use crate::egui_app::state::{OperationState, Outcome};
use crate::training::{Feature, ModelFamily, TrainingConfiguration};

impl SessionController {
    pub fn training_config(&self) -> &TrainingConfiguration {
        &self.ui.training.config
    }

    pub fn set_feature(&mut self, feature: Feature, enabled: bool) {
        self.ui.training.config.set_feature(feature, enabled);
    }

    pub fn set_model_name(&mut self, name: impl Into<String>) {
        self.ui.training.config.set_model_name(name);
    }

    pub fn set_model_family(&mut self, family: ModelFamily) {
        self.ui.training.config.set_model_family(family);
    }

    pub fn set_normalize(&mut self, normalize: bool) {
        self.ui.training.config.set_normalize(normalize);
    }

    pub fn set_apply_pca(&mut self, apply: bool) {
        self.ui.training.config.set_apply_pca(apply);
    }

    pub fn set_pca_components(&mut self, value: f64) {
        self.ui.training.config.set_pca_components(value);
    }

    pub fn set_svm_c(&mut self, value: f64) {
        self.ui.training.config.set_svm_c(value);
    }

    pub fn set_svm_gamma(&mut self, value: f64) {
        self.ui.training.config.set_svm_gamma(value);
    }

    pub fn set_rf_estimators(&mut self, value: u32) {
        self.ui.training.config.set_rf_estimators(value);
    }

    pub fn set_rf_max_depth(&mut self, value: u32) {
        self.ui.training.config.set_rf_max_depth(value);
    }

    pub fn set_knn_neighbors(&mut self, value: u32) {
        self.ui.training.config.set_knn_neighbors(value);
    }

    /// Whether the train trigger should be enabled.
    pub fn can_train(&self) -> bool {
        !self.jobs.train_in_progress() && self.ui.training.config.has_model_name()
    }

    /// Send the current configuration to the service for training.
    ///
    /// Ignored while a training run is in flight or when the model name is
    /// blank.
    pub fn submit_training(&mut self) {
        if !self.can_train() {
            tracing::debug!("Training trigger ignored");
            return;
        }
        self.clear_error();
        let config = self.ui.training.config.clone();
        let model_name = config.model_name().to_string();
        if !self.jobs.begin_train(Arc::clone(&self.service), config) {
            return;
        }
        tracing::info!(model = %model_name, "Training started");
        self.ui.operations.train = OperationState::InFlight;
        self.set_status(format!("Training {model_name}"), StatusTone::Busy);
    }

    pub(super) fn handle_training_finished(&mut self, message: TrainResult) {
        let TrainResult { model_name, result } = message;
        match result {
            Ok(response) => {
                tracing::info!(model = %model_name, message = %response.message, "Training finished");
                self.ui.operations.train = OperationState::Settled(Outcome::Success);
                self.ui.selection.metrics = Some(response.metrics);
                self.set_status(response.message.clone(), StatusTone::Info);
                self.ui.training.last_message = Some(response.message);
                self.refresh_catalog();
            }
            Err(err) => {
                self.ui.operations.train = OperationState::Settled(Outcome::Failure);
                self.raise_error(SessionError::TrainingFailed {
                    detail: format!("{model_name}: {err}"),
                });
            }
        }
    }
}
