use std::path::Path;

use super::jobs::PredictResult;
use super::*;
use crate::egui_app::state::{OperationState, Outcome, Prediction};
use crate::upload::{self, FileValidationError, UploadedFile};

impl SessionController {
    /// Open a native picker filtered to audio files.
    pub fn choose_file_via_dialog(&mut self) {
        let extensions: Vec<&str> = upload::audio_extensions().collect();
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Audio", extensions.as_slice())
            .pick_file()
        else {
            return;
        };
        self.choose_file(&path);
    }

    /// Validate and load the file at `path` as the upload candidate.
    pub fn choose_file(&mut self, path: &Path) {
        self.accept_file(UploadedFile::from_path(path));
    }

    /// Validate an in-memory file, e.g. one dropped onto the window.
    pub fn choose_file_bytes(&mut self, name: &str, mime: Option<&str>, bytes: Vec<u8>) {
        self.accept_file(UploadedFile::from_parts(name, mime, bytes));
    }

    fn accept_file(&mut self, result: Result<UploadedFile, FileValidationError>) {
        self.clear_error();
        match result {
            Ok(file) => {
                tracing::info!(file = file.name(), bytes = file.len(), "Audio file selected");
                self.set_status(format!("Selected {}", file.name()), StatusTone::Info);
                self.ui.upload = Some(file);
            }
            Err(err) => {
                self.raise_error(SessionError::Validation {
                    detail: err.to_string(),
                });
            }
        }
    }

    /// Whether the predict trigger should be enabled.
    pub fn can_predict(&self) -> bool {
        !self.jobs.predict_in_progress()
            && self.ui.upload.is_some()
            && self.ui.selection.model.is_some()
    }

    /// Classify the selected file with the selected model.
    ///
    /// Without both a file and a model, or while a prediction is in flight,
    /// this does nothing.
    pub fn submit_prediction(&mut self) {
        if !self.can_predict() {
            tracing::debug!("Prediction trigger ignored");
            return;
        }
        let (Some(model_name), Some(file)) =
            (self.ui.selection.model.clone(), self.ui.upload.clone())
        else {
            return;
        };
        self.clear_error();
        let file_name = file.name().to_string();
        if !self
            .jobs
            .begin_predict(Arc::clone(&self.service), model_name.clone(), file)
        {
            return;
        }
        tracing::info!(model = %model_name, file = %file_name, "Prediction started");
        self.ui.operations.predict = OperationState::InFlight;
        self.set_status(format!("Classifying {file_name}"), StatusTone::Busy);
    }

    pub(super) fn handle_prediction_finished(&mut self, message: PredictResult) {
        let PredictResult {
            model_name,
            file_name,
            result,
        } = message;
        match result {
            Ok(response) => {
                self.ui.operations.predict = OperationState::Settled(Outcome::Success);
                if self.selected_model() != Some(model_name.as_str()) {
                    tracing::debug!(model = %model_name, "Dropping prediction for deselected model");
                    self.set_status(
                        format!("Discarded {file_name} result from {model_name}; model changed"),
                        StatusTone::Warning,
                    );
                    return;
                }
                tracing::info!(
                    model = %model_name,
                    class = %response.predicted_class,
                    "Prediction finished"
                );
                self.set_status(
                    format!("{file_name}: {}", response.predicted_class),
                    StatusTone::Info,
                );
                self.ui.selection.prediction = Some(Prediction {
                    model_name,
                    file_name,
                    response,
                });
            }
            Err(err) => {
                self.ui.operations.predict = OperationState::Settled(Outcome::Failure);
                self.raise_error(SessionError::PredictionFailed {
                    detail: format!("{file_name}: {err}"),
                });
            }
        }
    }
}
