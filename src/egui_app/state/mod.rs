//! Shared state types for the egui UI.

mod error;
mod operations;
mod status;

pub use error::*;
pub use operations::*;
pub use status::*;

use crate::egui_app::view_model::scatter::ScatterView;
use crate::service::{ModelMetrics, PredictionResponse};
use crate::training::TrainingConfiguration;
use crate::upload::UploadedFile;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub catalog: CatalogState,
    pub selection: SelectionState,
    /// Last accepted audio file; only replaced by another valid selection.
    pub upload: Option<UploadedFile>,
    pub training: TrainingState,
    pub operations: OperationsState,
    pub scatter: ScatterView,
    /// Single user-visible error slot.
    pub error: Option<SessionError>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            catalog: CatalogState::default(),
            selection: SelectionState::default(),
            upload: None,
            training: TrainingState::default(),
            operations: OperationsState::default(),
            scatter: ScatterView::default(),
            error: None,
        }
    }
}

/// Lifecycle of the model list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogPhase {
    #[default]
    Uninitialized,
    Loading,
    Loaded,
}

/// Models known to the service, in service order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub phase: CatalogPhase,
    pub models: Vec<String>,
    /// True once any list fetch has succeeded.
    pub has_loaded: bool,
}

/// Model the user is working with, plus what was fetched for it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    pub model: Option<String>,
    /// `None` when nothing was fetched yet or the service has no metrics.
    pub metrics: Option<ModelMetrics>,
    pub prediction: Option<Prediction>,
}

/// A classification result and the inputs that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub model_name: String,
    pub file_name: String,
    pub response: PredictionResponse,
}

/// Training form values and the last confirmation message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrainingState {
    pub config: TrainingConfiguration,
    pub last_message: Option<String>,
}
