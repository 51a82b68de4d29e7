//! Gateway to the remote training and inference service.
//!
//! Each call is a single network attempt: no retry, no caching, no queueing.
//! Failures come back as [`ServiceError`] values; nothing panics past this
//! boundary.

pub mod api;
mod multipart;
pub mod types;

pub use api::HttpService;
pub use types::{
    ClassScores, ClassificationReport, FamilyMetrics, ModelMetrics, PredictedClass,
    PredictionResponse, ScatterDataset, ScatterPoint, TrainResponse,
};

use crate::training::TrainingConfiguration;
use crate::upload::UploadedFile;

/// Typed failure of a gateway call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Transport failure, unexpected status, or malformed body on a read call.
    #[error("Network error: {0}")]
    Network(String),
    /// The train call did not produce a usable response.
    #[error("Training failed: {0}")]
    TrainingFailed(String),
    /// The predict call did not produce a usable response.
    #[error("Prediction failed: {0}")]
    PredictionFailed(String),
}

/// Operations offered by the remote service.
///
/// Implementations block the calling thread; the controller runs them on
/// worker threads.
pub trait RemoteService: Send + Sync {
    /// `GET /models`
    fn list_models(&self) -> Result<Vec<String>, ServiceError>;

    /// `GET /model_metrics/{model_name}`; `Ok(None)` when the service has no
    /// metrics for the model (HTTP 404).
    fn fetch_metrics(&self, model_name: &str) -> Result<Option<ModelMetrics>, ServiceError>;

    /// `POST /train` with the full configuration as JSON.
    fn train(&self, config: &TrainingConfiguration) -> Result<TrainResponse, ServiceError>;

    /// `POST /predict?model_name=...` with the file as a multipart `file` part.
    fn predict(
        &self,
        model_name: &str,
        file: &UploadedFile,
    ) -> Result<PredictionResponse, ServiceError>;

    /// `GET /visualize`
    fn fetch_scatter(&self) -> Result<ScatterDataset, ServiceError>;
}
