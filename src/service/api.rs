//! ureq-backed implementation of [`RemoteService`].

use serde::de::DeserializeOwned;
use url::Url;

use super::multipart::MultipartForm;
use super::types::{ModelMetrics, PredictionResponse, ScatterDataset, TrainResponse};
use super::{RemoteService, ServiceError};
use crate::http_client;
use crate::training::TrainingConfiguration;
use crate::upload::UploadedFile;

const MAX_LIST_RESPONSE_BYTES: usize = 256 * 1024;
const MAX_METRICS_RESPONSE_BYTES: usize = 4 * 1024 * 1024;
const MAX_PREDICT_RESPONSE_BYTES: usize = 256 * 1024;
const MAX_SCATTER_RESPONSE_BYTES: usize = 64 * 1024 * 1024;
const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

/// Gateway bound to one service base URL.
#[derive(Clone, Debug)]
pub struct HttpService {
    base: Url,
}

enum CallFailure {
    Status(u16, String),
    Transport(String),
}

impl CallFailure {
    fn describe(self) -> String {
        match self {
            CallFailure::Status(code, body) if body.is_empty() => format!("HTTP {code}"),
            CallFailure::Status(code, body) => format!("HTTP {code}: {body}"),
            CallFailure::Transport(err) => err,
        }
    }
}

impl HttpService {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, String> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| format!("Base URL {} cannot carry a path", self.base))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn get(&self, url: &Url) -> Result<ureq::Response, CallFailure> {
        tracing::debug!(%url, "GET");
        settle(http_client::agent().get(url.as_str()).call())
    }
}

fn settle(result: Result<ureq::Response, ureq::Error>) -> Result<ureq::Response, CallFailure> {
    match result {
        Ok(response) => Ok(response),
        Err(ureq::Error::Status(code, response)) => Err(CallFailure::Status(
            code,
            http_client::read_text_lossy(response, MAX_ERROR_BODY_BYTES),
        )),
        Err(ureq::Error::Transport(err)) => Err(CallFailure::Transport(err.to_string())),
    }
}

fn decode<T: DeserializeOwned>(
    response: ureq::Response,
    max_bytes: usize,
    fail: fn(String) -> ServiceError,
) -> Result<T, ServiceError> {
    http_client::read_json(response, max_bytes).map_err(|err| fail(err.to_string()))
}

impl RemoteService for HttpService {
    fn list_models(&self) -> Result<Vec<String>, ServiceError> {
        let url = self.endpoint(&["models"]).map_err(ServiceError::Network)?;
        let response = self
            .get(&url)
            .map_err(|failure| ServiceError::Network(failure.describe()))?;
        decode(response, MAX_LIST_RESPONSE_BYTES, ServiceError::Network)
    }

    fn fetch_metrics(&self, model_name: &str) -> Result<Option<ModelMetrics>, ServiceError> {
        let url = self
            .endpoint(&["model_metrics", model_name])
            .map_err(ServiceError::Network)?;
        match self.get(&url) {
            Ok(response) => decode(response, MAX_METRICS_RESPONSE_BYTES, ServiceError::Network).map(Some),
            Err(CallFailure::Status(404, _)) => {
                tracing::debug!(model = model_name, "No metrics stored for model");
                Ok(None)
            }
            Err(failure) => Err(ServiceError::Network(failure.describe())),
        }
    }

    fn train(&self, config: &TrainingConfiguration) -> Result<TrainResponse, ServiceError> {
        let url = self.endpoint(&["train"]).map_err(ServiceError::TrainingFailed)?;
        tracing::debug!(%url, model = config.model_name(), "POST train");
        let response = settle(
            http_client::agent()
                .post(url.as_str())
                .set("Accept", "application/json")
                .send_json(config),
        )
        .map_err(|failure| ServiceError::TrainingFailed(failure.describe()))?;
        decode(response, MAX_METRICS_RESPONSE_BYTES, ServiceError::TrainingFailed)
    }

    fn predict(
        &self,
        model_name: &str,
        file: &UploadedFile,
    ) -> Result<PredictionResponse, ServiceError> {
        let mut url = self.endpoint(&["predict"]).map_err(ServiceError::PredictionFailed)?;
        url.query_pairs_mut().append_pair("model_name", model_name);

        let mut form = MultipartForm::new();
        form.add_file("file", file.name(), file.mime(), file.bytes());
        let (content_type, body) = form.finish();

        tracing::debug!(%url, file = file.name(), bytes = file.len(), "POST predict");
        let response = settle(
            http_client::agent()
                .post(url.as_str())
                .set("Accept", "application/json")
                .set("Content-Type", &content_type)
                .send_bytes(&body),
        )
        .map_err(|failure| ServiceError::PredictionFailed(failure.describe()))?;
        decode(response, MAX_PREDICT_RESPONSE_BYTES, ServiceError::PredictionFailed)
    }

    fn fetch_scatter(&self) -> Result<ScatterDataset, ServiceError> {
        let url = self.endpoint(&["visualize"]).map_err(ServiceError::Network)?;
        let response = self
            .get(&url)
            .map_err(|failure| ServiceError::Network(failure.describe()))?;
        decode(response, MAX_SCATTER_RESPONSE_BYTES, ServiceError::Network)
    }
}
