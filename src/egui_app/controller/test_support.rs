use std::collections::{HashMap, VecDeque};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::SessionController;
use crate::service::{
    ModelMetrics, PredictionResponse, RemoteService, ScatterDataset, ServiceError, TrainResponse,
};
use crate::settings::CategoryTable;
use crate::training::TrainingConfiguration;
use crate::upload::UploadedFile;

const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq)]
pub(super) enum ServiceCall {
    ListModels,
    FetchMetrics(String),
    Train(TrainingConfiguration),
    Predict { model: String, file: String },
    FetchScatter,
}

/// Scripted [`RemoteService`] that records every call.
#[derive(Default)]
pub(super) struct FakeService {
    models: Mutex<VecDeque<Result<Vec<String>, ServiceError>>>,
    metrics: Mutex<HashMap<String, Result<Option<ModelMetrics>, ServiceError>>>,
    train: Mutex<VecDeque<Result<TrainResponse, ServiceError>>>,
    predict: Mutex<VecDeque<Result<PredictionResponse, ServiceError>>>,
    scatter: Mutex<Option<Result<ScatterDataset, ServiceError>>>,
    train_gate: Mutex<Option<Receiver<()>>>,
    predict_gate: Mutex<Option<Receiver<()>>>,
    calls: Mutex<Vec<ServiceCall>>,
}

impl FakeService {
    pub(super) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(super) fn push_models(&self, result: Result<Vec<&str>, ServiceError>) {
        let result = result.map(|names| names.into_iter().map(str::to_string).collect());
        self.models.lock().unwrap().push_back(result);
    }

    pub(super) fn set_metrics(
        &self,
        model: &str,
        result: Result<Option<ModelMetrics>, ServiceError>,
    ) {
        self.metrics
            .lock()
            .unwrap()
            .insert(model.to_string(), result);
    }

    pub(super) fn push_train(&self, result: Result<TrainResponse, ServiceError>) {
        self.train.lock().unwrap().push_back(result);
    }

    pub(super) fn push_predict(&self, result: Result<PredictionResponse, ServiceError>) {
        self.predict.lock().unwrap().push_back(result);
    }

    pub(super) fn set_scatter(&self, result: Result<ScatterDataset, ServiceError>) {
        *self.scatter.lock().unwrap() = Some(result);
    }

    /// Block train calls until the returned sender fires or is dropped.
    pub(super) fn hold_training(&self) -> Sender<()> {
        let (tx, rx) = mpsc::channel();
        *self.train_gate.lock().unwrap() = Some(rx);
        tx
    }

    /// Block predict calls until the returned sender fires or is dropped.
    pub(super) fn hold_prediction(&self) -> Sender<()> {
        let (tx, rx) = mpsc::channel();
        *self.predict_gate.lock().unwrap() = Some(rx);
        tx
    }

    pub(super) fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(super) fn count(&self, matches: impl Fn(&ServiceCall) -> bool) -> usize {
        self.calls().iter().filter(|call| matches(call)).count()
    }

    fn record(&self, call: ServiceCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn wait_on(gate: &Mutex<Option<Receiver<()>>>) {
        let gate = gate.lock().unwrap().take();
        if let Some(rx) = gate {
            let _ = rx.recv();
        }
    }
}

impl RemoteService for FakeService {
    fn list_models(&self) -> Result<Vec<String>, ServiceError> {
        self.record(ServiceCall::ListModels);
        self.models
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn fetch_metrics(&self, model_name: &str) -> Result<Option<ModelMetrics>, ServiceError> {
        self.record(ServiceCall::FetchMetrics(model_name.to_string()));
        self.metrics
            .lock()
            .unwrap()
            .get(model_name)
            .cloned()
            .unwrap_or(Ok(None))
    }

    fn train(&self, config: &TrainingConfiguration) -> Result<TrainResponse, ServiceError> {
        self.record(ServiceCall::Train(config.clone()));
        Self::wait_on(&self.train_gate);
        self.train
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::TrainingFailed("unscripted".into())))
    }

    fn predict(
        &self,
        model_name: &str,
        file: &UploadedFile,
    ) -> Result<PredictionResponse, ServiceError> {
        self.record(ServiceCall::Predict {
            model: model_name.to_string(),
            file: file.name().to_string(),
        });
        Self::wait_on(&self.predict_gate);
        self.predict
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::PredictionFailed("unscripted".into())))
    }

    fn fetch_scatter(&self) -> Result<ScatterDataset, ServiceError> {
        self.record(ServiceCall::FetchScatter);
        self.scatter
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(ScatterDataset::default()))
    }
}

pub(super) fn controller_with(service: &Arc<FakeService>) -> SessionController {
    let service: Arc<dyn RemoteService> = service.clone();
    SessionController::new(service, CategoryTable::builtin())
}

/// Poll until every started job has been applied.
pub(super) fn settle(controller: &mut SessionController) {
    let deadline = Instant::now() + SETTLE_TIMEOUT;
    loop {
        controller.poll_background_jobs();
        if !controller.has_pending_jobs() {
            return;
        }
        assert!(Instant::now() < deadline, "background jobs did not settle");
        std::thread::sleep(Duration::from_millis(2));
    }
}
