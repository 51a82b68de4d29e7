use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::service::{
    ModelMetrics, PredictionResponse, RemoteService, ScatterDataset, ServiceError, TrainResponse,
};
use crate::training::TrainingConfiguration;
use crate::upload::UploadedFile;

pub(crate) enum JobMessage {
    ModelsListed(Result<Vec<String>, ServiceError>),
    MetricsFetched(MetricsResult),
    Trained(TrainResult),
    Predicted(PredictResult),
    ScatterFetched(Result<ScatterDataset, ServiceError>),
}

#[derive(Debug)]
pub(crate) struct MetricsResult {
    pub(crate) model_name: String,
    pub(crate) result: Result<Option<ModelMetrics>, ServiceError>,
}

#[derive(Debug)]
pub(crate) struct TrainResult {
    pub(crate) model_name: String,
    pub(crate) result: Result<TrainResponse, ServiceError>,
}

#[derive(Debug)]
pub(crate) struct PredictResult {
    pub(crate) model_name: String,
    pub(crate) file_name: String,
    pub(crate) result: Result<PredictionResponse, ServiceError>,
}

/// Worker threads and the channel they report back on.
///
/// Each job makes exactly one gateway call and sends exactly one message.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    models_pending: usize,
    metrics_pending: usize,
    train_in_progress: bool,
    predict_in_progress: bool,
    scatter_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            models_pending: 0,
            metrics_pending: 0,
            train_in_progress: false,
            predict_in_progress: false,
            scatter_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn has_pending(&self) -> bool {
        self.models_pending > 0
            || self.metrics_pending > 0
            || self.train_in_progress
            || self.predict_in_progress
            || self.scatter_in_progress
    }

    fn spawn(&self, job: impl FnOnce() -> JobMessage + Send + 'static) {
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let _ = tx.send(job());
        });
    }

    pub(super) fn begin_list_models(&mut self, service: Arc<dyn RemoteService>) {
        self.models_pending += 1;
        self.spawn(move || JobMessage::ModelsListed(service.list_models()));
    }

    pub(super) fn models_pending(&self) -> usize {
        self.models_pending
    }

    pub(super) fn finish_list_models(&mut self) {
        self.models_pending = self.models_pending.saturating_sub(1);
    }

    pub(super) fn begin_fetch_metrics(&mut self, service: Arc<dyn RemoteService>, model_name: String) {
        self.metrics_pending += 1;
        self.spawn(move || {
            let result = service.fetch_metrics(&model_name);
            JobMessage::MetricsFetched(MetricsResult { model_name, result })
        });
    }

    pub(super) fn metrics_pending(&self) -> usize {
        self.metrics_pending
    }

    pub(super) fn finish_fetch_metrics(&mut self) {
        self.metrics_pending = self.metrics_pending.saturating_sub(1);
    }

    pub(super) fn train_in_progress(&self) -> bool {
        self.train_in_progress
    }

    pub(super) fn begin_train(
        &mut self,
        service: Arc<dyn RemoteService>,
        config: TrainingConfiguration,
    ) -> bool {
        if self.train_in_progress {
            return false;
        }
        self.train_in_progress = true;
        self.spawn(move || {
            let result = service.train(&config);
            JobMessage::Trained(TrainResult {
                model_name: config.model_name().to_string(),
                result,
            })
        });
        true
    }

    pub(super) fn clear_train(&mut self) {
        self.train_in_progress = false;
    }

    pub(super) fn predict_in_progress(&self) -> bool {
        self.predict_in_progress
    }

    pub(super) fn begin_predict(
        &mut self,
        service: Arc<dyn RemoteService>,
        model_name: String,
        file: UploadedFile,
    ) -> bool {
        if self.predict_in_progress {
            return false;
        }
        self.predict_in_progress = true;
        self.spawn(move || {
            let result = service.predict(&model_name, &file);
            JobMessage::Predicted(PredictResult {
                model_name,
                file_name: file.name().to_string(),
                result,
            })
        });
        true
    }

    pub(super) fn clear_predict(&mut self) {
        self.predict_in_progress = false;
    }

    pub(super) fn begin_fetch_scatter(&mut self, service: Arc<dyn RemoteService>) {
        if self.scatter_in_progress {
            return;
        }
        self.scatter_in_progress = true;
        self.spawn(move || JobMessage::ScatterFetched(service.fetch_scatter()));
    }

    pub(super) fn clear_scatter(&mut self) {
        self.scatter_in_progress = false;
    }
}
