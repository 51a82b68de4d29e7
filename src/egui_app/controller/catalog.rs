use super::jobs::MetricsResult;
use super::*;
use crate::egui_app::state::{
    CatalogPhase, METRICS_UNAVAILABLE, MODELS_UNAVAILABLE, OperationState, Outcome,
};
use crate::service::ServiceError;

impl SessionController {
    /// Kick off the initial model list and scatter fetches. Runs once.
    pub fn start_session(&mut self) {
        if self.session_started {
            return;
        }
        self.session_started = true;
        tracing::info!("Starting classification session");
        self.set_status("Loading models", StatusTone::Busy);
        self.refresh_catalog();
        self.fetch_scatter();
    }

    /// User-requested reload of the model list.
    pub fn reload_models(&mut self) {
        self.clear_error();
        self.set_status("Loading models", StatusTone::Busy);
        self.refresh_catalog();
    }

    /// Re-fetch the model list; the current list stays visible meanwhile.
    pub(super) fn refresh_catalog(&mut self) {
        self.ui.catalog.phase = CatalogPhase::Loading;
        self.ui.operations.fetch_models = OperationState::InFlight;
        self.jobs.begin_list_models(Arc::clone(&self.service));
    }

    /// Make `model_name` the active model and fetch its metrics.
    ///
    /// Switching to a different model drops the prediction made with the old
    /// one. Re-selecting the current model only refreshes metrics.
    pub fn select_model(&mut self, model_name: &str) {
        self.clear_error();
        self.apply_selection(model_name);
    }

    pub fn selected_model(&self) -> Option<&str> {
        self.ui.selection.model.as_deref()
    }

    fn apply_selection(&mut self, model_name: &str) {
        if self.selected_model() != Some(model_name) {
            self.ui.selection.prediction = None;
            self.ui.selection.model = Some(model_name.to_string());
        }
        self.fetch_metrics(model_name.to_string());
    }

    fn fetch_metrics(&mut self, model_name: String) {
        tracing::debug!(model = %model_name, "Fetching model metrics");
        self.ui.operations.fetch_metrics = OperationState::InFlight;
        self.jobs
            .begin_fetch_metrics(Arc::clone(&self.service), model_name);
    }

    pub(super) fn handle_models_listed(&mut self, result: Result<Vec<String>, ServiceError>) {
        let still_loading = self.jobs.models_pending() > 0;
        match result {
            Ok(models) => {
                tracing::info!(count = models.len(), "Model list loaded");
                self.ui.catalog.models = models;
                self.ui.catalog.has_loaded = true;
                if !still_loading {
                    self.ui.catalog.phase = CatalogPhase::Loaded;
                }
                self.ui.operations.fetch_models = settled_unless(still_loading, Outcome::Success);
                self.set_status(
                    format!("{} models available", self.ui.catalog.models.len()),
                    StatusTone::Info,
                );
                if self.ui.selection.model.is_none()
                    && let Some(first) = self.ui.catalog.models.first().cloned()
                {
                    self.apply_selection(&first);
                }
            }
            Err(err) => {
                if !still_loading {
                    self.ui.catalog.phase = if self.ui.catalog.has_loaded {
                        CatalogPhase::Loaded
                    } else {
                        CatalogPhase::Uninitialized
                    };
                }
                self.ui.operations.fetch_models = settled_unless(still_loading, Outcome::Failure);
                self.raise_error(SessionError::Network {
                    message: MODELS_UNAVAILABLE,
                    detail: err.to_string(),
                });
            }
        }
    }

    pub(super) fn handle_metrics_fetched(&mut self, message: MetricsResult) {
        let MetricsResult { model_name, result } = message;
        let still_pending = self.jobs.metrics_pending() > 0;
        match result {
            Ok(metrics) => {
                self.ui.operations.fetch_metrics = settled_unless(still_pending, Outcome::Success);
                if metrics.is_none() {
                    tracing::info!(model = %model_name, "No metrics available yet");
                }
                self.ui.selection.metrics = metrics;
            }
            Err(err) => {
                self.ui.operations.fetch_metrics = settled_unless(still_pending, Outcome::Failure);
                self.ui.selection.metrics = None;
                self.raise_error(SessionError::Network {
                    message: METRICS_UNAVAILABLE,
                    detail: format!("{model_name}: {err}"),
                });
            }
        }
    }
}

fn settled_unless(still_pending: bool, outcome: Outcome) -> OperationState {
    if still_pending {
        OperationState::InFlight
    } else {
        OperationState::Settled(outcome)
    }
}
