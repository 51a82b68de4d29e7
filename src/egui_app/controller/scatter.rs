use super::*;
use crate::egui_app::view_model::scatter::scatter_view;
use crate::service::{ScatterDataset, ServiceError};

impl SessionController {
    pub(super) fn fetch_scatter(&mut self) {
        self.jobs.begin_fetch_scatter(Arc::clone(&self.service));
    }

    // The plot is optional; failures stay out of the error slot.
    pub(super) fn handle_scatter_fetched(&mut self, result: Result<ScatterDataset, ServiceError>) {
        match result {
            Ok(dataset) => {
                tracing::info!(
                    points = dataset.data.len(),
                    labels = dataset.labels.len(),
                    "Feature scatter loaded"
                );
                self.ui.scatter = scatter_view(&dataset);
            }
            Err(err) => {
                tracing::warn!("Feature scatter unavailable: {err}");
            }
        }
    }
}
