//! Session controller: owns UI state and runs service calls off the UI thread.

mod background_jobs;
mod catalog;
mod jobs;
mod prediction;
mod scatter;
#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;
mod training;

use std::sync::Arc;

use jobs::ControllerJobs;

use crate::egui_app::state::{SessionError, StatusBarState, UiState};
use crate::egui_app::ui::style::StatusTone;
use crate::service::RemoteService;
use crate::settings::CategoryTable;

/// Maintains session state and bridges the UI to the remote service.
///
/// All mutation happens on the thread that owns the controller. Service
/// calls run on worker threads and are applied by [`poll_background_jobs`].
///
/// [`poll_background_jobs`]: SessionController::poll_background_jobs
pub struct SessionController {
    pub ui: UiState,
    service: Arc<dyn RemoteService>,
    categories: CategoryTable,
    jobs: ControllerJobs,
    session_started: bool,
}

impl SessionController {
    pub fn new(service: Arc<dyn RemoteService>, categories: CategoryTable) -> Self {
        Self {
            ui: UiState::default(),
            service,
            categories,
            jobs: ControllerJobs::new(),
            session_started: false,
        }
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    /// True while any service call has not been applied yet.
    pub fn has_pending_jobs(&self) -> bool {
        self.jobs.has_pending()
    }

    pub fn dismiss_error(&mut self) {
        self.ui.error = None;
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::with_tone(text, tone);
    }

    fn clear_error(&mut self) {
        self.ui.error = None;
    }

    fn raise_error(&mut self, error: SessionError) {
        tracing::warn!(detail = error.detail(), "{error}");
        self.set_status(error.to_string(), StatusTone::Error);
        self.ui.error = Some(error);
    }
}
