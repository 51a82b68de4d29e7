use super::jobs::JobMessage;
use super::*;

impl SessionController {
    /// Apply every finished service call, in completion order.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };

            match message {
                JobMessage::ModelsListed(result) => {
                    self.jobs.finish_list_models();
                    self.handle_models_listed(result);
                }
                JobMessage::MetricsFetched(message) => {
                    self.jobs.finish_fetch_metrics();
                    self.handle_metrics_fetched(message);
                }
                JobMessage::Trained(message) => {
                    self.jobs.clear_train();
                    self.handle_training_finished(message);
                }
                JobMessage::Predicted(message) => {
                    self.jobs.clear_predict();
                    self.handle_prediction_finished(message);
                }
                JobMessage::ScatterFetched(result) => {
                    self.jobs.clear_scatter();
                    self.handle_scatter_fetched(result);
                }
            }
        }
    }
}
