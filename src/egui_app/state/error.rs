/// Message shown when the model list cannot be fetched.
pub const MODELS_UNAVAILABLE: &str = "Failed to fetch available models";
/// Message shown when metrics for the selected model cannot be fetched.
pub const METRICS_UNAVAILABLE: &str = "Failed to fetch model metrics";

/// Error surfaced to the user in the session's error slot.
///
/// `Display` yields the user-facing message; `detail` keeps the underlying
/// cause for logs and hover text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Please select a valid audio file")]
    Validation { detail: String },
    #[error("{message}")]
    Network {
        message: &'static str,
        detail: String,
    },
    #[error("Failed to train model. Please try again.")]
    TrainingFailed { detail: String },
    #[error("Failed to get prediction. Please try again.")]
    PredictionFailed { detail: String },
}

impl SessionError {
    pub fn detail(&self) -> &str {
        match self {
            SessionError::Validation { detail }
            | SessionError::Network { detail, .. }
            | SessionError::TrainingFailed { detail }
            | SessionError::PredictionFailed { detail } => detail,
        }
    }
}
