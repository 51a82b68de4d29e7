//! Helpers to convert service results into egui-facing view data.

pub mod metrics;
pub mod scatter;

use crate::egui_app::state::Prediction;
use crate::settings::CategoryTable;

/// Format a ratio as a percentage with two decimals (`0.8231` -> `"82.31%"`).
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format a support count, dropping the fraction when it is integral.
pub fn format_support(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Text for the predicted class, with the category name when it is known.
pub fn prediction_label(prediction: &Prediction, categories: &CategoryTable) -> String {
    let class = &prediction.response.predicted_class;
    match categories.name_for(&class.as_key()) {
        Some(name) => format!("{class} ({name})"),
        None => class.to_string(),
    }
}
