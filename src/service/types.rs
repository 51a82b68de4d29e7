//! Response schemas for every service endpoint.
//!
//! Bodies are decoded into these types at the gateway boundary; anything that
//! does not fit is reported as a service error instead of reaching the UI.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::training::ModelFamily;

/// Precision/recall/F1/support for one class or one average row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassScores {
    pub precision: f64,
    pub recall: f64,
    #[serde(rename = "f1-score")]
    pub f1_score: f64,
    pub support: f64,
}

/// A scikit-learn style classification report.
///
/// Per-class rows are keyed by the class key exactly as the service sends it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub accuracy: f64,
    #[serde(rename = "macro avg")]
    pub macro_avg: ClassScores,
    #[serde(rename = "weighted avg")]
    pub weighted_avg: ClassScores,
    #[serde(flatten)]
    pub classes: BTreeMap<String, ClassScores>,
}

/// Evaluation results for one model family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FamilyMetrics {
    pub test_accuracy: f64,
    pub test_auc: f64,
    pub train_accuracy: f64,
    pub classification_report: ClassificationReport,
}

/// Metrics keyed by model family; any subset may be present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svm: Option<FamilyMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_forest: Option<FamilyMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knn: Option<FamilyMetrics>,
}

impl ModelMetrics {
    pub fn get(&self, family: ModelFamily) -> Option<&FamilyMetrics> {
        match family {
            ModelFamily::Svm => self.svm.as_ref(),
            ModelFamily::RandomForest => self.random_forest.as_ref(),
            ModelFamily::Knn => self.knn.as_ref(),
        }
    }

    /// Present families in display order (svm, random forest, knn).
    pub fn families(&self) -> impl Iterator<Item = (ModelFamily, &FamilyMetrics)> {
        ModelFamily::ALL
            .into_iter()
            .filter_map(|family| self.get(family).map(|metrics| (family, metrics)))
    }

    pub fn is_empty(&self) -> bool {
        self.families().next().is_none()
    }
}

/// Body of a successful `POST /train`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainResponse {
    pub message: String,
    pub metrics: ModelMetrics,
}

/// Class reported by the predict endpoint: an index, a label, or a float
/// index from services that emit numpy floats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictedClass {
    Index(i64),
    Number(f64),
    Label(String),
}

impl PredictedClass {
    /// Key form used for category lookups. Whole floats map to their
    /// integer key so `42.0` resolves like `42`.
    pub fn as_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PredictedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictedClass::Index(index) => write!(f, "{index}"),
            PredictedClass::Number(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value:.0}")
            }
            PredictedClass::Number(value) => write!(f, "{value}"),
            PredictedClass::Label(label) => f.write_str(label),
        }
    }
}

/// Body of a successful `POST /predict`. Extra fields are kept verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_class: PredictedClass,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One projected feature vector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Body of `GET /visualize`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScatterDataset {
    pub data: Vec<ScatterPoint>,
    pub labels: Vec<String>,
}
